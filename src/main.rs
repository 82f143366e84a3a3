use anyhow::{Result, anyhow};
use clap::Parser;
use std::process;

use ipa_compare_tool::cli::Cli;
use ipa_compare_tool::compare::compare_archives;

fn main() {
    let cli = Cli::parse();

    // 错误只输出一行描述，不展开 Caused by 链
    if let Err(err) = run(&cli) {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    if !cli.path1.exists() {
        return Err(anyhow!("archive does not exist: {:?}", cli.path1));
    }
    if !cli.path2.exists() {
        return Err(anyhow!("archive does not exist: {:?}", cli.path2));
    }

    let report = compare_archives(&cli.path1, &cli.path2)?;
    print!("{}", report.render());

    Ok(())
}
