use clap::Parser;
use std::path::PathBuf;

/// iOS 应用包对比工具
#[derive(Parser)]
#[command(name = "ipac")]
#[command(about = "对比两个 .ipa / .zip 应用包的文件结构与内容", long_about = None)]
pub struct Cli {
    /// 第一个应用包路径
    pub path1: PathBuf,
    /// 第二个应用包路径
    pub path2: PathBuf,
}
