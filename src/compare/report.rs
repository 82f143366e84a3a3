use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::utils::compute_file_hash;

/// 一次对比运行的完整结果
///
/// 只负责计算与渲染，不直接写控制台，由调用方决定如何输出。
#[derive(Debug)]
pub struct ComparisonReport {
    pub name1: String,
    pub name2: String,
    pub total1: usize,
    pub total2: usize,
    pub intersection_size: usize,
    pub percentage1: f64,
    pub percentage2: f64,
    pub md5_matches: usize,
    pub md5_percentage: f64,
    /// 交集中内容完全一致的相对路径，保留在结果里但不出现在渲染输出中
    pub matched_files: Vec<PathBuf>,
}

/// count 占 total 的百分比，total 为 0 时返回 0，不会除零
pub fn percentage(count: usize, total: usize) -> f64 {
    if total > 0 {
        count as f64 / total as f64 * 100.0
    } else {
        0.0
    }
}

impl ComparisonReport {
    /// 根据两侧的相对路径集合与 .app 目录计算对比结果
    ///
    /// 交集中的每个文件都会在两侧各读一遍并计算 MD5；
    /// 任何一个文件读不了都是致命错误，没有跳过继续的模式。
    pub fn build(
        path1: &Path,
        path2: &Path,
        app_dir1: &Path,
        app_dir2: &Path,
        files1: &HashSet<PathBuf>,
        files2: &HashSet<PathBuf>,
    ) -> Result<Self> {
        // 排序只是为了让哈希阶段的遍历顺序稳定，结果本身与顺序无关
        let mut intersection: Vec<&PathBuf> = files1.intersection(files2).collect();
        intersection.sort();

        let mut md5_matches = 0;
        let mut matched_files = Vec::new();
        for file in &intersection {
            let hash1 = compute_file_hash(&app_dir1.join(file))?;
            let hash2 = compute_file_hash(&app_dir2.join(file))?;
            if hash1 == hash2 {
                matched_files.push((*file).clone());
                md5_matches += 1;
            }
        }

        Ok(Self {
            name1: basename(path1),
            name2: basename(path2),
            total1: files1.len(),
            total2: files2.len(),
            intersection_size: intersection.len(),
            percentage1: percentage(intersection.len(), files1.len()),
            percentage2: percentage(intersection.len(), files2.len()),
            md5_matches,
            md5_percentage: percentage(md5_matches, intersection.len()),
            matched_files,
        })
    }

    /// 渲染四行文本报告
    pub fn render(&self) -> String {
        format!(
            "Intersection of files in .app directories:\n\
             Intersection as percentage of {} files: {:.2}% file count: {}\n\
             Intersection as percentage of {} files: {:.2}% file count: {}\n\
             Intersection percentage of files with same MD5 hash: {:.2}% file count: {}\n",
            self.name1,
            self.percentage1,
            self.total1,
            self.name2,
            self.percentage2,
            self.total2,
            self.md5_percentage,
            self.intersection_size,
        )
    }
}

fn basename(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
