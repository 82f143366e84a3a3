mod extract;
mod locate;
mod report;

pub use extract::{ACCEPTED_EXTENSIONS, check_archive_format, extract_archive};
pub use locate::find_app_dir;
pub use report::{ComparisonReport, percentage};

use std::path::Path;
use tempfile::TempDir;

use crate::error::{Result, file_access};
use crate::utils::list_files;

/// 对比两个应用包归档，返回完整的对比结果
///
/// 流水线：格式校验 → 解压 → 定位 .app → 枚举相对路径 → 计算交集与哈希。
/// 任何一步失败都会中止整次运行，不会产生部分结果。
pub fn compare_archives(path1: &Path, path2: &Path) -> Result<ComparisonReport> {
    // 先校验两个输入，再开始解压，避免只解压了一侧的中间状态
    check_archive_format(path1)?;
    check_archive_format(path2)?;

    // 临时目录由本作用域持有，任何退出路径（包括错误）都会自动清理
    let temp = std::env::temp_dir();
    let scratch1 = TempDir::new().map_err(file_access(&temp))?;
    let scratch2 = TempDir::new().map_err(file_access(&temp))?;

    extract_archive(path1, scratch1.path())?;
    extract_archive(path2, scratch2.path())?;

    let app_dir1 = find_app_dir(path1, scratch1.path())?;
    let app_dir2 = find_app_dir(path2, scratch2.path())?;

    let files1 = list_files(&app_dir1)?;
    let files2 = list_files(&app_dir2)?;

    ComparisonReport::build(path1, path2, &app_dir1, &app_dir2, &files1, &files2)
}
