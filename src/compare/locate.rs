use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CompareError, Result, file_access};

/// 应用目录的后缀名
const BUNDLE_SUFFIX: &str = ".app";

/// 在解压根目录的 Payload 子目录中定位唯一的 .app 目录
///
/// `archive_path` 仅用于错误信息，指明是哪个输入出了问题。
/// 找不到 Payload 目录或其中没有 .app 条目返回 `BundleNotFound`；
/// 出现多个 .app 条目属于歧义输入，返回 `MultipleBundles` 而不是默默取第一个。
pub fn find_app_dir(archive_path: &Path, extract_root: &Path) -> Result<PathBuf> {
    let payload_dir = extract_root.join("Payload");
    if !payload_dir.is_dir() {
        return Err(CompareError::BundleNotFound {
            path: archive_path.to_path_buf(),
        });
    }

    let mut candidates = Vec::new();
    for entry in fs::read_dir(&payload_dir).map_err(file_access(&payload_dir))? {
        let entry = entry.map_err(file_access(&payload_dir))?;
        if entry.file_name().to_string_lossy().ends_with(BUNDLE_SUFFIX) {
            candidates.push(entry.path());
        }
    }

    if candidates.len() > 1 {
        return Err(CompareError::MultipleBundles {
            path: archive_path.to_path_buf(),
            count: candidates.len(),
        });
    }

    candidates
        .into_iter()
        .next()
        .ok_or_else(|| CompareError::BundleNotFound {
            path: archive_path.to_path_buf(),
        })
}
