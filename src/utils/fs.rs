use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{CompareError, Result};

/// 获取目录下所有普通文件的相对路径集合
///
/// 递归遍历整棵目录树，路径相对于 `dir`，重复路径自动合并。
/// 空目录返回空集合；遍历本身失败会以 `FileAccess` 上报，而不是静默跳过。
pub fn list_files(dir: &Path) -> Result<HashSet<PathBuf>> {
    let mut files = HashSet::new();

    for entry in WalkDir::new(dir) {
        let entry = entry.map_err(|e| {
            let path = e
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| dir.to_path_buf());
            CompareError::FileAccess {
                path,
                source: e.into(),
            }
        })?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let relative_path = path
            .strip_prefix(dir)
            .map_err(|e| CompareError::FileAccess {
                path: path.to_path_buf(),
                source: io::Error::other(e),
            })?
            .to_path_buf();
        files.insert(relative_path);
    }

    Ok(files)
}
