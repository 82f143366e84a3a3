use std::fs::{self, File};
use std::io;
use std::path::Path;
use zip::ZipArchive;

use crate::error::{CompareError, Result, file_access};

/// 可接受的归档扩展名（大小写敏感）
pub const ACCEPTED_EXTENSIONS: &[&str] = &["zip", "ipa"];

/// 校验归档路径的扩展名是否受支持
pub fn check_archive_format(path: &Path) -> Result<()> {
    let supported = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ACCEPTED_EXTENSIONS.contains(&ext));

    if supported {
        Ok(())
    } else {
        Err(CompareError::UnsupportedFormat {
            path: path.to_path_buf(),
        })
    }
}

/// 将 zip 容器的全部条目解压到目标目录，保留内部目录结构
pub fn extract_archive(path: &Path, dest: &Path) -> Result<()> {
    let file = File::open(path).map_err(file_access(path))?;
    let mut archive = ZipArchive::new(file).map_err(|source| CompareError::ArchiveFormat {
        path: path.to_path_buf(),
        source,
    })?;

    for i in 0..archive.len() {
        let mut entry = archive
            .by_index(i)
            .map_err(|source| CompareError::ArchiveFormat {
                path: path.to_path_buf(),
                source,
            })?;

        // enclosed_name 过滤掉可能越界的条目名 (zip slip)
        let Some(entry_path) = entry.enclosed_name() else {
            continue;
        };
        let out_path = dest.join(entry_path);

        if entry.is_dir() {
            fs::create_dir_all(&out_path).map_err(file_access(&out_path))?;
        } else {
            if let Some(parent) = out_path.parent() {
                fs::create_dir_all(parent).map_err(file_access(parent))?;
            }
            let mut out_file = File::create(&out_path).map_err(file_access(&out_path))?;
            io::copy(&mut entry, &mut out_file).map_err(file_access(&out_path))?;
        }
    }

    Ok(())
}
