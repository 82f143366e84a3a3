use std::path::{Path, PathBuf};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CompareError>;

/// 对比流程中的错误类型，所有错误都会中止整次运行
#[derive(Debug, Error)]
pub enum CompareError {
    #[error("unsupported archive format: {path:?} (expected a .zip or .ipa file)")]
    UnsupportedFormat { path: PathBuf },

    #[error("invalid or corrupt archive: {path:?}")]
    ArchiveFormat {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },

    #[error("could not find a .app directory within the Payload folder of {path:?}")]
    BundleNotFound { path: PathBuf },

    #[error("found {count} .app directories within the Payload folder of {path:?}, expected exactly one")]
    MultipleBundles { path: PathBuf, count: usize },

    #[error("failed to access {path:?}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// 把 IO 错误映射为带路径的 `FileAccess`
pub(crate) fn file_access(path: &Path) -> impl FnOnce(std::io::Error) -> CompareError + '_ {
    move |source| CompareError::FileAccess {
        path: path.to_path_buf(),
        source,
    }
}
