use md5::{Digest, Md5};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::{Result, file_access};

/// 计算文件的 MD5 校验和
///
/// 按 4096 字节分块流式读取，仅用于内容一致性判断，不做安全用途。
pub fn compute_file_hash(path: &Path) -> Result<String> {
    let file = File::open(path).map_err(file_access(path))?;
    let mut reader = BufReader::new(file);
    let mut hasher = Md5::new();
    let mut buffer = [0u8; 4096];

    loop {
        let bytes_read = reader.read(&mut buffer).map_err(file_access(path))?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }

    Ok(hex::encode(hasher.finalize()))
}
