//! # IPA Compare Tool
//!
//! iOS 应用包 (.ipa / .zip) 对比工具库
//!
//! ## 功能
//!
//! - 解压两个 zip 容器归档，定位 Payload 中的 .app 目录
//! - 对比两个 .app 目录的相对路径集合，计算交集占各自文件总数的比例
//! - 对交集中的每个文件计算流式 MD5，统计内容完全一致的比例
//!
//! ## 使用示例
//!
//! ```no_run
//! use ipa_compare_tool::compare::compare_archives;
//! use std::path::Path;
//!
//! let report = compare_archives(Path::new("a.ipa"), Path::new("b.ipa")).unwrap();
//! print!("{}", report.render());
//! ```

pub mod cli;
pub mod compare;
pub mod error;
pub mod utils;

// 重新导出常用类型
pub use compare::{ComparisonReport, compare_archives, percentage};
pub use error::CompareError;
