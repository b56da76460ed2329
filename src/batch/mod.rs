//! # 批量处理模块
//!
//! 收集待处理的优化输入文件。
//!
//! ## 依赖关系
//! - 被各命令模块使用
//! - 使用 `walkdir`, `glob`

pub mod collector;

pub use collector::{job_stem, FileCollector};
