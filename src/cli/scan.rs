//! # scan 子命令 CLI 定义
//!
//! 列出根目录下的优化输入文件
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/scan.rs`

use crate::batch::collector::DEFAULT_PATTERN;
use clap::Args;
use std::path::PathBuf;

/// scan 子命令参数
#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Root directory to search
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Filename pattern of optimization job files
    #[arg(long, default_value = DEFAULT_PATTERN)]
    pub pattern: String,
}
