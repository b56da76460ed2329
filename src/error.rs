//! # 统一错误处理模块
//!
//! 定义 comgen 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// comgen 统一错误类型
#[derive(Error, Debug)]
pub enum ComgenError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 配置错误
    // ─────────────────────────────────────────────────────────────
    #[error("Not available file type: '{0}' (expected .com or .sh)")]
    UnsupportedEnding(String),

    #[error("Selected function is not available: '{0}' (expected f, optwfn, td, MO or opt)")]
    UnknownCalcKind(String),

    #[error("Please select y or n, got '{0}'")]
    InvalidAnswer(String),

    // ─────────────────────────────────────────────────────────────
    // 类型错误
    // ─────────────────────────────────────────────────────────────
    #[error("{field} needs to be an integer, got '{value}'")]
    InvalidInteger { field: String, value: String },

    // ─────────────────────────────────────────────────────────────
    // 解析错误
    // ─────────────────────────────────────────────────────────────
    #[error("Malformed job file: {path}\nReason: {reason}")]
    MalformedJobFile { path: String, reason: String },

    #[error("Invalid file pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    // ─────────────────────────────────────────────────────────────
    // 输入错误
    // ─────────────────────────────────────────────────────────────
    #[error("Missing value for {0} (pass it as a flag or run interactively)")]
    MissingArgument(String),

    #[error("Failed to read input: {0}")]
    PromptFailed(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, ComgenError>;
