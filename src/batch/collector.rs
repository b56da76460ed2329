//! # 文件收集器
//!
//! 在根目录下递归查找匹配模式的优化输入文件。
//!
//! ## 功能
//! - glob 文件名匹配（默认 `*opt.com`）
//! - 递归目录搜索
//! - 根目录可读性探测
//!
//! ## 依赖关系
//! - 被 `commands/generate.rs`, `commands/scan.rs` 调用
//! - 使用 `walkdir` 遍历目录, `glob` 匹配文件名

use crate::error::{ComgenError, Result};
use glob::Pattern;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 默认匹配模式
pub const DEFAULT_PATTERN: &str = "*opt.com";

/// 文件收集器
pub struct FileCollector {
    /// 根目录
    root: PathBuf,
    /// 文件名匹配模式
    pattern: Pattern,
}

impl FileCollector {
    /// 创建收集器，`pattern` 匹配文件名
    pub fn with_pattern(root: impl Into<PathBuf>, pattern: &str) -> Result<Self> {
        let pattern = Pattern::new(pattern).map_err(|e| ComgenError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            root: root.into(),
            pattern,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// 试探根目录是否可以遍历
    pub fn probe(root: &Path) -> Result<()> {
        if !root.is_dir() {
            return Err(ComgenError::DirectoryNotFound {
                path: root.display().to_string(),
            });
        }
        fs::read_dir(root)
            .map(|_| ())
            .map_err(|e| ComgenError::FileReadError {
                path: root.display().to_string(),
                source: e,
            })
    }

    /// 收集所有匹配的文件，按路径排序
    ///
    /// 遍历中任何目录读取失败都会终止收集。
    pub fn collect(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for entry in WalkDir::new(&self.root) {
            let entry = entry.map_err(|e| ComgenError::FileReadError {
                path: e
                    .path()
                    .unwrap_or(self.root.as_path())
                    .display()
                    .to_string(),
                source: io::Error::from(e),
            })?;
            if entry.file_type().is_file() && self.matches(entry.path()) {
                files.push(entry.into_path());
            }
        }

        files.sort();
        Ok(files)
    }

    /// 检查文件名是否匹配模式
    fn matches(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|n| n.to_str())
            .map(|name| self.pattern.matches(name))
            .unwrap_or(false)
    }
}

/// 文件名去掉 `.com` 扩展名后的作业名
pub fn job_stem(path: &Path) -> Result<String> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
        .ok_or_else(|| ComgenError::MalformedJobFile {
            path: path.display().to_string(),
            reason: "file name is not valid UTF-8".to_string(),
        })
}
