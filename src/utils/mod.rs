//! # 工具函数模块
//!
//! 提供美化输出、进度条、交互输入、Slurm 脚本生成等工具。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 子模块: output, progress, prompt, slurm

pub mod output;
pub mod progress;
pub mod prompt;
pub mod slurm;
