//! # Gaussian 输入文件模块
//!
//! 生成 Gaussian `.com` 输入文件，并从已有的优化输入文件中提取几何结构。
//!
//! ## 子模块
//! - `input`: 输入文件模板渲染
//! - `geometry`: 基于空行分段的几何结构提取与改写
//!
//! ## 依赖关系
//! - 被 `commands/generate.rs`, `commands/scan.rs` 使用
//! - 使用 `models/job.rs`

pub mod geometry;
pub mod input;

pub use geometry::{rework, Reworked};
pub use input::{render_job_file, render_optimization_file};
