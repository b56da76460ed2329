//! # 数据模型模块
//!
//! 定义计算类型、输出类型、资源配置和作业参数。
//!
//! ## 依赖关系
//! - 被 `gaussian/`, `utils/` 和 `commands/` 使用
//! - 子模块: job

pub mod job;

pub use job::{
    base_name, parse_integer, parse_yes_no, CalcKind, JobParams, OutputKind, ResourceConfig,
};
