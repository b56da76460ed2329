//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `generate`: 生成 Gaussian 输入文件与 Slurm 提交脚本
//! - `scan`: 列出找到的优化输入文件及其布局
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: generate, scan

pub mod generate;
pub mod scan;

use clap::{Parser, Subcommand};

/// comgen - Gaussian 作业文件生成工具
#[derive(Parser)]
#[command(name = "comgen")]
#[command(version)]
#[command(about = "Generate Gaussian job inputs and Slurm scripts from optimization jobs", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Generate .com job files and/or .sh submission scripts for every *opt.com file
    Generate(generate::GenerateArgs),

    /// List discovered optimization job files and how they would be processed
    Scan(scan::ScanArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CalcKind, OutputKind};

    #[test]
    fn test_parse_generate_flags() {
        let cli = Cli::try_parse_from([
            "comgen",
            "generate",
            "--ending",
            ".com",
            "--kind",
            "MO",
            "--charge",
            "-1",
            "--multiplicity",
            "2",
            "--script",
            "y",
            "--cpus",
            "12",
        ])
        .unwrap();

        let Commands::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.ending, Some(OutputKind::Job));
        assert_eq!(args.kind, Some(CalcKind::MolecularOrbital));
        assert_eq!(args.charge.as_deref(), Some("-1"));
        assert_eq!(args.script.as_deref(), Some("y"));
        assert_eq!(args.resources.cpus, 12);
        assert_eq!(args.resources.memory, 32);
    }

    #[test]
    fn test_reject_unknown_kind() {
        let result = Cli::try_parse_from(["comgen", "generate", "--kind", "freq"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_scan() {
        let cli = Cli::try_parse_from(["comgen", "scan", "jobs"]).unwrap();
        let Commands::Scan(args) = cli.command else {
            panic!("expected scan");
        };
        assert_eq!(args.root.to_str(), Some("jobs"));
        assert_eq!(args.pattern, "*opt.com");
    }
}
