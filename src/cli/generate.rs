//! # generate 子命令 CLI 定义
//!
//! 为每个 `*opt.com` 生成后续计算的输入文件和 sbatch 脚本。
//! 未给出的参数在交互模式下逐项询问。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/generate.rs`

use crate::batch::collector::DEFAULT_PATTERN;
use crate::models::{CalcKind, OutputKind, ResourceConfig};
use clap::Args;
use std::path::PathBuf;

fn parse_ending(s: &str) -> crate::error::Result<OutputKind> {
    s.parse()
}

fn parse_kind(s: &str) -> crate::error::Result<CalcKind> {
    s.parse()
}

/// generate 子命令参数
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Root directory searched recursively for optimization job files [default: current directory]
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Directory new files are written to
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,

    /// File ending to generate (.com or .sh)
    #[arg(long, value_parser = parse_ending, allow_hyphen_values = true)]
    pub ending: Option<OutputKind>,

    /// Calculation kind: f, optwfn, td, MO or opt
    #[arg(long, value_parser = parse_kind)]
    pub kind: Option<CalcKind>,

    /// System charge (.com only)
    #[arg(long, allow_hyphen_values = true)]
    pub charge: Option<String>,

    /// Electron multiplicity (.com only)
    #[arg(long, allow_hyphen_values = true)]
    pub multiplicity: Option<String>,

    /// Also generate the matching .sh file (y or n, .com only)
    #[arg(long)]
    pub script: Option<String>,

    /// Filename pattern of optimization job files
    #[arg(long, default_value = DEFAULT_PATTERN)]
    pub pattern: String,

    #[command(flatten)]
    pub resources: ResourceArgs,

    // ─────────────────────────────────────────────────────────────
    // Execution control
    // ─────────────────────────────────────────────────────────────
    /// Never prompt; missing values are errors
    #[arg(long, default_value_t = false)]
    pub no_input: bool,

    /// Show the files that would be generated without writing them
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}

/// 集群资源参数
#[derive(Args, Debug, Clone)]
pub struct ResourceArgs {
    /// Number of CPU cores
    #[arg(long, default_value_t = 8)]
    pub cpus: u32,

    /// Memory requested from Slurm in GB
    #[arg(long, default_value_t = 32)]
    pub memory: u32,

    /// Memory (GB) kept back from Gaussian's %mem for the scheduler
    #[arg(long, default_value_t = 4)]
    pub mem_headroom: u32,

    /// Slurm account
    #[arg(long, env = "SLURM_ACCOUNT", default_value = "username")]
    pub account: String,

    /// Wall time limit
    #[arg(long, default_value = "06-23:59")]
    pub time: String,

    /// Environment module providing Gaussian
    #[arg(long, default_value = "gaussian/g09.e01")]
    pub module: String,

    /// Gaussian executable
    #[arg(long, default_value = "g09")]
    pub program: String,
}

impl From<&ResourceArgs> for ResourceConfig {
    fn from(args: &ResourceArgs) -> Self {
        ResourceConfig {
            cpus: args.cpus,
            memory_gb: args.memory,
            memory_headroom_gb: args.mem_headroom,
            account: args.account.clone(),
            wall_time: args.time.clone(),
            module: args.module.clone(),
            program: args.program.clone(),
        }
    }
}
