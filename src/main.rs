//! # comgen - Gaussian 作业文件生成工具
//!
//! 扫描目录中的结构优化输入文件 (`*opt.com`)，生成后续计算
//! （频率、波函数、TD-DFT、分子轨道、优化）的 Gaussian 输入文件和 Slurm 提交脚本。
//!
//! ## 子命令
//! - `generate` - 生成 `.com` / `.sh` 文件
//! - `scan`     - 列出找到的优化输入文件
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── batch/     (文件收集)
//!   │     ├── gaussian/  (输入文件渲染与几何结构提取)
//!   │     └── models/    (数据模型)
//!   ├── utils/      (输出、进度条、交互输入、Slurm 脚本)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod gaussian;
mod models;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
