//! # generate 命令实现
//!
//! 扫描 `*opt.com` 并生成后续计算的 Gaussian 输入文件和 sbatch 脚本。
//!
//! ## 功能
//! - 由命令行参数或交互输入确定请求，并在开始前完成校验
//! - `.com` + `opt`：改写或精简优化输入文件
//! - 其他组合：按模板生成 `{base}_{kind}.com` / `{base}_{kind}.sh`
//! - 可选 dry-run，只列出将要生成的文件
//!
//! ## 依赖关系
//! - 使用 `cli/generate.rs` 定义的参数
//! - 使用 `batch/`, `gaussian/`, `models/`
//! - 使用 `utils/output.rs`, `utils/progress.rs`, `utils/prompt.rs`, `utils/slurm.rs`

use crate::batch::{job_stem, FileCollector};
use crate::cli::generate::GenerateArgs;
use crate::error::{ComgenError, Result};
use crate::gaussian::{render_job_file, render_optimization_file, rework, Reworked};
use crate::models::{parse_integer, parse_yes_no, CalcKind, JobParams, OutputKind, ResourceConfig};
use crate::utils::prompt::{self, Prompter};
use crate::utils::slurm::{render_submission_script, script_file_name};
use crate::utils::{output, progress};

use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tabled::{Table, Tabled};

// ─────────────────────────────────────────────────────────────
// 请求
// ─────────────────────────────────────────────────────────────

/// 生成目标
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// 仅生成 `.sh`
    Scripts,
    /// 生成 `.com`，可附带 `.sh`
    Jobs {
        charge: i32,
        multiplicity: i32,
        with_script: bool,
    },
}

impl Target {
    pub fn ending(&self) -> OutputKind {
        match self {
            Target::Scripts => OutputKind::Script,
            Target::Jobs { .. } => OutputKind::Job,
        }
    }
}

/// 校验完成的生成请求
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateRequest {
    pub root: PathBuf,
    pub output_dir: PathBuf,
    pub pattern: String,
    pub kind: CalcKind,
    pub target: Target,
    pub dry_run: bool,
}

fn kind_question() -> String {
    let mut question = String::from("Please enter which file is wanted\n");
    for kind in CalcKind::ALL {
        question.push_str(&format!("{}: {}\n", kind.description(), kind.token()));
    }
    question
}

/// 由命令行参数确定请求，缺失项交给 `prompter` 询问
///
/// 询问顺序：根目录（仅在无法遍历时）、文件类型、计算类型，
/// `.com` 时再询问电荷、自旋多重度和是否生成 `.sh`。
pub fn resolve_request(
    args: &GenerateArgs,
    prompter: &mut dyn Prompter,
) -> Result<GenerateRequest> {
    let mut root = match &args.root {
        Some(root) => root.clone(),
        None => env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    };
    if FileCollector::probe(&root).is_err() {
        root = PathBuf::from(prompter.ask("root", "Please manually enter filepath")?);
        FileCollector::probe(&root)?;
    }

    let ending = match args.ending {
        Some(ending) => ending,
        None => prompter
            .ask("ending", "Please type file ending (.com or .sh)")?
            .parse::<OutputKind>()?,
    };

    let kind = match args.kind {
        Some(kind) => kind,
        None => prompter.ask("kind", &kind_question())?.parse::<CalcKind>()?,
    };

    let target = match ending {
        OutputKind::Script => Target::Scripts,
        OutputKind::Job => {
            let charge = match &args.charge {
                Some(charge) => charge.clone(),
                None => prompter.ask("charge", "Please enter system charge")?,
            };
            let multiplicity = match &args.multiplicity {
                Some(multiplicity) => multiplicity.clone(),
                None => prompter.ask("multiplicity", "Please enter e- multiplicity")?,
            };
            let charge = parse_integer("charge", &charge)?;
            let multiplicity = parse_integer("multiplicity", &multiplicity)?;

            let answer = match &args.script {
                Some(answer) => answer.clone(),
                None => prompter.ask(
                    "script",
                    "Do you want to generate the corresponding sh file? (y or n)",
                )?,
            };

            Target::Jobs {
                charge,
                multiplicity,
                with_script: parse_yes_no(&answer)?,
            }
        }
    };

    Ok(GenerateRequest {
        root,
        output_dir: args.output_dir.clone(),
        pattern: args.pattern.clone(),
        kind,
        target,
        dry_run: args.dry_run,
    })
}

// ─────────────────────────────────────────────────────────────
// 执行
// ─────────────────────────────────────────────────────────────

/// 对输出文件所做的操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// 新建或覆盖
    Written,
    /// 原地改写电荷/自旋多重度行
    Patched,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Written => write!(f, "written"),
            Action::Patched => write!(f, "patched"),
        }
    }
}

/// 生成的文件记录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub action: Action,
    pub source: PathBuf,
}

/// 结果表格行
#[derive(Tabled)]
struct GeneratedRow {
    #[tabled(rename = "File")]
    file: String,
    #[tabled(rename = "Action")]
    action: String,
    #[tabled(rename = "Source")]
    source: String,
}

fn write_output(path: &Path, content: &str, dry_run: bool) -> Result<()> {
    if dry_run {
        return Ok(());
    }
    fs::write(path, content).map_err(|e| ComgenError::FileWriteError {
        path: path.display().to_string(),
        source: e,
    })
}

/// 对找到的每个文件执行请求，任何错误立即终止
pub fn run_request(
    request: &GenerateRequest,
    config: &ResourceConfig,
) -> Result<Vec<GeneratedFile>> {
    let collector = FileCollector::with_pattern(&request.root, &request.pattern)?;
    let files = collector.collect()?;
    if files.is_empty() {
        return Ok(Vec::new());
    }

    if !request.dry_run {
        fs::create_dir_all(&request.output_dir).map_err(|e| ComgenError::FileWriteError {
            path: request.output_dir.display().to_string(),
            source: e,
        })?;
    }

    let pb = progress::create_progress_bar(files.len() as u64, "Generating");
    let mut generated = Vec::new();

    for file in &files {
        let outputs = match request.target {
            Target::Jobs {
                charge,
                multiplicity,
                with_script,
            } if request.kind == CalcKind::Optimization => {
                rework_optimization(request, config, file, charge, multiplicity, with_script)?
            }
            _ => generate_follow_on(request, config, file)?,
        };
        generated.extend(outputs);
        pb.inc(1);
    }

    pb.finish_and_clear();
    Ok(generated)
}

/// 后续计算：`{base}_{kind}.com` 和/或 `{base}_{kind}.sh`
fn generate_follow_on(
    request: &GenerateRequest,
    config: &ResourceConfig,
    file: &Path,
) -> Result<Vec<GeneratedFile>> {
    let stem = job_stem(file)?;
    let mut outputs = Vec::new();

    let with_script = match request.target {
        Target::Scripts => true,
        Target::Jobs {
            charge,
            multiplicity,
            with_script,
        } => {
            let job = JobParams::new(stem.as_str(), charge, multiplicity, request.kind);
            let path = request
                .output_dir
                .join(job.output_file_name(OutputKind::Job));
            let text = render_job_file(&job, config.cpus, config.job_memory_gb());
            write_output(&path, &text, request.dry_run)?;
            outputs.push(GeneratedFile {
                path,
                action: Action::Written,
                source: file.to_path_buf(),
            });
            with_script
        }
    };

    if with_script {
        outputs.push(write_script(request, config, file, &stem)?);
    }

    Ok(outputs)
}

/// 结构优化：最简布局原地改写，扩展布局提取几何结构后重新生成
fn rework_optimization(
    request: &GenerateRequest,
    config: &ResourceConfig,
    file: &Path,
    charge: i32,
    multiplicity: i32,
    with_script: bool,
) -> Result<Vec<GeneratedFile>> {
    let stem = job_stem(file)?;
    let content = fs::read_to_string(file).map_err(|e| ComgenError::FileReadError {
        path: file.display().to_string(),
        source: e,
    })?;

    let mut outputs = Vec::new();

    match rework(&content, &file.display().to_string(), charge, multiplicity)? {
        Reworked::Patched(text) => {
            write_output(file, &text, request.dry_run)?;
            outputs.push(GeneratedFile {
                path: file.to_path_buf(),
                action: Action::Patched,
                source: file.to_path_buf(),
            });
        }
        Reworked::Extracted(geometry) => {
            let job = JobParams::new(stem.as_str(), charge, multiplicity, CalcKind::Optimization);
            let path = request
                .output_dir
                .join(job.output_file_name(OutputKind::Job));
            let text = render_optimization_file(
                &stem,
                charge,
                multiplicity,
                config.cpus,
                config.job_memory_gb(),
                &geometry,
            );
            write_output(&path, &text, request.dry_run)?;
            outputs.push(GeneratedFile {
                path,
                action: Action::Written,
                source: file.to_path_buf(),
            });
        }
    }

    if with_script {
        outputs.push(write_script(request, config, file, &stem)?);
    }

    Ok(outputs)
}

fn write_script(
    request: &GenerateRequest,
    config: &ResourceConfig,
    file: &Path,
    stem: &str,
) -> Result<GeneratedFile> {
    let path = request
        .output_dir
        .join(script_file_name(stem, request.kind));
    let text = render_submission_script(stem, request.kind, config);
    write_output(&path, &text, request.dry_run)?;
    Ok(GeneratedFile {
        path,
        action: Action::Written,
        source: file.to_path_buf(),
    })
}

/// 执行 generate 命令
pub fn execute(args: GenerateArgs) -> Result<()> {
    output::print_header("Generating Gaussian Job Files");

    let mut prompter = prompt::prompter(args.no_input);
    let request = resolve_request(&args, prompter.as_mut())?;
    let config = ResourceConfig::from(&args.resources);

    output::print_info(&format!(
        "Scanning '{}' for '{}' ({} {})",
        request.root.display(),
        request.pattern,
        request.kind,
        request.target.ending()
    ));

    let generated = run_request(&request, &config)?;

    if generated.is_empty() {
        output::print_warning(&format!(
            "No files matching '{}' found under '{}'",
            request.pattern,
            request.root.display()
        ));
        return Ok(());
    }

    let rows: Vec<GeneratedRow> = generated
        .iter()
        .map(|g| GeneratedRow {
            file: g.path.display().to_string(),
            action: if request.dry_run {
                format!("{} (dry run)", g.action)
            } else {
                g.action.to_string()
            },
            source: g.source.display().to_string(),
        })
        .collect();

    println!("{}", Table::new(rows));
    output::print_separator();

    if request.dry_run {
        output::print_dry_run(&format!("{} files would be generated", generated.len()));
    } else {
        output::print_done(&format!("Files generated ({})", generated.len()));
    }

    Ok(())
}
