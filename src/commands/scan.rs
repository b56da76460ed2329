//! # scan 命令实现
//!
//! 列出根目录下的优化输入文件，以及 `generate` 对其采用的处理方式。
//! 只读，不修改任何文件。
//!
//! ## 依赖关系
//! - 使用 `cli/scan.rs` 定义的参数
//! - 使用 `batch/`, `gaussian/geometry.rs`
//! - 使用 `utils/output.rs`

use crate::batch::FileCollector;
use crate::cli::scan::ScanArgs;
use crate::error::{ComgenError, Result};
use crate::gaussian::geometry::{blank_line_indices, classify, split_lines};
use crate::utils::output;

use std::fs;
use std::path::Path;
use tabled::{Table, Tabled};

/// 扫描结果行
#[derive(Debug, Clone, Tabled)]
struct ScanRow {
    #[tabled(rename = "File")]
    file: String,
    #[tabled(rename = "Blank lines")]
    blank_lines: usize,
    #[tabled(rename = "Layout")]
    layout: String,
}

fn inspect(path: &Path) -> Result<ScanRow> {
    let content = fs::read_to_string(path).map_err(|e| ComgenError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;
    let lines = split_lines(&content);
    let source = path.display().to_string();

    let layout = match classify(&lines, &source) {
        Ok(layout) => layout.label().to_string(),
        Err(_) => "malformed".to_string(),
    };

    Ok(ScanRow {
        file: source,
        blank_lines: blank_line_indices(&lines).len(),
        layout,
    })
}

/// 执行 scan 命令
pub fn execute(args: ScanArgs) -> Result<()> {
    output::print_header("Scanning Optimization Jobs");

    FileCollector::probe(&args.root)?;
    let collector = FileCollector::with_pattern(&args.root, &args.pattern)?;
    let files = collector.collect()?;

    if files.is_empty() {
        output::print_warning(&format!(
            "No files matching '{}' found under '{}'",
            args.pattern,
            collector.root().display()
        ));
        return Ok(());
    }

    let rows = files
        .iter()
        .map(|path| inspect(path))
        .collect::<Result<Vec<_>>>()?;

    let total = rows.len();
    let malformed = rows.iter().filter(|r| r.layout == "malformed").count();

    println!("{}", Table::new(rows));
    output::print_separator();
    output::print_success(&format!("Found {} job files", total));
    if malformed > 0 {
        output::print_warning(&format!(
            "{} files have fewer than 4 blank lines and would abort an opt run",
            malformed
        ));
    }

    Ok(())
}
