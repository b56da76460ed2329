//! # Gaussian 输入文件渲染
//!
//! 根据作业参数生成 `.com` 文件内容。纯函数，无 I/O。
//!
//! ## 格式说明
//! ```text
//! %nprocshared=8
//! %mem=28GB
//! %chk=mol_opt.chk
//! #Geom=Checkpoint Guess=Read
//! #wb97xd/6-31+g(d,p) freq=noraman scf=tight int=ultrafine
//!
//! Title Card Required
//!
//! 0 1
//!
//! ```
//!
//! ## 依赖关系
//! - 被 `commands/generate.rs` 使用
//! - 使用 `models/job.rs`

use crate::models::{CalcKind, JobParams};

/// 后续计算使用的泛函/基组
pub const METHOD: &str = "#wb97xd/6-31+g(d,p)";

/// 结构优化的 route 行
pub const OPT_ROUTE: &str = "# wB97XD/6-31+g(d,p) SCF=(tight, maxcycle=10000) opt int=ultrafine";

/// 标题行占位
pub const TITLE: &str = "Title Card Required";

fn push_link0(text: &mut String, name: &str, cpus: u32, memory_gb: u32) {
    text.push_str(&format!("%nprocshared={}\n", cpus));
    text.push_str(&format!("%mem={}GB\n", memory_gb));
    text.push_str(&format!("%chk={}.chk\n", name));
}

/// route 行：方法 + 计算类型关键字
pub fn method_line(kind: CalcKind) -> String {
    let fragment = kind.route_fragment();
    if fragment.is_empty() {
        METHOD.to_string()
    } else {
        format!("{} {}", METHOD, fragment)
    }
}

/// 生成读取检查点的后续计算输入文件
pub fn render_job_file(job: &JobParams, cpus: u32, memory_gb: u32) -> String {
    let mut text = String::new();
    push_link0(&mut text, &job.name, cpus, memory_gb);

    text.push_str("#Geom=Checkpoint Guess=Read\n");
    text.push_str(&method_line(job.kind));
    text.push_str("\n\n");
    text.push_str(TITLE);
    text.push_str("\n\n");
    text.push_str(&format!("{} {}\n\n", job.charge, job.multiplicity));

    // output=wfn 需要在分子说明后给出 .wfn 文件名
    if job.kind == CalcKind::WavefunctionOutput {
        text.push_str(&format!("{}.wfn\n\n", job.name));
    }

    text
}

/// 生成结构优化输入文件，几何结构逐行原样追加
pub fn render_optimization_file<S: AsRef<str>>(
    name: &str,
    charge: i32,
    multiplicity: i32,
    cpus: u32,
    memory_gb: u32,
    geometry: &[S],
) -> String {
    let mut text = String::new();
    push_link0(&mut text, name, cpus, memory_gb);

    text.push_str(OPT_ROUTE);
    text.push_str("\n\n");
    text.push_str(TITLE);
    text.push_str("\n\n");
    text.push_str(&format!("{} {}\n", charge, multiplicity));

    for line in geometry {
        let line = line.as_ref();
        text.push_str(line);
        if !line.ends_with('\n') {
            text.push('\n');
        }
    }

    text.push('\n');
    text
}
