//! # 作业参数数据模型
//!
//! 定义计算类型、输出文件类型、集群资源配置以及单个作业的参数。
//!
//! ## 依赖关系
//! - 被 `gaussian/`, `utils/slurm.rs`, `commands/` 使用
//! - 使用 `error.rs`

use crate::error::{ComgenError, Result};
use std::fmt;
use std::str::FromStr;

/// 作业文件名中优化任务的后缀
pub const OPT_SUFFIX: &str = "_opt";

/// 去掉名称末尾的 `_opt` 后缀，得到作业基名
pub fn base_name(name: &str) -> &str {
    name.strip_suffix(OPT_SUFFIX).unwrap_or(name)
}

// ─────────────────────────────────────────────────────────────
// 计算类型
// ─────────────────────────────────────────────────────────────

/// 计算类型，决定 route 行中追加的关键字
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalcKind {
    /// 频率计算 (`f`)
    Frequency,
    /// 输出波函数 (`optwfn`)
    WavefunctionOutput,
    /// TD-DFT 紫外可见吸收 (`td`)
    AbsorptionSpectrum,
    /// 分子轨道 (`MO`)
    MolecularOrbital,
    /// 结构优化 (`opt`)
    Optimization,
}

impl CalcKind {
    pub const ALL: [CalcKind; 5] = [
        CalcKind::Frequency,
        CalcKind::WavefunctionOutput,
        CalcKind::AbsorptionSpectrum,
        CalcKind::MolecularOrbital,
        CalcKind::Optimization,
    ];

    /// 命令行与文件名中使用的简写
    pub fn token(self) -> &'static str {
        match self {
            CalcKind::Frequency => "f",
            CalcKind::WavefunctionOutput => "optwfn",
            CalcKind::AbsorptionSpectrum => "td",
            CalcKind::MolecularOrbital => "MO",
            CalcKind::Optimization => "opt",
        }
    }

    /// route 行中的关键字片段
    pub fn route_fragment(self) -> &'static str {
        match self {
            CalcKind::Frequency => "freq=noraman scf=tight int=ultrafine",
            CalcKind::WavefunctionOutput => "output=wfn scf=tight",
            CalcKind::AbsorptionSpectrum => "TD=(50-50,NStates=50) scf=tight int=ultrafine",
            CalcKind::MolecularOrbital => "POP=FULL formcheck",
            CalcKind::Optimization => "",
        }
    }

    /// 提示信息中显示的说明
    pub fn description(self) -> &'static str {
        match self {
            CalcKind::Frequency => "frequency",
            CalcKind::WavefunctionOutput => "Wave function",
            CalcKind::AbsorptionSpectrum => "UV-Vis absorption",
            CalcKind::MolecularOrbital => "Molecular orbital",
            CalcKind::Optimization => "optimisation",
        }
    }
}

impl fmt::Display for CalcKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for CalcKind {
    type Err = ComgenError;

    fn from_str(s: &str) -> Result<Self> {
        CalcKind::ALL
            .into_iter()
            .find(|kind| kind.token() == s)
            .ok_or_else(|| ComgenError::UnknownCalcKind(s.to_string()))
    }
}

// ─────────────────────────────────────────────────────────────
// 输出文件类型
// ─────────────────────────────────────────────────────────────

/// 输出文件类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    /// Gaussian 输入文件 (`.com`)
    Job,
    /// Slurm 提交脚本 (`.sh`)
    Script,
}

impl OutputKind {
    pub fn extension(self) -> &'static str {
        match self {
            OutputKind::Job => ".com",
            OutputKind::Script => ".sh",
        }
    }
}

impl fmt::Display for OutputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for OutputKind {
    type Err = ComgenError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            ".com" => Ok(OutputKind::Job),
            ".sh" => Ok(OutputKind::Script),
            other => Err(ComgenError::UnsupportedEnding(other.to_string())),
        }
    }
}

// ─────────────────────────────────────────────────────────────
// 简单输入校验
// ─────────────────────────────────────────────────────────────

/// 将输入解析为整数（电荷、自旋多重度）
pub fn parse_integer(field: &str, value: &str) -> Result<i32> {
    value
        .trim()
        .parse()
        .map_err(|_| ComgenError::InvalidInteger {
            field: field.to_string(),
            value: value.to_string(),
        })
}

/// 解析 y/n 回答
pub fn parse_yes_no(answer: &str) -> Result<bool> {
    match answer {
        "y" => Ok(true),
        "n" => Ok(false),
        other => Err(ComgenError::InvalidAnswer(other.to_string())),
    }
}

// ─────────────────────────────────────────────────────────────
// 资源配置
// ─────────────────────────────────────────────────────────────

/// 集群资源与程序配置，启动时构造一次后按引用传递
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceConfig {
    /// CPU 核数
    pub cpus: u32,
    /// 提交脚本申请的内存 (GB)
    pub memory_gb: u32,
    /// 留给调度系统的内存余量 (GB)，输入文件申请 `memory_gb - headroom`
    pub memory_headroom_gb: u32,
    /// Slurm 账户名
    pub account: String,
    /// 墙钟时间限制
    pub wall_time: String,
    /// 需要加载的环境模块
    pub module: String,
    /// Gaussian 可执行程序
    pub program: String,
}

impl ResourceConfig {
    /// 输入文件 `%mem` 行使用的内存
    pub fn job_memory_gb(&self) -> u32 {
        self.memory_gb.saturating_sub(self.memory_headroom_gb)
    }
}

impl Default for ResourceConfig {
    fn default() -> Self {
        ResourceConfig {
            cpus: 8,
            memory_gb: 32,
            memory_headroom_gb: 4,
            account: "username".to_string(),
            wall_time: "06-23:59".to_string(),
            module: "gaussian/g09.e01".to_string(),
            program: "g09".to_string(),
        }
    }
}

// ─────────────────────────────────────────────────────────────
// 作业参数
// ─────────────────────────────────────────────────────────────

/// 单个作业的参数
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobParams {
    /// 从文件名得到的作业名（不含扩展名）
    pub name: String,
    pub charge: i32,
    pub multiplicity: i32,
    pub kind: CalcKind,
}

impl JobParams {
    pub fn new(name: impl Into<String>, charge: i32, multiplicity: i32, kind: CalcKind) -> Self {
        JobParams {
            name: name.into(),
            charge,
            multiplicity,
            kind,
        }
    }

    /// 去掉 `_opt` 后缀的基名
    pub fn base_name(&self) -> &str {
        base_name(&self.name)
    }

    /// 输出文件名，如 `mol_f.com`
    pub fn output_file_name(&self, output: OutputKind) -> String {
        format!("{}_{}{}", self.base_name(), self.kind, output.extension())
    }
}
