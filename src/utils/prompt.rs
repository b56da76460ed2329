//! # 交互式输入
//!
//! 命令行参数缺失时向用户逐项询问。通过 `Prompter` trait 与终端解耦，
//! 非交互环境下缺失的参数直接报错。
//!
//! ## 依赖关系
//! - 被 `commands/generate.rs` 使用
//! - 使用 `dialoguer`, `console` crate

use crate::error::{ComgenError, Result};
use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;

/// 询问一个参数值
pub trait Prompter {
    /// `field` 用于报错信息，`question` 为显示给用户的提示
    fn ask(&mut self, field: &str, question: &str) -> Result<String>;
}

/// 基于 dialoguer 的终端输入
#[derive(Default)]
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Prompter for TerminalPrompter {
    fn ask(&mut self, _field: &str, question: &str) -> Result<String> {
        Input::<String>::with_theme(&self.theme)
            .with_prompt(question)
            .allow_empty(true)
            .interact_text()
            .map(|answer| answer.trim().to_string())
            .map_err(|e| ComgenError::PromptFailed(e.to_string()))
    }
}

/// 非交互模式：任何询问都视为缺少参数
pub struct NoPrompt;

impl Prompter for NoPrompt {
    fn ask(&mut self, field: &str, _question: &str) -> Result<String> {
        Err(ComgenError::MissingArgument(field.to_string()))
    }
}

/// 根据终端状态选择输入方式
pub fn prompter(no_input: bool) -> Box<dyn Prompter> {
    if no_input || !console::user_attended() {
        Box::new(NoPrompt)
    } else {
        Box::new(TerminalPrompter::new())
    }
}
