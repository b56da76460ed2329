//! # 几何结构提取
//!
//! 以空行为分隔符定位优化输入文件中的分子坐标段。
//!
//! ## 文件布局
//! ```text
//! %nprocshared=8          ┐
//! %mem=28GB               │ Link0 + route
//! %chk=mol_opt.chk        │
//! # opt ...               ┘
//!                         <- blank[0]
//! Title Card Required
//!                         <- blank[1]
//! 0 1                     <- 电荷/自旋多重度 (blank[1] + 1)
//!  C  0.0 0.0 0.0         ┐ 几何结构
//!  ...                    ┘
//!                         <- blank[2]
//!  1 2 1.0                ┐ 连接表等附加段（仅扩展布局）
//!                         <- blank[3] ...
//! ```
//!
//! - 恰好 4 个空行：最简布局，只改写电荷/自旋多重度行
//! - 多于 4 个空行：扩展布局，截取 `blank[1] + 2 .. blank[3]` 重新生成文件
//!
//! ## 依赖关系
//! - 被 `commands/generate.rs`, `commands/scan.rs` 使用
//! - 使用 `error.rs`

use crate::error::{ComgenError, Result};

/// 最简布局的空行数
pub const MINIMAL_BLANK_LINES: usize = 4;

/// 文件布局
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// 恰好 4 个空行，原地改写 `charge_line`
    Minimal { charge_line: usize },
    /// 含附加段，几何结构为 `start..end`
    Extended { start: usize, end: usize },
}

impl Layout {
    pub fn label(&self) -> &'static str {
        match self {
            Layout::Minimal { .. } => "minimal",
            Layout::Extended { .. } => "extended",
        }
    }
}

/// 改写结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reworked {
    /// 改写电荷行后的完整文件内容
    Patched(String),
    /// 提取出的几何结构行（保留行尾换行符）
    Extracted(Vec<String>),
}

/// 空行判断，兼容 CRLF
pub fn is_blank(line: &str) -> bool {
    line.trim_end_matches('\n').trim_end_matches('\r').is_empty()
}

/// 按行切分并保留行尾，便于原样写回
pub fn split_lines(content: &str) -> Vec<&str> {
    content.split_inclusive('\n').collect()
}

/// 记录所有空行的行号
pub fn blank_line_indices<S: AsRef<str>>(lines: &[S]) -> Vec<usize> {
    lines
        .iter()
        .enumerate()
        .filter(|(_, line)| is_blank(line.as_ref()))
        .map(|(i, _)| i)
        .collect()
}

/// 判断文件布局
pub fn classify<S: AsRef<str>>(lines: &[S], source: &str) -> Result<Layout> {
    let blanks = blank_line_indices(lines);

    if blanks.len() < MINIMAL_BLANK_LINES {
        return Err(ComgenError::MalformedJobFile {
            path: source.to_string(),
            reason: format!(
                "expected at least {} blank lines, found {}",
                MINIMAL_BLANK_LINES,
                blanks.len()
            ),
        });
    }

    let charge_line = blanks[1] + 1;
    if is_blank(lines[charge_line].as_ref()) {
        return Err(ComgenError::MalformedJobFile {
            path: source.to_string(),
            reason: format!("missing charge/multiplicity line at line {}", charge_line + 1),
        });
    }

    if blanks.len() == MINIMAL_BLANK_LINES {
        Ok(Layout::Minimal { charge_line })
    } else {
        Ok(Layout::Extended {
            start: charge_line + 1,
            end: blanks[3],
        })
    }
}

/// 行尾换行符（`\n`、`\r\n` 或空）
fn line_ending(line: &str) -> &str {
    &line[line.trim_end_matches(&['\r', '\n'][..]).len()..]
}

/// 替换电荷/自旋多重度行，其余内容逐字节保留
///
/// 新行沿用被替换行的换行符，CRLF 文件改写后仍为 CRLF。
pub fn patch_charge_line<S: AsRef<str>>(
    lines: &[S],
    charge_line: usize,
    charge: i32,
    multiplicity: i32,
) -> String {
    let mut output = String::new();
    for (i, line) in lines.iter().enumerate() {
        let line = line.as_ref();
        if i == charge_line {
            output.push_str(&format!("{} {}{}", charge, multiplicity, line_ending(line)));
        } else {
            output.push_str(line);
        }
    }
    output
}

/// 截取几何结构段
pub fn extract_geometry<S: AsRef<str>>(lines: &[S], start: usize, end: usize) -> Vec<String> {
    lines[start..end]
        .iter()
        .map(|line| line.as_ref().to_string())
        .collect()
}

/// 对一个优化输入文件执行改写或提取
pub fn rework(content: &str, source: &str, charge: i32, multiplicity: i32) -> Result<Reworked> {
    let lines = split_lines(content);

    match classify(&lines, source)? {
        Layout::Minimal { charge_line } => Ok(Reworked::Patched(patch_charge_line(
            &lines,
            charge_line,
            charge,
            multiplicity,
        ))),
        Layout::Extended { start, end } => {
            Ok(Reworked::Extracted(extract_geometry(&lines, start, end)))
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::gaussian::input::{render_job_file, render_optimization_file};
    use crate::models::{CalcKind, JobParams};

    /// 4 个空行的最简布局
    pub(crate) const MINIMAL: &str = concat!(
        "%nprocshared=8\n",
        "%mem=28GB\n",
        "%chk=mol1_opt.chk\n",
        "# wB97XD/6-31+g(d,p) SCF=(tight, maxcycle=10000) opt int=ultrafine\n",
        "\n",
        "Title Card Required\n",
        "\n",
        "1 2\n",
        " O   0.000000   0.000000   0.119748\n",
        " H   0.000000   0.761561  -0.479033\n",
        " H   0.000000  -0.761561  -0.479033\n",
        "\n",
        "\n",
    );

    /// GaussView 导出的文件，带连接表和自定义基组段
    pub(crate) const EXTENDED: &str = concat!(
        "%chk=mol2_opt.chk\n",
        "# opt b3lyp/gen geom=connectivity\n",
        "\n",
        "Title Card Required\n",
        "\n",
        "0 1\n",
        " O   0.000000   0.000000   0.119748\n",
        " H   0.000000   0.761561  -0.479033\n",
        "\n",
        " 1 2 1.0\n",
        " 2\n",
        "\n",
        "O 0\n",
        "6-31G(d)\n",
        "****\n",
        "\n",
        "\n",
    );

    #[test]
    fn test_blank_line_indices() {
        let lines = split_lines(MINIMAL);
        assert_eq!(blank_line_indices(&lines), vec![4, 6, 11, 12]);

        let crlf = ["a\r\n", "\r\n", "b\n", "\n", "  \n"];
        assert_eq!(blank_line_indices(&crlf), vec![1, 3]);
    }

    #[test]
    fn test_classify_minimal_uses_line_after_second_blank() {
        let lines = split_lines(MINIMAL);
        let layout = classify(&lines, "mol1_opt.com").unwrap();
        assert_eq!(layout, Layout::Minimal { charge_line: 7 });
        assert_eq!(layout.label(), "minimal");
    }

    #[test]
    fn test_classify_extended() {
        let lines = split_lines(EXTENDED);
        assert_eq!(blank_line_indices(&lines), vec![2, 4, 8, 11, 15, 16]);
        let layout = classify(&lines, "mol2_opt.com").unwrap();
        assert_eq!(layout, Layout::Extended { start: 6, end: 11 });
    }

    #[test]
    fn test_classify_rejects_short_file() {
        let lines = split_lines("%chk=a.chk\n# opt\n\ntitle\n\n0 1\n");
        let err = classify(&lines, "short.com").unwrap_err();
        assert!(matches!(err, ComgenError::MalformedJobFile { .. }));
    }

    #[test]
    fn test_patch_only_changes_charge_line() {
        let patched = match rework(MINIMAL, "mol1_opt.com", 0, 1).unwrap() {
            Reworked::Patched(text) => text,
            other => panic!("unexpected {:?}", other),
        };

        let before = split_lines(MINIMAL);
        let after = split_lines(&patched);
        assert_eq!(before.len(), after.len());
        for (i, (a, b)) in before.iter().zip(after.iter()).enumerate() {
            if i == 7 {
                assert_eq!(*b, "0 1\n");
            } else {
                assert_eq!(a, b);
            }
        }
    }

    #[test]
    fn test_patch_with_same_charge_is_noop() {
        match rework(MINIMAL, "mol1_opt.com", 1, 2).unwrap() {
            Reworked::Patched(text) => assert_eq!(text, MINIMAL),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_patch_short_header_uses_line_after_second_blank() {
        // 两行 header，电荷行位于第 5 行而不是第 7 行
        let content = concat!(
            "%chk=mol1_opt.chk\n",
            "# opt b3lyp/6-31g(d)\n",
            "\n",
            "Title Card Required\n",
            "\n",
            "1 2\n",
            " He  0.000000   0.000000   0.000000\n",
            "\n",
            "\n",
        );
        let before = split_lines(content);
        assert_eq!(before.len(), 9);
        assert_eq!(blank_line_indices(&before), vec![2, 4, 7, 8]);

        let patched = match rework(content, "mol1_opt.com", 0, 1).unwrap() {
            Reworked::Patched(text) => text,
            other => panic!("unexpected {:?}", other),
        };
        let after = split_lines(&patched);
        assert_eq!(after.len(), before.len());
        for (i, (a, b)) in before.iter().zip(after.iter()).enumerate() {
            if i == 5 {
                assert_eq!(*b, "0 1\n");
            } else {
                assert_eq!(a, b, "line {}", i);
            }
        }
    }

    #[test]
    fn test_patch_keeps_crlf_line_endings() {
        let content = MINIMAL.replace('\n', "\r\n");
        let patched = match rework(&content, "mol1_opt.com", 0, 1).unwrap() {
            Reworked::Patched(text) => text,
            other => panic!("unexpected {:?}", other),
        };

        assert_eq!(patched, content.replacen("1 2\r\n", "0 1\r\n", 1));
        assert_eq!(patched.matches('\n').count(), patched.matches("\r\n").count());
    }

    #[test]
    fn test_wavefunction_job_file_is_minimal_layout() {
        // optwfn 文件多出 .wfn 段，恰好 4 个空行，电荷行在第 8 行
        let job = JobParams::new("mol_opt", 0, 1, CalcKind::WavefunctionOutput);
        let text = render_job_file(&job, 8, 28);
        let lines = split_lines(&text);
        assert_eq!(blank_line_indices(&lines), vec![5, 7, 9, 11]);
        assert_eq!(
            classify(&lines, "mol_optwfn.com").unwrap(),
            Layout::Minimal { charge_line: 8 }
        );

        match rework(&text, "mol_optwfn.com", 0, 1).unwrap() {
            Reworked::Patched(patched) => assert_eq!(patched, text),
            other => panic!("unexpected {:?}", other),
        }
        match rework(&text, "mol_optwfn.com", -1, 2).unwrap() {
            Reworked::Patched(patched) => {
                assert_eq!(patched, text.replacen("0 1\n", "-1 2\n", 1));
            }
            other => panic!("unexpected {:?}", other),
        }

        // 其他类型只有 3 个空行
        let job = JobParams::new("mol_opt", 0, 1, CalcKind::Frequency);
        let text = render_job_file(&job, 8, 28);
        assert!(matches!(
            rework(&text, "mol_f.com", 0, 1),
            Err(ComgenError::MalformedJobFile { .. })
        ));
    }

    #[test]
    fn test_extract_drops_trailing_sections() {
        let geometry = match rework(EXTENDED, "mol2_opt.com", 0, 1).unwrap() {
            Reworked::Extracted(lines) => lines,
            other => panic!("unexpected {:?}", other),
        };

        assert_eq!(
            geometry,
            vec![
                " O   0.000000   0.000000   0.119748\n",
                " H   0.000000   0.761561  -0.479033\n",
                "\n",
                " 1 2 1.0\n",
                " 2\n",
            ]
        );

        let text = render_optimization_file("mol2_opt", 0, 1, 8, 28, &geometry);
        assert!(!text.contains("6-31G(d)\n"));
        assert!(!text.contains("****"));
        assert_eq!(text.lines().filter(|l| *l == "0 1").count(), 1);
    }

    #[test]
    fn test_rendered_optimization_file_round_trips() {
        let geometry = [" C   0.0 0.0 0.0\n", " O   0.0 0.0 1.128\n", "\n"];
        let text = render_optimization_file("co_opt", -1, 2, 8, 28, &geometry);

        match rework(&text, "co_opt.com", -1, 2).unwrap() {
            Reworked::Patched(patched) => assert_eq!(patched, text),
            other => panic!("unexpected {:?}", other),
        }
    }
}
