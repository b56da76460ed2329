//! # Slurm 脚本生成工具
//!
//! 生成运行 Gaussian 的 sbatch 提交脚本。
//!
//! ## 依赖关系
//! - 被 `commands/generate.rs` 使用
//! - 使用 `models/job.rs`

use crate::models::{base_name, CalcKind, ResourceConfig};

/// 提交脚本的文件名，如 `mol_f.sh`
pub fn script_file_name(name: &str, kind: CalcKind) -> String {
    format!("{}_{}.sh", base_name(name), kind)
}

/// 生成 sbatch 脚本内容
///
/// `name` 末尾的 `_opt` 会被去掉，脚本运行 `{base}_{kind}.com` 并输出到
/// `{base}_{kind}.log`。
pub fn render_submission_script(name: &str, kind: CalcKind, config: &ResourceConfig) -> String {
    let job = format!("{}_{}", base_name(name), kind);

    format!(
        r#"#!/bin/bash
#SBATCH --mem={}G
#SBATCH --time={}
#SBATCH --account={}
#SBATCH --cpus-per-task={}
module load {}
{} < {}.com >& {}.log
"#,
        config.memory_gb,
        config.wall_time,
        config.account,
        config.cpus,
        config.module,
        config.program,
        job,
        job,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_submission_script() {
        let config = ResourceConfig::default();
        let script = render_submission_script("molA_opt", CalcKind::Frequency, &config);

        let expected = "#!/bin/bash\n\
                        #SBATCH --mem=32G\n\
                        #SBATCH --time=06-23:59\n\
                        #SBATCH --account=username\n\
                        #SBATCH --cpus-per-task=8\n\
                        module load gaussian/g09.e01\n\
                        g09 < molA_f.com >& molA_f.log\n";
        assert_eq!(script, expected);
    }

    #[test]
    fn test_opt_suffix_is_stripped() {
        let config = ResourceConfig {
            cpus: 12,
            memory_gb: 96,
            account: "def-lab".to_string(),
            ..ResourceConfig::default()
        };
        for kind in CalcKind::ALL {
            assert_eq!(
                render_submission_script("mol_opt", kind, &config),
                render_submission_script("mol", kind, &config)
            );
        }

        let script = render_submission_script("mol_opt", CalcKind::Optimization, &config);
        assert!(script.ends_with("g09 < mol_opt.com >& mol_opt.log\n"));
        assert!(script.contains("#SBATCH --account=def-lab\n"));
    }

    #[test]
    fn test_script_file_name() {
        assert_eq!(script_file_name("molA_opt", CalcKind::Frequency), "molA_f.sh");
        assert_eq!(
            script_file_name("molA_opt", CalcKind::MolecularOrbital),
            "molA_MO.sh"
        );
    }
}
