//! Configuration discovery and effective settings resolution.
//!
//! Orglens reads `orglens.toml|yaml|yml` from the repository root (or
//! closest ancestor) and merges it with CLI flags to produce an `Effective`
//! config. Defaults:
//! - `limits.reporting_level`: 4
//! - `limits.min_salary_percent`: 120
//! - `limits.max_salary_percent`: 150
//! - `output`: `human`
//!
//! Overrides precedence: CLI > config file > defaults.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize, Clone)]
/// Threshold configuration section under `[limits]`.
pub struct LimitsCfg {
    pub reporting_level: Option<u32>,
    pub min_salary_percent: Option<u32>,
    pub max_salary_percent: Option<u32>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `orglens.toml|yaml`.
pub struct OrglensConfig {
    pub output: Option<String>,
    pub limits: Option<LimitsCfg>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by the analyze command after applying
/// precedence. Fixed at construction; not reloadable mid-run.
pub struct Effective {
    pub repo_root: PathBuf,
    pub output: String,
    pub config_found: bool,
    pub reporting_level: u32,
    pub min_salary_percent: u32,
    pub max_salary_percent: u32,
}

/// Walk upward from `start` to detect the repository root.
///
/// Stops when an `orglens.toml|yaml|yml` or a `.git` directory is found.
pub fn detect_repo_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if cur.join("orglens.toml").exists()
            || cur.join("orglens.yaml").exists()
            || cur.join("orglens.yml").exists()
        {
            return cur.to_path_buf();
        }
        if cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Load `OrglensConfig` from `orglens.toml` or `orglens.yaml|yml` if present.
pub fn load_config(root: &Path) -> Option<OrglensConfig> {
    let toml_path = root.join("orglens.toml");
    if toml_path.exists() {
        let s = fs::read_to_string(&toml_path).ok()?;
        let cfg: OrglensConfig = toml::from_str(&s).ok()?;
        return Some(cfg);
    }
    for yml in ["orglens.yaml", "orglens.yml"] {
        let p = root.join(yml);
        if p.exists() {
            let s = fs::read_to_string(&p).ok()?;
            let cfg: OrglensConfig = serde_yaml::from_str(&s).ok()?;
            return Some(cfg);
        }
    }
    None
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
pub fn resolve_effective(
    cli_repo_root: Option<&str>,
    cli_output: Option<&str>,
    cli_reporting_level: Option<u32>,
    cli_min_percent: Option<u32>,
    cli_max_percent: Option<u32>,
) -> Effective {
    let start = PathBuf::from(cli_repo_root.unwrap_or("."));
    let repo_root = detect_repo_root(&start);
    let loaded = load_config(&repo_root);
    let config_found = loaded.is_some();
    let cfg = loaded.unwrap_or_default();
    let limits = cfg.limits.unwrap_or_default();

    let output = cli_output
        .map(|s| s.to_string())
        .or(cfg.output)
        .unwrap_or_else(|| "human".to_string());

    let reporting_level = cli_reporting_level.or(limits.reporting_level).unwrap_or(4);
    let min_salary_percent = cli_min_percent.or(limits.min_salary_percent).unwrap_or(120);
    let max_salary_percent = cli_max_percent.or(limits.max_salary_percent).unwrap_or(150);

    Effective {
        repo_root,
        output,
        config_found,
        reporting_level,
        min_salary_percent,
        max_salary_percent,
    }
}
