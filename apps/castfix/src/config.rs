//! Configuration discovery and effective settings resolution.
//!
//! castfix reads `castfix.toml|yaml|yml` from the working directory and
//! merges it with defaults to produce an `Effective` config.
//! Defaults:
//! - `output`: `human`
//! - `color`: true (also off when `NO_COLOR` is set)
//! - `log_level`: `warn`
//!
//! The target path is fixed and cannot be configured.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `castfix.toml|yaml`.
pub struct CastfixConfig {
    pub output: Option<String>,
    pub color: Option<bool>,
    pub log_level: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Report format for stdout.
pub enum OutputMode {
    Human,
    Json,
}

impl OutputMode {
    fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "human" => Some(OutputMode::Human),
            "json" => Some(OutputMode::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by the run after applying defaults.
pub struct Effective {
    pub root: PathBuf,
    pub output: OutputMode,
    pub color: bool,
    pub log_level: String,
    /// Problems found while resolving; reported as notes, never fatal.
    pub notes: Vec<String>,
}

impl Effective {
    /// Defaults rooted at `root`, ignoring any config file.
    pub fn defaults(root: &Path) -> Self {
        Effective {
            root: root.to_path_buf(),
            output: OutputMode::Human,
            color: std::env::var_os("NO_COLOR").is_none(),
            log_level: "warn".to_string(),
            notes: Vec::new(),
        }
    }
}

/// Load `CastfixConfig` from `castfix.toml` or `castfix.yaml|yml` if present.
///
/// Returns `Err` with a message when a file exists but cannot be parsed.
pub fn load_config(root: &Path) -> Result<Option<CastfixConfig>, String> {
    let toml_path = root.join("castfix.toml");
    if toml_path.exists() {
        let s = fs::read_to_string(&toml_path)
            .map_err(|e| format!("cannot read {}: {}", toml_path.display(), e))?;
        let cfg: CastfixConfig = toml::from_str(&s)
            .map_err(|e| format!("{} is not valid TOML: {}", toml_path.display(), e))?;
        return Ok(Some(cfg));
    }
    for yml in ["castfix.yaml", "castfix.yml"] {
        let p = root.join(yml);
        if p.exists() {
            let s = fs::read_to_string(&p)
                .map_err(|e| format!("cannot read {}: {}", p.display(), e))?;
            let cfg: CastfixConfig = serde_yaml::from_str(&s)
                .map_err(|e| format!("{} is not valid YAML: {}", p.display(), e))?;
            return Ok(Some(cfg));
        }
    }
    Ok(None)
}

/// Resolve `Effective` by merging the discovered config with defaults.
pub fn resolve_effective(root: &Path) -> Effective {
    let mut eff = Effective::defaults(root);
    let cfg = match load_config(root) {
        Ok(Some(cfg)) => cfg,
        Ok(None) => return eff,
        Err(msg) => {
            eff.notes.push(format!("{}; using defaults.", msg));
            return eff;
        }
    };

    if let Some(out) = cfg.output.as_deref() {
        match OutputMode::parse(out) {
            Some(mode) => eff.output = mode,
            None => eff
                .notes
                .push(format!("Unknown output '{}'; expected human|json.", out)),
        }
    }
    if cfg.color == Some(false) {
        eff.color = false;
    }
    if let Some(level) = cfg.log_level {
        eff.log_level = level;
    }
    eff
}
