//! Supporting helpers: message prefixes, path display, and text I/O.

use crate::error::{PatchError, Result};
use owo_colors::OwoColorize;
use std::fs;
use std::path::Path;

fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

fn prefix(label: &str, paint: fn(&str) -> String) -> String {
    if colors_enabled() {
        paint(label)
    } else {
        label.to_string()
    }
}

pub fn error_prefix() -> String {
    prefix("✖ error:", |s: &str| s.red().bold().to_string())
}

pub fn note_prefix() -> String {
    prefix("◆ note:", |s: &str| s.blue().bold().to_string())
}

/// Display `p` relative to the working directory when possible.
pub fn rel_to_wd(p: &Path) -> String {
    std::env::current_dir()
        .ok()
        .and_then(|wd| pathdiff::diff_paths(p, wd))
        .filter(|rel| !rel.as_os_str().is_empty() && !rel.starts_with(".."))
        .unwrap_or_else(|| p.to_path_buf())
        .to_string_lossy()
        .to_string()
}

/// Read a UTF-8 text file. Invalid UTF-8 is a read error.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| PatchError::read(path, e))
}

/// Overwrite `path` with `content`. No backup is kept.
pub fn write_text(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| PatchError::write(path, e))
}
