//! Error type shared by the scan, patch, and run passes.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures surfaced by castfix operations.
#[derive(Debug, Error)]
pub enum PatchError {
    /// The hardcoded target does not exist under the working directory.
    #[error("target file {} not found", .path.display())]
    TargetNotFound { path: PathBuf },

    /// Opening, reading, or decoding the target failed.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Overwriting the target failed.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Neither the fallback block nor the targeted fixes could be applied.
    #[error("all fix attempts failed (fallback: {fallback}; targeted: {targeted})")]
    AllStrategiesFailed { fallback: String, targeted: String },
}

impl PatchError {
    pub fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, PatchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_path_and_cause() {
        let err = PatchError::read(
            "controllers/historyController.js",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        let msg = err.to_string();
        assert!(msg.contains("controllers/historyController.js"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn test_all_failed_lists_both_causes() {
        let err = PatchError::AllStrategiesFailed {
            fallback: "a".into(),
            targeted: "b".into(),
        };
        assert_eq!(
            err.to_string(),
            "all fix attempts failed (fallback: a; targeted: b)"
        );
    }
}
