//! Schedule loading error types.

use std::path::PathBuf;

/// Errors that prevent a schedule file from being checked at all.
///
/// Unlike diagnostics these are about the file, not its contents: the
/// run records them and moves on to the next schedule.
#[derive(Debug, thiserror::Error)]
pub enum ScheduleLoadError {
    /// The file could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid YAML
    #[error("failed to parse {}: {source}", path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

impl ScheduleLoadError {
    /// The schedule file this error refers to.
    pub fn path(&self) -> &PathBuf {
        match self {
            ScheduleLoadError::Io { path, .. } | ScheduleLoadError::Yaml { path, .. } => path,
        }
    }
}
