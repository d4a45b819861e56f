//! Schedule file discovery.
//!
//! Turns the paths given on the command line into the ordered list of
//! schedule files to check.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use glob::{Pattern, glob};
use tracing::debug;

/// File extensions recognised as schedules when expanding a directory.
const SCHEDULE_EXTENSIONS: [&str; 2] = ["yaml", "yml"];

/// Errors from resolving schedule paths.
#[derive(Debug, thiserror::Error)]
pub enum DiscoverError {
    /// A path given explicitly does not exist
    #[error("schedule path not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// A directory could not be turned into a valid glob pattern
    #[error("invalid schedule pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    /// A directory entry could not be read while expanding a pattern
    #[error("failed to read {}: {source}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Resolve inputs into the list of schedule files to check.
///
/// Files are taken as given, whatever their extension. Directories are
/// searched recursively for `*.yaml` and `*.yml` files, which are returned
/// in sorted order. The overall order follows the inputs, and a file
/// reached more than once is only returned the first time.
pub fn schedule_paths(inputs: &[PathBuf]) -> Result<Vec<PathBuf>, DiscoverError> {
    let mut seen = HashSet::new();
    let mut paths = Vec::new();

    for input in inputs {
        let found = if input.is_dir() {
            expand_dir(input)?
        } else if input.is_file() {
            vec![input.clone()]
        } else {
            return Err(DiscoverError::NotFound {
                path: input.clone(),
            });
        };

        debug!(input = %input.display(), files = found.len(), "resolved schedule input");

        for path in found {
            if seen.insert(path.clone()) {
                paths.push(path);
            }
        }
    }

    Ok(paths)
}

/// All schedule files beneath a directory, sorted.
fn expand_dir(dir: &Path) -> Result<Vec<PathBuf>, DiscoverError> {
    let base = Pattern::escape(&dir.to_string_lossy());
    let mut paths = Vec::new();

    for ext in SCHEDULE_EXTENSIONS {
        let pattern = format!("{base}/**/*.{ext}");
        let entries = glob(&pattern).map_err(|source| DiscoverError::Pattern {
            pattern: pattern.clone(),
            source,
        })?;

        for entry in entries {
            let path = entry.map_err(|e| DiscoverError::Walk {
                path: e.path().to_path_buf(),
                source: e.into_error(),
            })?;
            if path.is_file() {
                paths.push(path);
            }
        }
    }

    paths.sort();
    Ok(paths)
}
