//! Route database error types.

use std::path::PathBuf;

/// Errors that can occur when loading the route database.
///
/// Any of these aborts a run: schedules cannot be checked without a
/// complete route index.
#[derive(Debug, thiserror::Error)]
pub enum RouteDbError {
    /// The database file could not be read
    #[error("failed to read route database {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The database file is not valid JSON/YAML
    #[error("failed to parse route database {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    /// The top level of the database is not a list of records
    #[error("route database {} must be a list of route records", path.display())]
    NotASequence { path: PathBuf },

    /// A record has no `id`, or its `id` is not a string
    #[error("route database {}: record {index}: {reason}", path.display())]
    InvalidRecord {
        path: PathBuf,
        index: usize,
        reason: String,
    },
}
