//! Route database loader.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use tracing::info;

use super::error::RouteDbError;

/// One route from the route database.
///
/// Databases carry more per-route data (names, legs, distances) but only
/// the id is read; other fields are ignored when deserializing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteRecord {
    pub id: String,
}

impl RouteRecord {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Load all route records from a database file.
///
/// Files ending in `.json` are parsed as JSON, anything else as YAML.
/// The top level must be a list of records, each with a string `id`.
pub fn load_route_db(path: &Path) -> Result<Vec<RouteRecord>, RouteDbError> {
    let contents = std::fs::read_to_string(path).map_err(|source| RouteDbError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let records = parse_route_db(path, &contents)?;
    info!(path = %path.display(), routes = records.len(), "loaded route database");
    Ok(records)
}

/// Parse route records from the text of a database file.
///
/// `path` selects the format and is used in error messages.
fn parse_route_db(path: &Path, contents: &str) -> Result<Vec<RouteRecord>, RouteDbError> {
    let parse_error = |message: String| RouteDbError::Parse {
        path: path.to_path_buf(),
        message,
    };

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let document: Value = if is_json {
        serde_json::from_str(contents).map_err(|e| parse_error(e.to_string()))?
    } else {
        serde_yaml::from_str(contents).map_err(|e| parse_error(e.to_string()))?
    };

    let Value::Sequence(entries) = document else {
        return Err(RouteDbError::NotASequence {
            path: path.to_path_buf(),
        });
    };

    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            serde_yaml::from_value(entry).map_err(|e| RouteDbError::InvalidRecord {
                path: path.to_path_buf(),
                index,
                reason: e.to_string(),
            })
        })
        .collect()
}
