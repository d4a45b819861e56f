//! Schedule file parsing.

use std::path::Path;

use serde_yaml::Value;

use super::error::ScheduleLoadError;

/// Read and parse one schedule file into a generic YAML value.
///
/// No shape checking happens here; that is the validator's job. Merge
/// keys (`<<: *anchor`) are expanded so shared phase templates behave as
/// if written out in full. An empty file parses to `Value::Null`.
pub fn load_schedule(path: &Path) -> Result<Value, ScheduleLoadError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ScheduleLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let yaml_error = |source| ScheduleLoadError::Yaml {
        path: path.to_path_buf(),
        source,
    };

    let mut document: Value = serde_yaml::from_str(&contents).map_err(yaml_error)?;
    document.apply_merge().map_err(yaml_error)?;
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn load_sequence_document() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("spring.yaml");
        std::fs::write(&path, "- plan:\n    - route_id: R1\n").unwrap();

        let doc = load_schedule(&path).unwrap();
        let entries = doc.as_sequence().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0]["plan"][0]["route_id"].as_str(), Some("R1"));
    }

    #[test]
    fn empty_file_is_null() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.yaml");
        std::fs::write(&path, "").unwrap();

        assert!(load_schedule(&path).unwrap().is_null());
    }

    #[test]
    fn merge_keys_are_expanded() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("merged.yaml");
        std::fs::write(
            &path,
            "
- plan:
    - &leg
      route_id: R1
      runner: a
    - <<: *leg
      runner: b
",
        )
        .unwrap();

        let doc = load_schedule(&path).unwrap();
        let second = &doc[0]["plan"][1];
        assert_eq!(second["route_id"].as_str(), Some("R1"));
        assert_eq!(second["runner"].as_str(), Some("b"));
    }

    #[test]
    fn invalid_yaml_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.yaml");
        std::fs::write(&path, "- plan: [unterminated\n").unwrap();

        let err = load_schedule(&path).unwrap_err();
        assert!(matches!(err, ScheduleLoadError::Yaml { .. }));
        assert_eq!(err.path(), &path);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_schedule(Path::new("/nonexistent/schedule.yaml")).unwrap_err();
        assert!(matches!(err, ScheduleLoadError::Io { .. }));
    }
}
