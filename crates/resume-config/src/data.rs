//! Loading the résumé record.

use resume_core::ResumeRecord;
use std::path::Path;

use crate::{ConfigError, ConfigResult};

/// Data file read when no path is given.
pub const DEFAULT_DATA_PATH: &str = "resume-data.json";

/// Read and parse a résumé record from a JSON file.
pub fn load_record(path: impl AsRef<Path>) -> ConfigResult<ResumeRecord> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    ResumeRecord::from_json(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_record() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("resume-data.json");
        fs::write(
            &path,
            r#"{"title": "Jane Doe", "label": "Engineer", "contactInfo": []}"#,
        )
        .unwrap();

        let record = load_record(&path).unwrap();
        assert_eq!(record.label, "Engineer");
        assert!(record.contact_info.is_empty());
    }

    #[test]
    fn test_missing_file() {
        let tmp = TempDir::new().unwrap();
        let result = load_record(tmp.path().join("nope.json"));
        assert!(matches!(result.unwrap_err(), ConfigError::Io { .. }));
    }

    #[test]
    fn test_malformed_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("resume-data.json");
        fs::write(&path, r#"{"title": 42}"#).unwrap();

        let err = load_record(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("resume-data.json"));
    }
}
