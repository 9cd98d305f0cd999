//! Dataset loading for the plant atlas.
//!
//! The dataset is a JSON array of plant records. Record order is
//! significant and preserved everywhere downstream.

use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::plant::PlantRecord;

/// Errors that can occur while loading a dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// I/O error reading the dataset file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file was read but is not a valid plant array
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parses a dataset from JSON text, preserving record order.
pub fn parse_dataset(raw: &str) -> Result<Vec<PlantRecord>, DatasetError> {
    let plants: Vec<PlantRecord> = serde_json::from_str(raw)?;
    Ok(plants)
}

/// Loads a dataset from a JSON file, preserving record order.
pub fn load_dataset(path: &Path) -> Result<Vec<PlantRecord>, DatasetError> {
    let raw = fs::read_to_string(path)?;
    let plants = parse_dataset(&raw)?;
    info!(count = plants.len(), path = %path.display(), "loaded plant dataset");
    Ok(plants)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_preserves_order() {
        let json = r#"[
            {"id":"b","nameEn":"Birch"},
            {"id":"a","nameEn":"Aspen"}
        ]"#;
        let plants = parse_dataset(json).unwrap();
        assert_eq!(plants.len(), 2);
        assert_eq!(plants[0].id, "b");
        assert_eq!(plants[1].id, "a");
    }

    #[test]
    fn test_parse_rejects_non_array() {
        let result = parse_dataset(r#"{"id":"a"}"#);
        assert!(matches!(result, Err(DatasetError::Parse(_))));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let result = load_dataset(Path::new("/nonexistent/plants.json"));
        assert!(matches!(result, Err(DatasetError::Io(_))));
    }
}
