//! One-shot JSON dataset loading.
//!
//! Reads the entire question bank into memory in a single pass. The file
//! is a JSON array of flat record objects; numeric fields may appear as
//! numbers or strings and are normalized to strings on the way in.

use std::path::Path;

use crate::domain::error::{QuizbankError, Result};
use crate::domain::Record;

/// Loads the full dataset from a JSON file.
///
/// This is the session's one suspension point: until it returns, every
/// interactive component is inert. Failure is terminal; the caller
/// surfaces the error and exits rather than retrying.
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not parse as a
/// JSON array of records.
pub fn load_dataset(path: &Path) -> Result<Vec<Record>> {
    let _span = tracing::debug_span!("load_dataset", path = ?path).entered();

    let contents = std::fs::read_to_string(path)?;
    let records: Vec<Record> = serde_json::from_str(&contents)
        .map_err(|e| QuizbankError::Load(format!("failed to parse {}: {e}", path.display())))?;

    tracing::debug!(record_count = records.len(), "dataset loaded");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_records_from_json_array() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(
            file,
            r#"[
                {{"Year": 2019, "Subject": "History", "Question": "Q1", "Answer": "A1"}},
                {{"Year": "2020", "Subject": "Science", "Question": "Q2", "Answer": "A2"}}
            ]"#
        )
        .expect("write");

        let records = load_dataset(file.path()).expect("load");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].year, "2019");
        assert_eq!(records[1].subject, "Science");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_dataset(Path::new("/nonexistent/db.json")).unwrap_err();
        assert!(matches!(err, QuizbankError::Io(_)));
    }

    #[test]
    fn malformed_json_is_a_load_error() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "{{not json").expect("write");

        let err = load_dataset(file.path()).unwrap_err();
        assert!(matches!(err, QuizbankError::Load(_)));
    }
}
