//! CSV export of the current view.
//!
//! Serializes the filtered/sorted view to comma-delimited text: a header
//! row of visible column labels followed by one row per record, fields in
//! visible-column order. Quoting follows the standard CSV rule: a field
//! is wrapped in double quotes (internal quotes doubled) iff it contains a
//! comma, a double quote, or a newline. The `csv` crate's "necessary"
//! quote style implements exactly that for arbitrary Unicode content.

use csv::{QuoteStyle, WriterBuilder};

use crate::domain::error::{QuizbankError, Result};
use crate::domain::{Column, Record};

/// Serializes the view over the visible columns.
///
/// Hidden columns are omitted entirely, from both the header and the data
/// rows. An empty view still produces the header row.
pub fn export_csv(view: &[Record], columns: &[Column]) -> Result<String> {
    let _span = tracing::debug_span!("export_csv", rows = view.len()).entered();

    let visible: Vec<&Column> = columns.iter().filter(|c| c.visible).collect();

    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .from_writer(Vec::new());

    writer
        .write_record(visible.iter().map(|c| c.label.as_str()))
        .map_err(|e| QuizbankError::Export(e.to_string()))?;

    for record in view {
        writer
            .write_record(visible.iter().map(|c| record.field(c.key)))
            .map_err(|e| QuizbankError::Export(e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| QuizbankError::Export(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| QuizbankError::Export(e.to_string()))
}

/// Returns a timestamped export filename, e.g. `quizbank-1724961600000.csv`.
#[must_use]
pub fn export_filename() -> String {
    format!("quizbank-{}.csv", chrono::Utc::now().timestamp_millis())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::default_columns;

    fn record(year: &str, subject: &str, question: &str, answer: &str) -> Record {
        Record {
            year: year.to_string(),
            subject: subject.to_string(),
            question: question.to_string(),
            answer: answer.to_string(),
            ..Record::default()
        }
    }

    #[test]
    fn header_uses_visible_labels_only() {
        let columns = default_columns();
        let csv = export_csv(&[], &columns).expect("export");
        assert_eq!(
            csv.lines().next(),
            Some("Year,Round,Match,Subject,Question,Answer,Section")
        );
    }

    #[test]
    fn quotes_fields_containing_commas_and_quotes() {
        let columns = default_columns();
        let view = vec![record(
            "2019",
            "History",
            "Nickname?",
            r#"Paris, "City of Light""#,
        )];
        let csv = export_csv(&view, &columns).expect("export");
        assert!(csv.contains(r#""Paris, ""City of Light""""#));
    }

    #[test]
    fn plain_fields_are_emitted_raw() {
        let columns = default_columns();
        let view = vec![record("2019", "History", "Q", "Paris")];
        let csv = export_csv(&view, &columns).expect("export");
        let row = csv.lines().nth(1).expect("data row");
        assert_eq!(row, "2019,,,History,Q,Paris,");
    }

    #[test]
    fn newlines_force_quoting() {
        let columns = default_columns();
        let view = vec![record("2019", "History", "Q", "line one\nline two")];
        let csv = export_csv(&view, &columns).expect("export");
        assert!(csv.contains("\"line one\nline two\""));
    }

    #[test]
    fn unicode_content_passes_through() {
        let columns = default_columns();
        let view = vec![record("2019", "Géo", "¿Dónde?", "München, Bayern")];
        let csv = export_csv(&view, &columns).expect("export");
        assert!(csv.contains("Géo"));
        assert!(csv.contains("\"München, Bayern\""));
    }

    #[test]
    fn hidden_columns_are_excluded_from_rows() {
        let mut columns = default_columns();
        for column in &mut columns {
            column.visible = matches!(
                column.key,
                crate::domain::ColumnKey::Subject | crate::domain::ColumnKey::Answer
            );
        }
        let view = vec![record("2019", "History", "Q", "Paris")];
        let csv = export_csv(&view, &columns).expect("export");
        assert_eq!(csv.lines().next(), Some("Subject,Answer"));
        assert_eq!(csv.lines().nth(1), Some("History,Paris"));
    }

    #[test]
    fn filename_is_timestamped_csv() {
        let name = export_filename();
        assert!(name.starts_with("quizbank-"));
        assert!(name.ends_with(".csv"));
    }
}
