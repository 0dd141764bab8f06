//! Column keys, semantic types, and the default table configuration.
//!
//! Columns drive three behaviors: table rendering order, per-column
//! visibility toggles, and type-aware sort comparison. The key order and
//! semantic types are fixed at configuration time; only visibility is
//! mutable UI state.

use serde::{Deserialize, Serialize};

/// Identifies one field of a [`Record`](crate::domain::Record).
///
/// The variant order matches the table's column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnKey {
    /// Pack key (internal identifier).
    Pkey,
    /// Question key (internal identifier).
    Qkey,
    /// Competition year.
    Year,
    /// Round number within a year.
    Round,
    /// Match number within a round.
    Match,
    /// Subject category.
    Subject,
    /// Question text.
    Question,
    /// Answer text.
    Answer,
    /// Section name.
    Section,
}

impl ColumnKey {
    /// All column keys in table order.
    pub const ALL: [Self; 9] = [
        Self::Pkey,
        Self::Qkey,
        Self::Year,
        Self::Round,
        Self::Match,
        Self::Subject,
        Self::Question,
        Self::Answer,
        Self::Section,
    ];

    /// Returns the display label for this column.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pkey => "Pkey",
            Self::Qkey => "Qkey",
            Self::Year => "Year",
            Self::Round => "Round",
            Self::Match => "Match",
            Self::Subject => "Subject",
            Self::Question => "Question",
            Self::Answer => "Answer",
            Self::Section => "Section",
        }
    }

    /// Parses a column key from user input, case-insensitively.
    ///
    /// Returns `None` for unknown names.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|key| key.label().eq_ignore_ascii_case(name))
    }
}

/// Semantic type of a column, controlling sort comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnType {
    /// Values parse as floating-point numbers; unparseable values sort as 0.
    Numeric,
    /// Values compare case-insensitively as text.
    Text,
}

/// One column of the table configuration.
///
/// Order and `column_type` are fixed at configuration time; `visible` is
/// toggled by the user and affects both table rendering and CSV export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Which record field this column shows.
    pub key: ColumnKey,
    /// Display label for the header row and CSV header.
    pub label: String,
    /// Whether the column is currently rendered and exported.
    pub visible: bool,
    /// Semantic type used for sort comparison.
    pub column_type: ColumnType,
}

impl Column {
    fn new(key: ColumnKey, visible: bool, column_type: ColumnType) -> Self {
        Self {
            key,
            label: key.label().to_string(),
            visible,
            column_type,
        }
    }
}

/// Returns the default column configuration.
///
/// The internal identifier columns (Pkey, Qkey) start hidden; everything
/// else is visible. Year, Round, and Match are numeric alongside the two
/// key columns.
#[must_use]
pub fn default_columns() -> Vec<Column> {
    vec![
        Column::new(ColumnKey::Pkey, false, ColumnType::Numeric),
        Column::new(ColumnKey::Qkey, false, ColumnType::Numeric),
        Column::new(ColumnKey::Year, true, ColumnType::Numeric),
        Column::new(ColumnKey::Round, true, ColumnType::Numeric),
        Column::new(ColumnKey::Match, true, ColumnType::Numeric),
        Column::new(ColumnKey::Subject, true, ColumnType::Text),
        Column::new(ColumnKey::Question, true, ColumnType::Text),
        Column::new(ColumnKey::Answer, true, ColumnType::Text),
        Column::new(ColumnKey::Section, true, ColumnType::Text),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_hides_key_columns() {
        let columns = default_columns();
        assert_eq!(columns.len(), 9);
        assert!(!columns[0].visible);
        assert!(!columns[1].visible);
        assert!(columns[2..].iter().all(|c| c.visible));
    }

    #[test]
    fn column_order_matches_key_order() {
        let columns = default_columns();
        for (column, key) in columns.iter().zip(ColumnKey::ALL) {
            assert_eq!(column.key, key);
            assert_eq!(column.label, key.label());
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(ColumnKey::parse("year"), Some(ColumnKey::Year));
        assert_eq!(ColumnKey::parse("ANSWER"), Some(ColumnKey::Answer));
        assert_eq!(ColumnKey::parse("nope"), None);
    }
}
