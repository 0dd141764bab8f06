//! Type-aware view sorting.
//!
//! Orders the view in place by the selected column. Numeric columns parse
//! values as floating point, with unparseable values coercing to 0, so
//! malformed numeric values sort as 0 rather than first or last. Text
//! columns compare case-insensitively. The underlying sort is stable, so
//! equal keys keep their relative order.

use std::cmp::Ordering;

use crate::domain::{ColumnKey, ColumnType, Record};

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// Returns the opposite direction.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Current sort selection: a column (or none) and a direction.
///
/// With no column selected the view keeps its natural post-filter order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortCriteria {
    pub column: Option<ColumnKey>,
    pub direction: SortDirection,
}

impl SortCriteria {
    /// Applies a sort-header selection.
    ///
    /// Selecting the already-active column toggles direction; selecting a
    /// new column resets to ascending.
    pub fn select(&mut self, column: ColumnKey) {
        if self.column == Some(column) {
            self.direction = self.direction.toggled();
        } else {
            self.column = Some(column);
            self.direction = SortDirection::Ascending;
        }
    }
}

/// Numeric sort key for a field value.
///
/// Unparseable values (and literal NaN) coerce to 0.
fn numeric_key(value: &str) -> f64 {
    let parsed = value.trim().parse::<f64>().unwrap_or(0.0);
    if parsed.is_nan() {
        0.0
    } else {
        parsed
    }
}

fn compare(a: &Record, b: &Record, column: ColumnKey, column_type: ColumnType) -> Ordering {
    match column_type {
        ColumnType::Numeric => numeric_key(a.field(column)).total_cmp(&numeric_key(b.field(column))),
        ColumnType::Text => a
            .field(column)
            .to_lowercase()
            .cmp(&b.field(column).to_lowercase()),
    }
}

/// Sorts the view in place according to `criteria`.
///
/// No selected column is a no-op: insertion order is preserved. The
/// column's semantic type comes from `column_type_of`, keeping this
/// function independent of the mutable column configuration.
pub fn sort_view(
    view: &mut [Record],
    criteria: SortCriteria,
    column_type_of: impl Fn(ColumnKey) -> ColumnType,
) {
    let Some(column) = criteria.column else {
        return;
    };
    let column_type = column_type_of(column);

    tracing::debug!(?column, direction = ?criteria.direction, "sorting view");

    view.sort_by(|a, b| {
        let ordering = compare(a, b, column, column_type);
        match criteria.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}
