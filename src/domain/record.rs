//! Question record model.
//!
//! This module defines the core [`Record`] type representing one question in
//! the bank. Records are immutable once loaded; every field is carried as a
//! string even when the source JSON encodes it as a number, because filter
//! matching, search, highlighting, and CSV export all operate on the string
//! form. Numeric interpretation happens only at sort time.

use serde::de::Deserializer;
use serde::{Deserialize, Serialize};

use super::columns::ColumnKey;

/// One question record.
///
/// A flat mapping of named fields with a declared semantic type per field
/// (see [`default_columns`](crate::domain::default_columns)). Uniqueness of
/// the key fields is assumed but not enforced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Pack key (internal identifier).
    #[serde(rename = "Pkey", default, deserialize_with = "de_stringy")]
    pub pkey: String,

    /// Question key (internal identifier).
    #[serde(rename = "Qkey", default, deserialize_with = "de_stringy")]
    pub qkey: String,

    /// Competition year.
    #[serde(rename = "Year", default, deserialize_with = "de_stringy")]
    pub year: String,

    /// Round number within a year.
    #[serde(rename = "Round", default, deserialize_with = "de_stringy")]
    pub round: String,

    /// Match number within a round.
    #[serde(rename = "Match", default, deserialize_with = "de_stringy")]
    pub match_no: String,

    /// Subject category.
    #[serde(rename = "Subject", default, deserialize_with = "de_stringy")]
    pub subject: String,

    /// Question text.
    #[serde(rename = "Question", default, deserialize_with = "de_stringy")]
    pub question: String,

    /// Answer text.
    #[serde(rename = "Answer", default, deserialize_with = "de_stringy")]
    pub answer: String,

    /// Section name.
    #[serde(rename = "Section", default, deserialize_with = "de_stringy")]
    pub section: String,
}

impl Record {
    /// Returns the value of the field identified by `key`.
    #[must_use]
    pub fn field(&self, key: ColumnKey) -> &str {
        match key {
            ColumnKey::Pkey => &self.pkey,
            ColumnKey::Qkey => &self.qkey,
            ColumnKey::Year => &self.year,
            ColumnKey::Round => &self.round,
            ColumnKey::Match => &self.match_no,
            ColumnKey::Subject => &self.subject,
            ColumnKey::Question => &self.question,
            ColumnKey::Answer => &self.answer,
            ColumnKey::Section => &self.section,
        }
    }

    /// Returns all field values joined with single spaces, lowercased.
    ///
    /// This is the haystack for free-text search: a record matches a query
    /// iff this string contains the lowercased query as a substring.
    #[must_use]
    pub fn search_haystack(&self) -> String {
        ColumnKey::ALL
            .into_iter()
            .map(|key| self.field(key))
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase()
    }
}

/// Deserializes a JSON string, number, or null into a `String`.
///
/// The source dataset mixes representations (`"Year": 2019` vs
/// `"Year": "2019"`); both end up as `"2019"`. Null becomes the empty
/// string.
fn de_stringy<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    })
}
