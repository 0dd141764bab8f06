//! Facet and free-text filtering.
//!
//! Reduces the full record store to the current view given a set of
//! independent constraints: up to five exact-match facets (year, round,
//! match, subject, section) and one case-insensitive free-text query.
//! All active constraints are ANDed; with none active the full store
//! passes unchanged.

use crate::domain::{ColumnKey, Record};

/// The five exact-match facet selectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facet {
    Year,
    Round,
    Match,
    Subject,
    Section,
}

impl Facet {
    /// All facets, in selector order.
    pub const ALL: [Self; 5] = [
        Self::Year,
        Self::Round,
        Self::Match,
        Self::Subject,
        Self::Section,
    ];

    /// The record field this facet constrains.
    #[must_use]
    pub const fn column(self) -> ColumnKey {
        match self {
            Self::Year => ColumnKey::Year,
            Self::Round => ColumnKey::Round,
            Self::Match => ColumnKey::Match,
            Self::Subject => ColumnKey::Subject,
            Self::Section => ColumnKey::Section,
        }
    }

    /// Lowercase selector name, as used in shell commands.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Round => "round",
            Self::Match => "match",
            Self::Subject => "subject",
            Self::Section => "section",
        }
    }

    /// Parses a facet name from user input, case-insensitively.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|facet| facet.name().eq_ignore_ascii_case(name))
    }
}

/// Current filter constraints.
///
/// Facet values of `None` are inactive. The search string is inactive when
/// empty after trimming. All active constraints must pass for a record to
/// enter the view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Free-text query, matched case-insensitively against the
    /// concatenation of all field values.
    pub search: String,
    /// Required Year value, compared exactly against the field string.
    pub year: Option<String>,
    /// Required Round value.
    pub round: Option<String>,
    /// Required Match value.
    pub match_no: Option<String>,
    /// Required Subject value.
    pub subject: Option<String>,
    /// Required Section value.
    pub section: Option<String>,
}

impl FilterCriteria {
    /// Returns the constraint value for `facet`, if active.
    #[must_use]
    pub fn facet(&self, facet: Facet) -> Option<&str> {
        match facet {
            Facet::Year => self.year.as_deref(),
            Facet::Round => self.round.as_deref(),
            Facet::Match => self.match_no.as_deref(),
            Facet::Subject => self.subject.as_deref(),
            Facet::Section => self.section.as_deref(),
        }
    }

    /// Sets or clears the constraint for `facet`.
    pub fn set_facet(&mut self, facet: Facet, value: Option<String>) {
        let slot = match facet {
            Facet::Year => &mut self.year,
            Facet::Round => &mut self.round,
            Facet::Match => &mut self.match_no,
            Facet::Subject => &mut self.subject,
            Facet::Section => &mut self.section,
        };
        *slot = value.filter(|v| !v.is_empty());
    }

    /// The trimmed, lowercased search term, or `None` when no text search
    /// is active.
    #[must_use]
    pub fn search_term(&self) -> Option<String> {
        let term = self.search.trim().to_lowercase();
        if term.is_empty() {
            None
        } else {
            Some(term)
        }
    }

    /// True when no constraint of any kind is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.search_term().is_none() && Facet::ALL.iter().all(|f| self.facet(*f).is_none())
    }

    fn matches(&self, record: &Record, search_term: Option<&str>) -> bool {
        for facet in Facet::ALL {
            if let Some(required) = self.facet(facet) {
                if record.field(facet.column()) != required {
                    return false;
                }
            }
        }
        if let Some(term) = search_term {
            if !record.search_haystack().contains(term) {
                return false;
            }
        }
        true
    }
}

/// Derives the view: every record satisfying all active constraints, in
/// store order.
///
/// With no constraint active this is the identity (a full copy of the
/// store). The caller owns the downstream consequences of a view change:
/// re-sort, page clamp, and deck resets all key off the result.
#[must_use]
pub fn apply_filters(records: &[Record], criteria: &FilterCriteria) -> Vec<Record> {
    let _span = tracing::debug_span!(
        "apply_filters",
        total_records = records.len(),
        query_len = criteria.search.len(),
    )
    .entered();

    let search_term = criteria.search_term();

    let view: Vec<Record> = records
        .iter()
        .filter(|record| criteria.matches(record, search_term.as_deref()))
        .cloned()
        .collect();

    tracing::debug!(filtered_count = view.len(), "filters applied");
    view
}

/// Collects the distinct non-empty values of a facet column, for
/// populating its selector.
///
/// Values sort numerically when both sides parse as numbers, otherwise
/// case-insensitively as text, so year lists read 9, 10, 11 rather than
/// 10, 11, 9.
#[must_use]
pub fn facet_options(records: &[Record], key: ColumnKey) -> Vec<String> {
    let mut values: Vec<String> = records
        .iter()
        .map(|record| record.field(key).to_string())
        .filter(|value| !value.is_empty())
        .collect();
    values.sort_by(|a, b| match (a.parse::<f64>(), b.parse::<f64>()) {
        (Ok(x), Ok(y)) => x.total_cmp(&y),
        _ => a.to_lowercase().cmp(&b.to_lowercase()),
    });
    values.dedup();
    values
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(year: &str, subject: &str, question: &str, answer: &str) -> Record {
        Record {
            year: year.to_string(),
            subject: subject.to_string(),
            question: question.to_string(),
            answer: answer.to_string(),
            ..Record::default()
        }
    }

    fn sample() -> Vec<Record> {
        vec![
            record("2019", "History", "First?", "Lincoln"),
            record("2019", "Science", "Gas?", "Helium"),
            record("2020", "History", "War?", "Hastings"),
            record("2020", "Geography", "Capital?", "Paris"),
        ]
    }

    #[test]
    fn no_constraints_is_identity() {
        let store = sample();
        let view = apply_filters(&store, &FilterCriteria::default());
        assert_eq!(view, store);
    }

    #[test]
    fn facet_constraint_requires_exact_match() {
        let store = sample();
        let mut criteria = FilterCriteria::default();
        criteria.set_facet(Facet::Subject, Some("History".to_string()));
        let view = apply_filters(&store, &criteria);
        assert_eq!(view.len(), 2);
        assert!(view.iter().all(|r| r.subject == "History"));
    }

    #[test]
    fn facets_and_search_are_anded() {
        let store = sample();
        let mut criteria = FilterCriteria {
            search: "war".to_string(),
            ..FilterCriteria::default()
        };
        criteria.set_facet(Facet::Year, Some("2019".to_string()));
        assert!(apply_filters(&store, &criteria).is_empty());

        criteria.set_facet(Facet::Year, Some("2020".to_string()));
        let view = apply_filters(&store, &criteria);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].answer, "Hastings");
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let store = sample();
        let criteria = FilterCriteria {
            search: "  PARIS ".to_string(),
            ..FilterCriteria::default()
        };
        let view = apply_filters(&store, &criteria);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].subject, "Geography");
    }

    #[test]
    fn view_is_subset_satisfying_all_constraints() {
        let store = sample();
        let criteria = FilterCriteria {
            search: "2019".to_string(),
            ..FilterCriteria::default()
        };
        let view = apply_filters(&store, &criteria);
        for filtered in &view {
            assert!(store.contains(filtered));
            assert!(filtered.search_haystack().contains("2019"));
        }
    }

    #[test]
    fn empty_facet_value_clears_constraint() {
        let mut criteria = FilterCriteria::default();
        criteria.set_facet(Facet::Year, Some("2019".to_string()));
        criteria.set_facet(Facet::Year, Some(String::new()));
        assert!(criteria.is_empty());
    }

    #[test]
    fn facet_options_sort_numerically_when_numeric() {
        let store = vec![
            record("10", "B", "", ""),
            record("9", "a", "", ""),
            record("10", "C", "", ""),
        ];
        assert_eq!(facet_options(&store, ColumnKey::Year), vec!["9", "10"]);
        assert_eq!(
            facet_options(&store, ColumnKey::Subject),
            vec!["a", "B", "C"]
        );
    }
}
