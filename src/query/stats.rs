//! Count-by aggregations for the stats view.
//!
//! Summarizes the current view: total records, distinct subject/round/
//! match counts, and the per-category breakdowns rendered as bar charts.

use std::collections::BTreeSet;

use crate::domain::{ColumnKey, Record};

/// Aggregated statistics over the current view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stats {
    /// Number of records in the view.
    pub total: usize,
    /// Number of distinct subjects.
    pub subjects: usize,
    /// Number of distinct rounds.
    pub rounds: usize,
    /// Number of distinct matches.
    pub matches: usize,
    /// Records per subject, most frequent first.
    pub by_subject: Vec<(String, usize)>,
    /// Records per round, most frequent first.
    pub by_round: Vec<(String, usize)>,
    /// Records per round/match pair, labelled `"Rd {round} · Match {m}"`,
    /// ordered by round then match.
    pub by_round_match: Vec<(String, usize)>,
}

fn distinct(view: &[Record], key: ColumnKey) -> usize {
    view.iter()
        .map(|record| record.field(key))
        .collect::<BTreeSet<_>>()
        .len()
}

/// Counts records by the given column, most frequent first.
///
/// Empty field values count under `"?"`.
#[must_use]
pub fn count_by(view: &[Record], key: ColumnKey) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for record in view {
        let value = record.field(key);
        let label = if value.is_empty() { "?" } else { value };
        match counts.iter_mut().find(|(existing, _)| existing == label) {
            Some((_, count)) => *count += 1,
            None => counts.push((label.to_string(), 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

fn count_by_round_match(view: &[Record]) -> Vec<(String, usize)> {
    let mut rounds: Vec<&str> = view.iter().map(|r| r.round.as_str()).collect();
    rounds.sort_unstable();
    rounds.dedup();

    let mut entries = Vec::new();
    for round in rounds {
        let round_records: Vec<&Record> = view.iter().filter(|r| r.round == round).collect();
        let mut matches: Vec<&str> = round_records.iter().map(|r| r.match_no.as_str()).collect();
        matches.sort_by(|a, b| {
            let x = a.parse::<f64>().unwrap_or(0.0);
            let y = b.parse::<f64>().unwrap_or(0.0);
            x.total_cmp(&y)
        });
        matches.dedup();
        for match_no in matches {
            let count = round_records.iter().filter(|r| r.match_no == match_no).count();
            entries.push((format!("Rd {round} · Match {match_no}"), count));
        }
    }
    entries
}

/// Computes the full stats summary for the current view.
#[must_use]
pub fn compute_stats(view: &[Record]) -> Stats {
    Stats {
        total: view.len(),
        subjects: distinct(view, ColumnKey::Subject),
        rounds: distinct(view, ColumnKey::Round),
        matches: distinct(view, ColumnKey::Match),
        by_subject: count_by(view, ColumnKey::Subject),
        by_round: count_by(view, ColumnKey::Round),
        by_round_match: count_by_round_match(view),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(subject: &str, round: &str, match_no: &str) -> Record {
        Record {
            subject: subject.to_string(),
            round: round.to_string(),
            match_no: match_no.to_string(),
            ..Record::default()
        }
    }

    fn sample() -> Vec<Record> {
        vec![
            record("History", "1", "2"),
            record("History", "1", "1"),
            record("Science", "2", "1"),
            record("History", "1", "1"),
        ]
    }

    #[test]
    fn totals_and_distinct_counts() {
        let stats = compute_stats(&sample());
        assert_eq!(stats.total, 4);
        assert_eq!(stats.subjects, 2);
        assert_eq!(stats.rounds, 2);
        assert_eq!(stats.matches, 2);
    }

    #[test]
    fn count_by_sorts_most_frequent_first() {
        let stats = compute_stats(&sample());
        assert_eq!(
            stats.by_subject,
            vec![("History".to_string(), 3), ("Science".to_string(), 1)]
        );
    }

    #[test]
    fn empty_values_count_under_placeholder() {
        let view = vec![record("", "1", "1"), record("", "1", "1")];
        let counts = count_by(&view, ColumnKey::Subject);
        assert_eq!(counts, vec![("?".to_string(), 2)]);
    }

    #[test]
    fn round_match_pairs_ordered_by_round_then_match() {
        let stats = compute_stats(&sample());
        assert_eq!(
            stats.by_round_match,
            vec![
                ("Rd 1 · Match 1".to_string(), 2),
                ("Rd 1 · Match 2".to_string(), 1),
                ("Rd 2 · Match 1".to_string(), 1),
            ]
        );
    }
}
