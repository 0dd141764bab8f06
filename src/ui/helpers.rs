//! Shared rendering utilities.
//!
//! Low-level text utilities used across UI components: locating search-term
//! occurrences in cell text and weaving ANSI highlight sequences around them.
//! All range arithmetic is in character indices, not byte indices, so
//! multi-byte text is safe to slice.

use crate::ui::theme::Theme;

/// Finds every occurrence of `term` in `text`, case-insensitively.
///
/// Returns `(start, end)` character-index ranges with exclusive end, in
/// left-to-right order. Overlapping occurrences are not reported; the scan
/// resumes after each match. An empty term yields no ranges.
///
/// Case folding maps each character to the first character of its lowercase
/// expansion, keeping a 1:1 correspondence between folded and original
/// character positions.
#[must_use]
pub fn find_match_ranges(text: &str, term: &str) -> Vec<(usize, usize)> {
    let term: Vec<char> = term
        .chars()
        .map(|c| c.to_lowercase().next().unwrap_or(c))
        .collect();
    if term.is_empty() {
        return Vec::new();
    }

    let haystack: Vec<char> = text
        .chars()
        .map(|c| c.to_lowercase().next().unwrap_or(c))
        .collect();

    let mut ranges = Vec::new();
    let mut pos = 0;
    while pos + term.len() <= haystack.len() {
        if haystack[pos..pos + term.len()] == term[..] {
            ranges.push((pos, pos + term.len()));
            pos += term.len();
        } else {
            pos += 1;
        }
    }

    ranges
}

/// Renders text with highlighted character ranges as a styled string.
///
/// Splits the text into highlighted and normal sections based on the provided
/// ranges. Highlighted sections are wrapped in `match_highlight_fg` and
/// `match_highlight_bg`; normal sections pass through unchanged. With no
/// ranges the text is returned as-is.
///
/// Ranges must be sorted and non-overlapping, as produced by
/// [`find_match_ranges`].
#[must_use]
pub fn highlight_text(text: &str, ranges: &[(usize, usize)], theme: &Theme) -> String {
    if ranges.is_empty() {
        return text.to_string();
    }

    let chars: Vec<char> = text.chars().collect();
    let mut out = String::new();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        if start > current_pos {
            out.extend(&chars[current_pos..start]);
        }

        out.push_str(&Theme::fg(&theme.colors.match_highlight_fg));
        out.push_str(&Theme::bg(&theme.colors.match_highlight_bg));
        out.extend(&chars[start..end.min(chars.len())]);
        out.push_str(Theme::reset());

        current_pos = end;
    }

    if current_pos < chars.len() {
        out.extend(&chars[current_pos..]);
    }

    out
}

/// Truncates text to at most `max` characters, appending `…` when cut.
#[must_use]
pub fn truncate_chars(text: &str, max: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max {
        return text.to_string();
    }

    let mut out: String = chars[..max.saturating_sub(1)].iter().collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_all_occurrences_case_insensitively() {
        let ranges = find_match_ranges("Paris is in France, PARIS indeed", "paris");
        assert_eq!(ranges, vec![(0, 5), (20, 25)]);
    }

    #[test]
    fn empty_term_yields_no_ranges() {
        assert!(find_match_ranges("anything", "").is_empty());
    }

    #[test]
    fn no_match_yields_no_ranges() {
        assert!(find_match_ranges("history", "science").is_empty());
    }

    #[test]
    fn ranges_are_character_indices() {
        // "é" is multi-byte; character indexing keeps the range tight.
        let ranges = find_match_ranges("café au lait", "au");
        assert_eq!(ranges, vec![(5, 7)]);
    }

    #[test]
    fn highlight_wraps_matched_sections() {
        let theme = Theme::default();
        let styled = highlight_text("abcdef", &[(2, 4)], &theme);

        assert!(styled.starts_with("ab"));
        assert!(styled.contains("cd"));
        assert!(styled.ends_with("ef"));
        assert!(styled.contains("\u{001b}[48;2;"));
    }

    #[test]
    fn highlight_without_ranges_is_identity() {
        let theme = Theme::default();
        assert_eq!(highlight_text("plain", &[], &theme), "plain");
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate_chars("short", 10), "short");
        assert_eq!(truncate_chars("abcdefgh", 5), "abcd…");
        assert_eq!(truncate_chars("crème brûlée", 6), "crème…");
    }
}
