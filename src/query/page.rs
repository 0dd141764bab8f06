//! Page slicing and page-control computation.
//!
//! Slices the ordered view into fixed-size pages (or one unbounded page)
//! and computes the metadata the table footer needs: total page count,
//! displayed range, and the numbered-control strip with ellipsis
//! collapsing.

/// Page size selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSize {
    /// Fixed number of records per page.
    Limited(usize),
    /// The entire view as a single page.
    All,
}

impl Default for PageSize {
    fn default() -> Self {
        Self::Limited(50)
    }
}

impl PageSize {
    /// Parses a page-size selection from user input (`"all"` or a positive
    /// integer).
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        if input.eq_ignore_ascii_case("all") {
            return Some(Self::All);
        }
        match input.parse::<usize>() {
            Ok(n) if n > 0 => Some(Self::Limited(n)),
            _ => None,
        }
    }
}

/// The slice of the view a page covers, plus control metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSlice {
    /// Start index into the view (inclusive).
    pub start: usize,
    /// End index into the view (exclusive).
    pub end: usize,
    /// Total number of pages, always at least 1.
    pub total_pages: usize,
    /// The effective page number after clamping, 1-indexed.
    pub page: usize,
}

/// One entry in the numbered page-control strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageControl {
    /// A clickable page number.
    Number(usize),
    /// A collapsed gap between page numbers.
    Ellipsis,
}

/// Computes the page slice for a view of `len` records.
///
/// `PageSize::All` yields exactly one page spanning the whole view.
/// Otherwise `total_pages = ceil(len / n)` with a minimum of 1, and `page`
/// is clamped into `[1, total_pages]` before slicing, so a stale page
/// number from before the view shrank never slices out of bounds.
#[must_use]
pub fn paginate(len: usize, size: PageSize, page: usize) -> PageSlice {
    match size {
        PageSize::All => PageSlice {
            start: 0,
            end: len,
            total_pages: 1,
            page: 1,
        },
        PageSize::Limited(per_page) => {
            let total_pages = ((len + per_page - 1) / per_page).max(1);
            let page = page.clamp(1, total_pages);
            let start = (page - 1) * per_page;
            let end = (start + per_page).min(len);
            PageSlice {
                start,
                end,
                total_pages,
                page,
            }
        }
    }
}

/// Computes the numbered control strip for the table footer.
///
/// Empty when there is a single page. Up to 7 pages, every number is
/// shown. Beyond that: the first page, the current page with one neighbor
/// on each side, the last page, and an ellipsis for each collapsed gap.
#[must_use]
pub fn page_controls(total_pages: usize, current: usize) -> Vec<PageControl> {
    if total_pages <= 1 {
        return Vec::new();
    }

    if total_pages <= 7 {
        return (1..=total_pages).map(PageControl::Number).collect();
    }

    let mut controls = vec![PageControl::Number(1)];
    if current > 3 {
        controls.push(PageControl::Ellipsis);
    }
    let window_start = current.saturating_sub(1).max(2);
    let window_end = (current + 1).min(total_pages - 1);
    for page in window_start..=window_end {
        controls.push(PageControl::Number(page));
    }
    if current + 2 < total_pages {
        controls.push(PageControl::Ellipsis);
    }
    controls.push(PageControl::Number(total_pages));
    controls
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_partition_the_view() {
        let len = 23;
        let size = PageSize::Limited(5);
        let total = paginate(len, size, 1).total_pages;
        assert_eq!(total, 5);

        let mut covered = Vec::new();
        for page in 1..=total {
            let slice = paginate(len, size, page);
            covered.extend(slice.start..slice.end);
        }
        assert_eq!(covered, (0..len).collect::<Vec<_>>());
    }

    #[test]
    fn unbounded_size_is_one_full_page() {
        let slice = paginate(1234, PageSize::All, 7);
        assert_eq!(slice.total_pages, 1);
        assert_eq!(slice.page, 1);
        assert_eq!((slice.start, slice.end), (0, 1234));
    }

    #[test]
    fn out_of_range_page_clamps_to_last() {
        let slice = paginate(10, PageSize::Limited(5), 5);
        assert_eq!(slice.total_pages, 2);
        assert_eq!(slice.page, 2);
        assert_eq!((slice.start, slice.end), (5, 10));
    }

    #[test]
    fn empty_view_still_has_one_page() {
        let slice = paginate(0, PageSize::Limited(10), 1);
        assert_eq!(slice.total_pages, 1);
        assert_eq!((slice.start, slice.end), (0, 0));
    }

    #[test]
    fn last_page_may_be_short() {
        let slice = paginate(12, PageSize::Limited(10), 2);
        assert_eq!((slice.start, slice.end), (10, 12));
    }

    #[test]
    fn controls_absent_for_single_page() {
        assert!(page_controls(1, 1).is_empty());
    }

    #[test]
    fn controls_show_all_numbers_up_to_seven() {
        let controls = page_controls(7, 4);
        assert_eq!(controls.len(), 7);
        assert!(controls
            .iter()
            .all(|c| matches!(c, PageControl::Number(_))));
    }

    #[test]
    fn controls_collapse_both_gaps_in_the_middle() {
        use PageControl::{Ellipsis, Number};
        let controls = page_controls(20, 10);
        assert_eq!(
            controls,
            vec![
                Number(1),
                Ellipsis,
                Number(9),
                Number(10),
                Number(11),
                Ellipsis,
                Number(20),
            ]
        );
    }

    #[test]
    fn controls_near_edges_skip_adjacent_ellipsis() {
        use PageControl::{Ellipsis, Number};
        assert_eq!(
            page_controls(20, 2),
            vec![Number(1), Number(2), Number(3), Ellipsis, Number(20)]
        );
        assert_eq!(
            page_controls(20, 19),
            vec![Number(1), Ellipsis, Number(18), Number(19), Number(20)]
        );
    }
}
