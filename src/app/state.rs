//! Application state management and view model computation.
//!
//! Defines [`AppState`], the single source of truth for all transient UI
//! state: the immutable record store, the derived view, filter/sort/page
//! criteria, the current mode, and the two practice-deck sessions.
//!
//! # Derivation Discipline
//!
//! The view and everything downstream of it are derived state, recomputed
//! through one pipeline whenever filter criteria change:
//!
//! ```text
//! records --filter--> view --sort--> view --page=1--> decks resync
//! ```
//!
//! [`refresh_view`](AppState::refresh_view) is the only entry point for
//! that pipeline. Sort changes re-sort the view in place without resetting
//! the page or the decks, and page changes touch nothing but the page
//! number, so each criterion invalidates exactly what depends on it.
//!
//! # View Model Computation
//!
//! [`compute_viewmodel`](AppState::compute_viewmodel) transforms a state
//! snapshot into a display-ready representation: the table page with
//! highlight ranges, the current card or question, or the distribution
//! charts, depending on mode.

use crate::deck::{FlashcardSession, QuizPhase, QuizSession};
use crate::domain::{default_columns, Column, ColumnKey, ColumnType, Record};
use crate::query::filter::{apply_filters, FilterCriteria};
use crate::query::page::{paginate, page_controls, PageControl, PageSize};
use crate::query::sort::{sort_view, SortCriteria, SortDirection};
use crate::query::stats::compute_stats;
use crate::ui::helpers::{find_match_ranges, truncate_chars};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    BarView, CellView, ChartView, ColumnHeaderView, EmptyState, FlashcardView, FooterInfo,
    HeaderInfo, PageControlView, QuizBody, QuizView, RevealView, RowView, StatsView, TableView,
    UIViewModel, ViewBody,
};

use super::modes::Mode;

/// Longest cell text shown in the table before truncation.
const MAX_CELL_CHARS: usize = 60;

/// Central application state container.
///
/// Mutated only by the event handler; rendered via
/// [`compute_viewmodel`](Self::compute_viewmodel).
#[derive(Debug, Clone)]
pub struct AppState {
    /// Immutable record store, loaded once at startup.
    pub records: Vec<Record>,

    /// Derived view: records passing the current filters, in sort order.
    /// Recomputed by `refresh_view()`, re-sorted by `set_sort()`.
    pub view: Vec<Record>,

    /// Column definitions with visibility flags.
    pub columns: Vec<Column>,

    /// Active filter constraints.
    pub criteria: FilterCriteria,

    /// Active sort column and direction.
    pub sort: SortCriteria,

    /// Rows per table page.
    pub page_size: PageSize,

    /// Current table page, 1-indexed. Clamped whenever it is set; a stale
    /// value from before the view shrank is re-clamped at slice time.
    pub current_page: usize,

    /// Current view mode.
    pub mode: Mode,

    /// Flashcard practice session over the current view.
    pub flashcard: FlashcardSession,

    /// Quiz practice session over the current view.
    pub quiz: QuizSession,

    /// Color scheme for UI rendering.
    pub theme: Theme,
}

impl AppState {
    /// Creates a new application state over a loaded record store.
    ///
    /// The view and decks start empty; call
    /// [`refresh_view`](Self::refresh_view) to run the derivation pipeline
    /// before the first render.
    #[must_use]
    pub fn new(records: Vec<Record>, theme: Theme) -> Self {
        Self {
            records,
            view: vec![],
            columns: default_columns(),
            criteria: FilterCriteria::default(),
            sort: SortCriteria::default(),
            page_size: PageSize::default(),
            current_page: 1,
            mode: Mode::Table,
            flashcard: FlashcardSession::default(),
            quiz: QuizSession::default(),
            theme,
        }
    }

    /// Comparison semantics for a column. Unknown keys compare as text.
    #[must_use]
    pub fn column_type_of(&self, key: ColumnKey) -> ColumnType {
        self.columns
            .iter()
            .find(|c| c.key == key)
            .map_or(ColumnType::Text, |c| c.column_type)
    }

    /// Runs the full derivation pipeline after a filter change.
    ///
    /// Filters the store into the view, re-applies the active sort, rewinds
    /// to page 1, and re-syncs both practice decks from the new view. Both
    /// sessions lose their position and counters; that is the documented
    /// cost of changing filters mid-practice.
    pub fn refresh_view(&mut self) {
        let _span = tracing::debug_span!(
            "refresh_view",
            total_records = self.records.len(),
        )
        .entered();

        self.view = apply_filters(&self.records, &self.criteria);
        self.apply_sort();
        self.current_page = 1;
        self.flashcard.reset(&self.view);
        self.quiz.reset(&self.view);

        tracing::debug!(view_len = self.view.len(), "view refreshed");
    }

    /// Re-sorts the view in place per the active sort criteria.
    ///
    /// A no-op when no sort column is selected. Does not reset the page or
    /// the decks.
    pub fn apply_sort(&mut self) {
        let mut view = std::mem::take(&mut self.view);
        sort_view(&mut view, self.sort, |key| self.column_type_of(key));
        self.view = view;
    }

    /// Applies a sort-header selection and re-sorts the view.
    pub fn set_sort(&mut self, column: ColumnKey) {
        self.sort.select(column);
        self.apply_sort();
    }

    /// Changes the page size and re-clamps the current page.
    pub fn set_page_size(&mut self, size: PageSize) {
        self.page_size = size;
        self.go_to_page(self.current_page);
    }

    /// Jumps to a page, clamped into the valid range for the current view.
    pub fn go_to_page(&mut self, page: usize) {
        let slice = paginate(self.view.len(), self.page_size, page);
        self.current_page = slice.page;
    }

    /// Advances one page, saturating at the last page.
    pub fn next_page(&mut self) {
        self.go_to_page(self.current_page + 1);
    }

    /// Goes back one page, saturating at page 1.
    pub fn prev_page(&mut self) {
        self.go_to_page(self.current_page.saturating_sub(1));
    }

    /// Toggles a column's visibility. Unknown keys are ignored.
    pub fn toggle_column(&mut self, key: ColumnKey) {
        if let Some(column) = self.columns.iter_mut().find(|c| c.key == key) {
            column.visible = !column.visible;
        }
    }

    /// Columns currently shown in the table, in definition order.
    #[must_use]
    pub fn visible_columns(&self) -> Vec<Column> {
        self.columns.iter().filter(|c| c.visible).cloned().collect()
    }

    /// Computes a renderable view model from the current state.
    #[must_use]
    pub fn compute_viewmodel(&self) -> UIViewModel {
        let body = match self.mode {
            Mode::Table => ViewBody::Table(self.compute_table()),
            Mode::Flashcard => ViewBody::Flashcard(self.compute_flashcard()),
            Mode::Quiz => ViewBody::Quiz(self.compute_quiz()),
            Mode::Stats => ViewBody::Stats(self.compute_stats_view()),
        };

        UIViewModel {
            header: self.compute_header(),
            body,
            footer: self.compute_footer(),
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let record_count = if self.criteria.is_empty() {
            format!("{} questions", self.records.len())
        } else {
            format!("{} / {} questions", self.view.len(), self.records.len())
        };

        HeaderInfo {
            title: format!(" Question Bank — {} ", self.mode.label()),
            record_count,
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let modes = Mode::ALL
            .iter()
            .filter(|m| **m != self.mode)
            .map(|m| m.label().to_lowercase())
            .collect::<Vec<_>>()
            .join("|");

        let commands = match self.mode {
            Mode::Table => format!(
                "search <text>  filter <facet> <value>  clear  sort <col>  page <n>  next/prev  \
                 pagesize <n|all>  toggle <col>  export  mode <{modes}>  quit"
            ),
            Mode::Flashcard => format!("flip  next  prev  shuffle  reset  mode <{modes}>  quit"),
            Mode::Quiz => format!("type an answer + Enter  shuffle  restart  mode <{modes}>  quit"),
            Mode::Stats => format!("mode <{modes}>  quit"),
        };

        FooterInfo { commands }
    }

    fn empty_view_state() -> EmptyState {
        EmptyState {
            message: "No matching questions".to_string(),
            subtitle: "Adjust the search or filters, or run `clear`".to_string(),
        }
    }

    fn compute_table(&self) -> TableView {
        let visible = self.visible_columns();
        let headers: Vec<ColumnHeaderView> = visible
            .iter()
            .map(|column| ColumnHeaderView {
                label: column.label.clone(),
                indicator: if self.sort.column == Some(column.key) {
                    match self.sort.direction {
                        SortDirection::Ascending => "↑",
                        SortDirection::Descending => "↓",
                    }
                } else {
                    "↕"
                },
            })
            .collect();

        if self.view.is_empty() {
            return TableView {
                columns: headers,
                rows: vec![],
                empty_state: Some(Self::empty_view_state()),
                page_info: "Showing 0 of 0".to_string(),
                controls: vec![],
                prev_enabled: false,
                next_enabled: false,
            };
        }

        let slice = paginate(self.view.len(), self.page_size, self.current_page);
        let term = self.criteria.search_term();

        let rows: Vec<RowView> = self.view[slice.start..slice.end]
            .iter()
            .map(|record| RowView {
                cells: visible
                    .iter()
                    .map(|column| {
                        let text = truncate_chars(record.field(column.key), MAX_CELL_CHARS);
                        let highlight_ranges = term
                            .as_deref()
                            .map_or_else(Vec::new, |t| find_match_ranges(&text, t));
                        CellView {
                            text,
                            highlight_ranges,
                            is_subject: column.key == ColumnKey::Subject,
                        }
                    })
                    .collect(),
            })
            .collect();

        let controls = page_controls(slice.total_pages, slice.page)
            .into_iter()
            .map(|control| match control {
                PageControl::Number(page) => PageControlView::Number {
                    page,
                    active: page == slice.page,
                },
                PageControl::Ellipsis => PageControlView::Ellipsis,
            })
            .collect();

        TableView {
            columns: headers,
            rows,
            empty_state: None,
            page_info: format!(
                "Showing {}–{} of {}",
                slice.start + 1,
                slice.end,
                self.view.len()
            ),
            controls,
            prev_enabled: slice.page > 1,
            next_enabled: slice.page < slice.total_pages,
        }
    }

    fn meta_tags(record: &Record) -> Vec<String> {
        let mut tags = Vec::new();
        if !record.subject.is_empty() {
            tags.push(record.subject.clone());
        }
        if !record.year.is_empty() {
            tags.push(format!("Yr {}", record.year));
        }
        if !record.round.is_empty() {
            tags.push(format!("Rd {}", record.round));
        }
        if !record.match_no.is_empty() {
            tags.push(format!("Mtch {}", record.match_no));
        }
        tags
    }

    #[allow(clippy::cast_possible_truncation)]
    fn deck_progress(index: usize, len: usize) -> u32 {
        if len == 0 {
            return 0;
        }
        (((index + 1) * 100) / len) as u32
    }

    fn compute_flashcard(&self) -> FlashcardView {
        let Some(card) = self.flashcard.current() else {
            return FlashcardView {
                counter: "No cards".to_string(),
                face_up: false,
                question: String::new(),
                answer: String::new(),
                meta: vec![],
                progress_percent: 0,
                sections: String::new(),
                empty_state: Some(Self::empty_view_state()),
            };
        };

        let mut sections: Vec<&str> = self
            .flashcard
            .cards()
            .iter()
            .map(|r| r.section.as_str())
            .filter(|s| !s.is_empty())
            .collect();
        sections.sort_unstable();
        sections.dedup();

        FlashcardView {
            counter: format!(
                "Card {} of {}",
                self.flashcard.index() + 1,
                self.flashcard.len()
            ),
            face_up: self.flashcard.is_flipped(),
            question: card.question.clone(),
            answer: card.answer.clone(),
            meta: Self::meta_tags(card),
            progress_percent: Self::deck_progress(self.flashcard.index(), self.flashcard.len()),
            sections: sections.join(", "),
            empty_state: None,
        }
    }

    fn compute_quiz(&self) -> QuizView {
        let score_line = match self.quiz.percentage() {
            Some(pct) => format!(
                "Score: {} / {} ({pct}%)",
                self.quiz.correct(),
                self.quiz.total()
            ),
            None => format!(
                "Score: {} / {} (—)",
                self.quiz.correct(),
                self.quiz.total()
            ),
        };

        if self.quiz.is_empty() {
            return QuizView {
                score_line,
                body: QuizBody::Empty(Self::empty_view_state()),
            };
        }

        if self.quiz.phase() == QuizPhase::Finished {
            let pct = self.quiz.percentage().unwrap_or(0);
            return QuizView {
                score_line,
                body: QuizBody::Finished {
                    summary: format!(
                        "{} / {} correct ({pct}%)",
                        self.quiz.correct(),
                        self.quiz.total()
                    ),
                },
            };
        }

        let Some(card) = self.quiz.current() else {
            return QuizView {
                score_line,
                body: QuizBody::Empty(Self::empty_view_state()),
            };
        };

        QuizView {
            score_line,
            body: QuizBody::Question {
                number: format!("Question {} of {}", self.quiz.index() + 1, self.quiz.len()),
                question: card.question.clone(),
                meta: Self::meta_tags(card),
                reveal: self.quiz.last_grade().map(|grade| RevealView {
                    correct: grade.correct,
                    answer: grade.answer.clone(),
                }),
                progress_percent: Self::deck_progress(self.quiz.index(), self.quiz.len()),
            },
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn compute_stats_view(&self) -> StatsView {
        if self.view.is_empty() {
            return StatsView {
                total: 0,
                subjects: 0,
                rounds: 0,
                matches: 0,
                charts: vec![],
                empty_state: Some(Self::empty_view_state()),
            };
        }

        let stats = compute_stats(&self.view);

        let chart = |title: &str, counts: &[(String, usize)]| {
            let max = counts.iter().map(|(_, n)| *n).max().unwrap_or(1).max(1);
            ChartView {
                title: title.to_string(),
                bars: counts
                    .iter()
                    .map(|(label, count)| BarView {
                        label: label.clone(),
                        count: *count,
                        fraction: *count as f64 / max as f64,
                    })
                    .collect(),
            }
        };

        StatsView {
            total: stats.total,
            subjects: stats.subjects,
            rounds: stats.rounds,
            matches: stats.matches,
            charts: vec![
                chart("By Subject", &stats.by_subject),
                chart("By Round", &stats.by_round),
                chart("By Round · Match", &stats.by_round_match),
            ],
            empty_state: None,
        }
    }
}
