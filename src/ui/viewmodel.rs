//! View model types representing renderable UI state.
//!
//! Immutable view models computed from application state. They contain no
//! business logic, only display-ready data: formatted counters, pre-computed
//! highlight ranges, page-control strips, and explicit empty states, so the
//! renderer never has to consult `AppState` or make decisions of its own.
//!
//! View models are created via `AppState::compute_viewmodel()` and consumed
//! by [`renderer`](crate::ui::renderer).

/// Complete UI view model for one render pass.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Header information (title, record count).
    pub header: HeaderInfo,

    /// Mode-specific body content.
    pub body: ViewBody,

    /// Footer information (available commands for the current mode).
    pub footer: FooterInfo,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Title text, including the current mode name.
    pub title: String,

    /// Record count line, e.g. `"812 questions"` or `"12 / 812 questions"`
    /// when filtered.
    pub record_count: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Command hints for the current mode.
    pub commands: String,
}

/// Mode-specific body of the view model.
#[derive(Debug, Clone)]
pub enum ViewBody {
    Table(TableView),
    Flashcard(FlashcardView),
    Quiz(QuizView),
    Stats(StatsView),
}

/// Empty state message, shown when filters exclude all records.
#[derive(Debug, Clone)]
pub struct EmptyState {
    /// Primary message (e.g. "No matching records").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}

/// Table mode content: one page of the view plus pagination controls.
#[derive(Debug, Clone)]
pub struct TableView {
    /// Visible column headers with sort indicators.
    pub columns: Vec<ColumnHeaderView>,

    /// Rows of the current page, in view order.
    pub rows: Vec<RowView>,

    /// Set when the view is empty; rows and controls are empty too.
    pub empty_state: Option<EmptyState>,

    /// Displayed-range line, e.g. `"Showing 1–10 of 12"`.
    pub page_info: String,

    /// Numbered page-control strip.
    pub controls: Vec<PageControlView>,

    /// Whether the prev-page control is actionable.
    pub prev_enabled: bool,

    /// Whether the next-page control is actionable.
    pub next_enabled: bool,
}

/// One visible column header.
#[derive(Debug, Clone)]
pub struct ColumnHeaderView {
    /// Column label.
    pub label: String,

    /// Sort indicator: `"↕"` unsorted, `"↑"`/`"↓"` when this column is the
    /// active sort.
    pub indicator: &'static str,
}

/// One table row.
#[derive(Debug, Clone)]
pub struct RowView {
    /// Cells in visible-column order.
    pub cells: Vec<CellView>,
}

/// One table cell.
#[derive(Debug, Clone)]
pub struct CellView {
    /// Cell text.
    pub text: String,

    /// Character-index ranges matching the active search term,
    /// `(start, end)` with exclusive end.
    pub highlight_ranges: Vec<(usize, usize)>,

    /// Whether this is the Subject cell (rendered as a badge).
    pub is_subject: bool,
}

/// One entry in the rendered page-control strip.
#[derive(Debug, Clone)]
pub enum PageControlView {
    /// A page number; `active` marks the current page.
    Number { page: usize, active: bool },
    /// A collapsed gap.
    Ellipsis,
}

/// Flashcard mode content.
#[derive(Debug, Clone)]
pub struct FlashcardView {
    /// Position counter, e.g. `"Card 3 of 12"`.
    pub counter: String,

    /// Whether the answer side is showing.
    pub face_up: bool,

    /// Question text of the current card.
    pub question: String,

    /// Answer text of the current card.
    pub answer: String,

    /// Meta tags (subject, year, round, match).
    pub meta: Vec<String>,

    /// Progress through the deck, 0–100.
    pub progress_percent: u32,

    /// Distinct sections present in the deck, comma-joined.
    pub sections: String,

    /// Set when the deck is empty.
    pub empty_state: Option<EmptyState>,
}

/// Quiz mode content.
#[derive(Debug, Clone)]
pub struct QuizView {
    /// Running score line, e.g. `"Score: 2 / 3 (67%)"`; a dash stands in
    /// before the first attempt.
    pub score_line: String,

    /// Current screen of the quiz.
    pub body: QuizBody,
}

/// The quiz's current screen.
#[derive(Debug, Clone)]
pub enum QuizBody {
    /// No questions match the current filters.
    Empty(EmptyState),

    /// An active question, possibly with its graded reveal.
    Question {
        /// Position counter, e.g. `"Question 2 of 12"`.
        number: String,
        /// Question text.
        question: String,
        /// Meta tags (subject, year, round, match).
        meta: Vec<String>,
        /// Grading reveal, present once the question is answered.
        reveal: Option<RevealView>,
        /// Progress through the deck, 0–100.
        progress_percent: u32,
    },

    /// All questions answered.
    Finished {
        /// Final summary, e.g. `"2 / 3 correct (67%)"`.
        summary: String,
    },
}

/// Graded-answer reveal panel.
#[derive(Debug, Clone)]
pub struct RevealView {
    /// Whether the submission was accepted.
    pub correct: bool,

    /// The correct answer.
    pub answer: String,
}

/// Stats mode content.
#[derive(Debug, Clone)]
pub struct StatsView {
    /// Headline counters: total, distinct subjects, rounds, matches.
    pub total: usize,
    pub subjects: usize,
    pub rounds: usize,
    pub matches: usize,

    /// Bar charts (by subject, by round, by round/match).
    pub charts: Vec<ChartView>,

    /// Set when the view is empty.
    pub empty_state: Option<EmptyState>,
}

/// One bar chart.
#[derive(Debug, Clone)]
pub struct ChartView {
    /// Chart title.
    pub title: String,

    /// Bars in display order.
    pub bars: Vec<BarView>,
}

/// One bar of a chart.
#[derive(Debug, Clone)]
pub struct BarView {
    /// Category label.
    pub label: String,

    /// Record count for the category.
    pub count: usize,

    /// Bar length relative to the chart maximum, in 0..=1.
    pub fraction: f64,
}
