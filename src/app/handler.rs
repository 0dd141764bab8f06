//! Event handling and state transition logic.
//!
//! The core event handler processes user commands, translating them into
//! state changes and action sequences. Control flow is unidirectional:
//!
//! 1. The shell parses input into an [`Event`]
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for execution
//!
//! The returned `bool` says whether the UI should re-render; events that
//! leave visible state untouched skip the render pass.

use rand::thread_rng;

use crate::app::modes::Mode;
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::ColumnKey;
use crate::export;
use crate::query::filter::Facet;
use crate::query::page::PageSize;

/// Events triggered by user commands.
///
/// Each event is a discrete occurrence that may cause state changes and
/// action emissions. The handler processes them sequentially, so state
/// transitions are deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Replaces the free-text search query and refreshes the view.
    SearchChanged(String),
    /// Sets or clears one facet constraint and refreshes the view.
    FacetChanged(Facet, Option<String>),
    /// Clears every filter constraint and refreshes the view.
    ClearFilters,
    /// Toggles a column's visibility in the table.
    ToggleColumn(ColumnKey),
    /// Applies a sort-header selection (toggles direction on repeat).
    SortBy(ColumnKey),
    /// Changes the rows-per-page setting.
    PageSizeChanged(PageSize),
    /// Jumps to a table page (clamped).
    GoToPage(usize),
    /// Advances one table page.
    NextPage,
    /// Goes back one table page.
    PrevPage,
    /// Switches the view mode.
    SwitchMode(Mode),
    /// Exports the current view as CSV.
    ExportCsv,

    /// Flips the current flashcard.
    FlashFlip,
    /// Moves to the next flashcard (wraps).
    FlashNext,
    /// Moves to the previous flashcard (wraps).
    FlashPrev,
    /// Shuffles the flashcard deck.
    FlashShuffle,
    /// Restores the flashcard deck to view order.
    FlashReset,

    /// Submits a quiz answer for grading.
    QuizSubmit(String),
    /// Advances past an answered quiz question.
    QuizNext,
    /// Shuffles the quiz deck and resets the session.
    QuizShuffle,
    /// Restarts the quiz, keeping deck order.
    QuizRestart,

    /// Exits the application.
    Quit,
}

/// Processes an event, mutates application state, and returns actions to
/// execute.
///
/// # Returns
///
/// `(should_render, actions)`: whether the UI changed, and side effects
/// for the shell to run in order.
///
/// # Errors
///
/// Returns an error when a side-effect payload cannot be produced, such as
/// CSV serialization failing during export.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::SearchChanged(query) => {
            state.criteria.search.clone_from(query);
            state.refresh_view();
            Ok((true, vec![]))
        }
        Event::FacetChanged(facet, value) => {
            state.criteria.set_facet(*facet, value.clone());
            state.refresh_view();
            Ok((true, vec![]))
        }
        Event::ClearFilters => {
            state.criteria = Default::default();
            state.refresh_view();
            Ok((true, vec![Action::Toast("Filters cleared".to_string())]))
        }
        Event::ToggleColumn(key) => {
            state.toggle_column(*key);
            Ok((true, vec![]))
        }
        Event::SortBy(column) => {
            state.set_sort(*column);
            Ok((true, vec![]))
        }
        Event::PageSizeChanged(size) => {
            state.set_page_size(*size);
            Ok((true, vec![]))
        }
        Event::GoToPage(page) => {
            state.go_to_page(*page);
            Ok((true, vec![]))
        }
        Event::NextPage => {
            state.next_page();
            Ok((true, vec![]))
        }
        Event::PrevPage => {
            state.prev_page();
            Ok((true, vec![]))
        }
        Event::SwitchMode(mode) => {
            if state.mode == *mode {
                return Ok((false, vec![]));
            }
            tracing::debug!(from = ?state.mode, to = ?mode, "switching mode");
            state.mode = *mode;
            Ok((true, vec![]))
        }
        Event::ExportCsv => {
            let contents = export::export_csv(&state.view, &state.columns)?;
            let filename = export::export_filename();
            tracing::debug!(rows = state.view.len(), filename = %filename, "view exported");
            Ok((
                false,
                vec![
                    Action::WriteExport {
                        filename: filename.clone(),
                        contents,
                    },
                    Action::Toast(format!("Exported {} rows to {filename}", state.view.len())),
                ],
            ))
        }

        Event::FlashFlip => {
            state.flashcard.flip();
            Ok((true, vec![]))
        }
        Event::FlashNext => {
            state.flashcard.nav(1);
            Ok((true, vec![]))
        }
        Event::FlashPrev => {
            state.flashcard.nav(-1);
            Ok((true, vec![]))
        }
        Event::FlashShuffle => {
            state.flashcard.shuffle(&mut thread_rng());
            Ok((true, vec![Action::Toast("Deck shuffled".to_string())]))
        }
        Event::FlashReset => {
            let view = state.view.clone();
            state.flashcard.reset(&view);
            Ok((true, vec![Action::Toast("Deck reset".to_string())]))
        }

        Event::QuizSubmit(answer) => {
            // Grading is a no-op outside the unanswered phase.
            let graded = state.quiz.submit(answer).is_some();
            Ok((graded, vec![]))
        }
        Event::QuizNext => {
            state.quiz.next();
            Ok((true, vec![]))
        }
        Event::QuizShuffle => {
            state.quiz.shuffle(&mut thread_rng());
            Ok((true, vec![Action::Toast("Quiz shuffled".to_string())]))
        }
        Event::QuizRestart => {
            state.quiz.restart();
            Ok((true, vec![Action::Toast("Quiz restarted".to_string())]))
        }

        Event::Quit => Ok((false, vec![Action::Quit])),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Record;
    use crate::ui::theme::Theme;

    fn record(subject: &str, question: &str, answer: &str) -> Record {
        Record {
            subject: subject.to_string(),
            question: question.to_string(),
            answer: answer.to_string(),
            year: "2020".to_string(),
            round: "1".to_string(),
            match_no: "1".to_string(),
            ..Record::default()
        }
    }

    fn state() -> AppState {
        let mut records = Vec::new();
        for i in 0..88 {
            records.push(record("History", &format!("history q{i}"), "hans"));
        }
        for i in 0..12 {
            records.push(record("Science", &format!("science q{i}"), "atom"));
        }
        let mut state = AppState::new(records, Theme::default());
        state.refresh_view();
        state
    }

    #[test]
    fn facet_change_runs_the_full_refresh_pipeline() {
        let mut state = state();
        state.set_page_size(PageSize::Limited(10));
        state.go_to_page(5);
        state.flashcard.nav(3);

        let (rendered, actions) = handle_event(
            &mut state,
            &Event::FacetChanged(Facet::Subject, Some("Science".to_string())),
        )
        .expect("handled");

        assert!(rendered);
        assert!(actions.is_empty());
        assert_eq!(state.view.len(), 12);
        assert_eq!(state.current_page, 1);
        assert_eq!(state.flashcard.index(), 0);
        assert_eq!(state.quiz.total(), 0);
    }

    #[test]
    fn clear_filters_restores_the_full_view_and_toasts() {
        let mut state = state();
        handle_event(
            &mut state,
            &Event::FacetChanged(Facet::Subject, Some("Science".to_string())),
        )
        .expect("handled");

        let (_, actions) = handle_event(&mut state, &Event::ClearFilters).expect("handled");

        assert_eq!(state.view.len(), 100);
        assert!(matches!(actions.as_slice(), [Action::Toast(_)]));
    }

    #[test]
    fn page_navigation_clamps_at_both_ends() {
        let mut state = state();
        state.set_page_size(PageSize::Limited(10));

        handle_event(&mut state, &Event::PrevPage).expect("handled");
        assert_eq!(state.current_page, 1);

        handle_event(&mut state, &Event::GoToPage(999)).expect("handled");
        assert_eq!(state.current_page, 10);

        handle_event(&mut state, &Event::NextPage).expect("handled");
        assert_eq!(state.current_page, 10);
    }

    #[test]
    fn export_emits_write_and_toast_without_render() {
        let mut state = state();
        handle_event(
            &mut state,
            &Event::FacetChanged(Facet::Subject, Some("Science".to_string())),
        )
        .expect("handled");

        let (rendered, actions) = handle_event(&mut state, &Event::ExportCsv).expect("handled");

        assert!(!rendered);
        let Action::WriteExport { filename, contents } = &actions[0] else {
            panic!("expected write action");
        };
        assert!(filename.ends_with(".csv"));
        // Header plus the 12 filtered rows.
        assert_eq!(contents.lines().count(), 13);
        assert!(matches!(actions[1], Action::Toast(_)));
    }

    #[test]
    fn repeated_sort_event_toggles_direction() {
        use crate::query::sort::SortDirection;

        let mut state = state();
        handle_event(&mut state, &Event::SortBy(ColumnKey::Subject)).expect("handled");
        assert_eq!(state.sort.direction, SortDirection::Ascending);
        assert_eq!(state.view[0].subject, "History");

        handle_event(&mut state, &Event::SortBy(ColumnKey::Subject)).expect("handled");
        assert_eq!(state.sort.direction, SortDirection::Descending);
        assert_eq!(state.view[0].subject, "Science");
    }

    #[test]
    fn switching_to_the_same_mode_skips_the_render() {
        let mut state = state();
        let (rendered, _) =
            handle_event(&mut state, &Event::SwitchMode(Mode::Table)).expect("handled");
        assert!(!rendered);

        let (rendered, _) =
            handle_event(&mut state, &Event::SwitchMode(Mode::Quiz)).expect("handled");
        assert!(rendered);
        assert_eq!(state.mode, Mode::Quiz);
    }

    #[test]
    fn quiz_submit_outside_unanswered_phase_is_silent() {
        let mut state = state();
        handle_event(&mut state, &Event::QuizSubmit("hans".to_string())).expect("handled");
        assert_eq!(state.quiz.total(), 1);

        let (rendered, _) =
            handle_event(&mut state, &Event::QuizSubmit("again".to_string())).expect("handled");
        assert!(!rendered);
        assert_eq!(state.quiz.total(), 1);
    }

    #[test]
    fn quit_emits_the_quit_action() {
        let mut state = state();
        let (rendered, actions) = handle_event(&mut state, &Event::Quit).expect("handled");
        assert!(!rendered);
        assert_eq!(actions, vec![Action::Quit]);
    }
}
