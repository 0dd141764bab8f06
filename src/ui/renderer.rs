//! Top-level rendering coordinator.
//!
//! Main rendering entry point, coordinating view model computation and
//! delegation to UI components. Output is a sequence of styled lines on
//! stdout: header, border, mode-specific body, border, footer.

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{UIViewModel, ViewBody};

/// Default render width in columns.
const DEFAULT_COLS: usize = 100;

/// Renders the UI to stdout.
///
/// Computes the view model from application state and delegates to the
/// component for the current mode.
pub fn render(state: &AppState) {
    let viewmodel = state.compute_viewmodel();
    render_viewmodel(&viewmodel, &state.theme, DEFAULT_COLS);
}

/// Renders a pre-computed view model.
fn render_viewmodel(vm: &UIViewModel, theme: &Theme, cols: usize) {
    println!();
    components::render_header(&vm.header, theme, cols);
    components::render_border(&theme.colors.border, cols);

    match &vm.body {
        ViewBody::Table(table) => components::render_table(table, theme, cols),
        ViewBody::Flashcard(card) => components::render_flashcard(card, theme, cols),
        ViewBody::Quiz(quiz) => components::render_quiz(quiz, theme, cols),
        ViewBody::Stats(stats) => components::render_stats(stats, theme, cols),
    }

    components::render_border(&theme.colors.border, cols);
    components::render_footer(&vm.footer, theme);
}
