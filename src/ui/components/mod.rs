//! Composable UI component renderers.
//!
//! Specialized rendering components for different UI elements, following a
//! component-based architecture. Each component renders one part of the
//! interface as a sequence of styled lines on stdout; output is strictly
//! top-to-bottom, with no cursor positioning, so it composes with ordinary
//! terminal scrollback.
//!
//! # Components
//!
//! - [`header`]: Title bar with mode name and record count
//! - [`footer`]: Command hints for the current mode
//! - [`table`]: Question table with sort indicators and pagination strip
//! - [`flashcard`]: Flashcard face, meta tags, and deck progress
//! - [`quiz`]: Quiz question, graded reveal, and final summary
//! - [`stats`]: Headline counters and distribution bar charts
//! - [`empty`]: Empty state message when filters exclude everything

mod empty;
mod flashcard;
mod footer;
mod header;
mod quiz;
mod stats;
mod table;

pub use empty::render_empty_state;
pub use flashcard::render_flashcard;
pub use footer::render_footer;
pub use header::render_header;
pub use quiz::render_quiz;
pub use stats::render_stats;
pub use table::render_table;

use crate::ui::theme::Theme;

/// Renders a horizontal border line.
///
/// Used to separate UI sections (header/body, body/footer).
pub fn render_border(color: &str, cols: usize) {
    println!("{}{}{}", Theme::fg(color), "─".repeat(cols), Theme::reset());
}

/// Renders a proportional progress bar line, e.g. `[██████░░░░] 60%`.
pub(crate) fn render_progress_bar(percent: u32, width: usize, theme: &Theme) {
    let filled = (width * percent as usize) / 100;
    println!(
        "{}[{}{}]{} {percent}%",
        Theme::fg(&theme.colors.accent),
        "█".repeat(filled),
        "░".repeat(width.saturating_sub(filled)),
        Theme::reset(),
    );
}
