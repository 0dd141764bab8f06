//! Empty state component renderer.
//!
//! Renders a centered message when the current filters exclude every record.

use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the empty state message, centered.
pub fn render_empty_state(empty: &EmptyState, theme: &Theme, cols: usize) {
    println!();

    let message_padding = cols.saturating_sub(empty.message.chars().count()) / 2;
    println!(
        "{}{}{}{}{}",
        Theme::bold(),
        Theme::fg(&theme.colors.empty_state_fg),
        " ".repeat(message_padding),
        empty.message,
        Theme::reset(),
    );

    let subtitle_padding = cols.saturating_sub(empty.subtitle.chars().count()) / 2;
    println!(
        "{}{}{}{}",
        Theme::dim(),
        " ".repeat(subtitle_padding),
        empty.subtitle,
        Theme::reset(),
    );

    println!();
}
