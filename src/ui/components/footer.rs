//! Footer component renderer.
//!
//! Renders the command hints for the current mode as a single dimmed line.

use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the footer command hints, dimmed.
pub fn render_footer(footer: &FooterInfo, theme: &Theme) {
    println!(
        "{}{}{}{}",
        Theme::dim(),
        Theme::fg(&theme.colors.text_dim),
        footer.commands,
        Theme::reset(),
    );
}
