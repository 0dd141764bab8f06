//! Header component renderer.
//!
//! Renders the title bar with the application name, current mode, and the
//! shown/total record count.

use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the header title bar.
///
/// The title is centered and bold; the record count line below it is dimmed.
/// Both lines are padded to fill the terminal width when a header background
/// color is configured.
pub fn render_header(header: &HeaderInfo, theme: &Theme, cols: usize) {
    let title_len = header.title.chars().count();
    let padding = cols.saturating_sub(title_len) / 2;

    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }
    print!("{}", " ".repeat(padding));
    print!("{}", header.title);
    print!("{}", " ".repeat(cols.saturating_sub(padding + title_len)));
    println!("{}", Theme::reset());

    let count_len = header.record_count.chars().count();
    let count_padding = cols.saturating_sub(count_len) / 2;
    println!(
        "{}{}{}{}",
        Theme::dim(),
        " ".repeat(count_padding),
        header.record_count,
        Theme::reset(),
    );
}
