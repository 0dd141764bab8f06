//! Flashcard component renderer.
//!
//! Renders the current card: position counter, the face that is showing,
//! meta tags, deck progress, and the sections footer.

use crate::ui::theme::Theme;
use crate::ui::viewmodel::FlashcardView;

/// Renders the flashcard view.
pub fn render_flashcard(card: &FlashcardView, theme: &Theme, cols: usize) {
    if let Some(empty) = &card.empty_state {
        super::render_empty_state(empty, theme, cols);
        return;
    }

    println!("{}{}{}", Theme::dim(), card.counter, Theme::reset());
    println!();

    if card.face_up {
        println!("{}Answer{}", Theme::dim(), Theme::reset());
        println!(
            "{}{}{}{}",
            Theme::bold(),
            Theme::fg(&theme.colors.correct_fg),
            card.answer,
            Theme::reset(),
        );
    } else {
        println!("{}Question{}", Theme::dim(), Theme::reset());
        println!(
            "{}{}{}{}",
            Theme::bold(),
            Theme::fg(&theme.colors.text_normal),
            card.question,
            Theme::reset(),
        );
    }

    println!();
    render_meta(&card.meta, theme);
    super::render_progress_bar(card.progress_percent, 24, theme);

    if !card.sections.is_empty() {
        println!(
            "{}Sections: {}{}",
            Theme::dim(),
            card.sections,
            Theme::reset()
        );
    }
}

/// Renders meta tags as a row of badges.
pub(super) fn render_meta(meta: &[String], theme: &Theme) {
    if meta.is_empty() {
        return;
    }

    for tag in meta {
        print!(
            "{}{} {tag} {}",
            Theme::fg(&theme.colors.badge_fg),
            Theme::bg(&theme.colors.badge_bg),
            Theme::reset(),
        );
        print!(" ");
    }
    println!();
}
