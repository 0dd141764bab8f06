//! Quiz component renderer.
//!
//! Renders the quiz screen: running score, the current question with its
//! graded reveal once answered, and the final summary when the deck is
//! exhausted.

use crate::ui::theme::Theme;
use crate::ui::viewmodel::{QuizBody, QuizView, RevealView};

/// Renders the quiz view.
pub fn render_quiz(quiz: &QuizView, theme: &Theme, cols: usize) {
    println!(
        "{}{}{}{}",
        Theme::bold(),
        Theme::fg(&theme.colors.accent),
        quiz.score_line,
        Theme::reset(),
    );
    println!();

    match &quiz.body {
        QuizBody::Empty(empty) => super::render_empty_state(empty, theme, cols),
        QuizBody::Question {
            number,
            question,
            meta,
            reveal,
            progress_percent,
        } => {
            println!("{}{}{}", Theme::dim(), number, Theme::reset());
            println!(
                "{}{}{}",
                Theme::fg(&theme.colors.text_normal),
                question,
                Theme::reset()
            );
            println!();
            super::flashcard::render_meta(meta, theme);
            super::render_progress_bar(*progress_percent, 24, theme);

            match reveal {
                Some(r) => render_reveal(r, theme),
                None => println!("{}Type your answer and press Enter{}", Theme::dim(), Theme::reset()),
            }
        }
        QuizBody::Finished { summary } => {
            println!("{}Quiz complete{}", Theme::bold(), Theme::reset());
            println!(
                "{}{}{}",
                Theme::fg(&theme.colors.accent),
                summary,
                Theme::reset()
            );
        }
    }
}

fn render_reveal(reveal: &RevealView, theme: &Theme) {
    println!();
    if reveal.correct {
        println!(
            "{}{}✓ Correct{}",
            Theme::bold(),
            Theme::fg(&theme.colors.correct_fg),
            Theme::reset(),
        );
    } else {
        println!(
            "{}{}✗ Incorrect{}",
            Theme::bold(),
            Theme::fg(&theme.colors.incorrect_fg),
            Theme::reset(),
        );
    }
    println!(
        "{}Answer:{} {}",
        Theme::dim(),
        Theme::reset(),
        reveal.answer
    );
}
