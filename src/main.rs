//! Terminal shell and entry point.
//!
//! The thin integration layer between the quizbank library and the
//! terminal: it parses command-line arguments, loads the dataset, then
//! runs a read-eval-render loop over stdin. All state transitions happen
//! in the library's event handler; this shell only translates command
//! lines into [`Event`]s and executes the returned [`Action`]s.
//!
//! # Command Mapping
//!
//! Commands are mode-sensitive. In every mode:
//!
//! - `mode <table|cards|quiz|stats>` → `Event::SwitchMode`
//! - `quit` / `q` → `Event::Quit`
//!
//! In table mode:
//!
//! - `search <text>` / `search` → `Event::SearchChanged`
//! - `filter <facet> <value>` / `filter <facet>` → `Event::FacetChanged`
//! - `options <facet>` → prints the facet's distinct values
//! - `clear` → `Event::ClearFilters`
//! - `sort <column>` → `Event::SortBy`
//! - `page <n>`, `next`, `prev`, `pagesize <n|all>` → paging events
//! - `toggle <column>` → `Event::ToggleColumn`
//! - `export` → `Event::ExportCsv`
//!
//! In flashcard mode: `flip`, `next`, `prev`, `shuffle`, `reset`.
//!
//! In quiz mode a bare line is the answer (`Event::QuizSubmit`); an empty
//! line advances past an answered question, mirroring a single
//! answer-then-continue key. `shuffle` and `restart` control the session.

#![allow(clippy::multiple_crate_versions)]

use std::io::BufRead;

use quizbank::app::modes::Mode;
use quizbank::deck::QuizPhase;
use quizbank::domain::ColumnKey;
use quizbank::query::filter::{facet_options, Facet};
use quizbank::query::page::PageSize;
use quizbank::ui::theme::Theme;
use quizbank::{handle_event, initialize, observability, storage, ui, Action, AppState, Config, Event};

fn main() {
    let config = Config::from_args(std::env::args().skip(1));
    observability::init_tracing(&config);

    let records = match storage::load_dataset(std::path::Path::new(&config.data_path)) {
        Ok(records) => records,
        Err(e) => {
            eprintln!(
                "{}error:{} failed to load dataset from {}: {e}",
                Theme::bold(),
                Theme::reset(),
                config.data_path,
            );
            std::process::exit(1);
        }
    };

    let mut state = initialize(&config, records);
    ui::render(&state);

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };

        if let Some(facet) = parse_options_command(&state, &line) {
            print_facet_options(&state, facet);
            continue;
        }

        let Some(event) = parse_command(&state, &line) else {
            print_hint(&state);
            continue;
        };

        match handle_event(&mut state, &event) {
            Ok((should_render, actions)) => {
                let mut quit = false;
                for action in actions {
                    quit |= execute_action(&state, &action);
                }
                if quit {
                    break;
                }
                if should_render {
                    ui::render(&state);
                }
            }
            Err(e) => {
                eprintln!("{}error:{} {e}", Theme::bold(), Theme::reset());
            }
        }
    }
}

/// Translates one command line into an event, per the current mode.
///
/// Returns `None` for unrecognized commands so the shell can print a hint
/// instead of mutating state.
fn parse_command(state: &AppState, line: &str) -> Option<Event> {
    let trimmed = line.trim();
    let (command, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((c, r)) => (c, r.trim()),
        None => (trimmed, ""),
    };

    // Mode switching, help, and quitting work everywhere.
    match command {
        "quit" | "q" | "exit" => return Some(Event::Quit),
        "mode" => return Mode::parse(rest).map(Event::SwitchMode),
        // Falls through to the hint printer.
        "help" => return None,
        _ => {}
    }

    match state.mode {
        Mode::Table => parse_table_command(command, rest),
        Mode::Flashcard => parse_flashcard_command(command),
        Mode::Quiz => parse_quiz_command(state, command, rest, trimmed),
        Mode::Stats => None,
    }
}

fn parse_table_command(command: &str, rest: &str) -> Option<Event> {
    match command {
        // Bare `search` clears the text query.
        "search" => Some(Event::SearchChanged(rest.to_string())),
        "filter" => {
            let (facet_name, value) = match rest.split_once(char::is_whitespace) {
                Some((f, v)) => (f, v.trim()),
                None => (rest, ""),
            };
            let facet = Facet::parse(facet_name)?;
            let value = if value.is_empty() {
                None
            } else {
                Some(value.to_string())
            };
            Some(Event::FacetChanged(facet, value))
        }
        "clear" => Some(Event::ClearFilters),
        "sort" => ColumnKey::parse(rest).map(Event::SortBy),
        "toggle" => ColumnKey::parse(rest).map(Event::ToggleColumn),
        "page" => rest.parse::<usize>().ok().map(Event::GoToPage),
        "next" => Some(Event::NextPage),
        "prev" => Some(Event::PrevPage),
        "pagesize" => PageSize::parse(rest).map(Event::PageSizeChanged),
        "export" => Some(Event::ExportCsv),
        _ => None,
    }
}

fn parse_flashcard_command(command: &str) -> Option<Event> {
    match command {
        "flip" | "" => Some(Event::FlashFlip),
        "next" => Some(Event::FlashNext),
        "prev" => Some(Event::FlashPrev),
        "shuffle" => Some(Event::FlashShuffle),
        "reset" => Some(Event::FlashReset),
        _ => None,
    }
}

fn parse_quiz_command(state: &AppState, command: &str, rest: &str, full: &str) -> Option<Event> {
    match command {
        "shuffle" if rest.is_empty() => Some(Event::QuizShuffle),
        "restart" if rest.is_empty() => Some(Event::QuizRestart),
        "next" if rest.is_empty() => Some(Event::QuizNext),
        _ => {
            // A bare line: answer when waiting, advance when answered.
            if state.quiz.phase() == QuizPhase::Answered {
                Some(Event::QuizNext)
            } else if full.is_empty() {
                None
            } else {
                Some(Event::QuizSubmit(full.to_string()))
            }
        }
    }
}

/// Executes one side effect. Returns true when the shell should exit.
fn execute_action(state: &AppState, action: &Action) -> bool {
    match action {
        Action::WriteExport { filename, contents } => {
            if let Err(e) = std::fs::write(filename, contents) {
                eprintln!(
                    "{}error:{} failed to write {filename}: {e}",
                    Theme::bold(),
                    Theme::reset(),
                );
            }
            false
        }
        Action::Toast(message) => {
            println!(
                "{}{}{}{}",
                Theme::bold(),
                Theme::fg(&state.theme.colors.accent),
                message,
                Theme::reset(),
            );
            false
        }
        Action::Quit => true,
    }
}

/// Recognizes `options <facet>` in table mode.
///
/// Answered by the shell rather than the event handler because it only
/// reads state.
fn parse_options_command(state: &AppState, line: &str) -> Option<Facet> {
    if state.mode != Mode::Table {
        return None;
    }
    let rest = line.trim().strip_prefix("options")?;
    Facet::parse(rest.trim())
}

/// Prints the distinct values available for a facet filter.
fn print_facet_options(state: &AppState, facet: Facet) {
    let options = facet_options(&state.records, facet.column());
    println!(
        "{}{}:{} {}",
        Theme::bold(),
        facet.name(),
        Theme::reset(),
        options.join(", "),
    );
}

/// Prints the mode's command hints after an unrecognized command.
fn print_hint(state: &AppState) {
    println!(
        "{}{}{}",
        Theme::dim(),
        state.compute_viewmodel().footer.commands,
        Theme::reset(),
    );
}
