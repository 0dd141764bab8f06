#![allow(clippy::multiple_crate_versions)]

//! Quizbank: an interactive terminal viewer for a quiz-question bank.
//!
//! Quizbank loads a static JSON dataset of quiz questions once at startup
//! and provides:
//! - Free-text search plus exact-match facet filters over the bank
//! - A sortable, paginated table view with CSV export
//! - Flashcard practice with flip, wrap-around navigation, and shuffle
//! - A graded quiz with running score and session controls
//! - Distribution statistics for the filtered view
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Terminal Shell (main.rs)                           │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │  ← Business logic
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Query Layer   │   │ Deck Layer    │
//! │ (ui/)         │   │ (query/)      │   │ (deck/)       │
//! │ - Rendering   │   │ - Filtering   │   │ - Flashcards  │
//! │ - Theming     │   │ - Sorting     │   │ - Quiz        │
//! │ - Components  │   │ - Paging/Stats│   │   grading     │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain & Storage Layers                            │
//! │  - Record model and columns (domain/)               │
//! │  - Error types (domain/error)                       │
//! │  - Dataset loading (storage/), CSV export (export/) │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - Tracing subscriber on stderr                     │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`domain`]: Core domain types (Record, columns, errors)
//! - [`query`]: View derivation (filter, sort, paginate, stats)
//! - [`deck`]: Flashcard and quiz practice sessions
//! - [`export`]: CSV serialization of the current view
//! - [`storage`]: One-shot JSON dataset loading
//! - [`ui`]: Terminal rendering with theme support
//! - [`observability`]: Tracing subscriber setup
//!
//! # Initialization Flow
//!
//! 1. Parse command-line arguments into a [`Config`]
//! 2. Initialize tracing
//! 3. Load the dataset (failure is terminal)
//! 4. Create `AppState` with the resolved theme and run the first
//!    derivation pass
//! 5. Loop: read a command, translate it to an [`Event`], handle it,
//!    execute the returned [`Action`]s, re-render when state changed
//!
//! # Example
//!
//! ```no_run
//! use quizbank::{handle_event, initialize, storage, Config, Event};
//!
//! let config = Config::default();
//! let records = storage::load_dataset(std::path::Path::new(&config.data_path))?;
//! let mut state = initialize(&config, records);
//!
//! let (should_render, actions) =
//!     handle_event(&mut state, &Event::SearchChanged("paris".to_string()))?;
//! # Ok::<(), quizbank::domain::error::QuizbankError>(())
//! ```

pub mod app;
pub mod deck;
pub mod domain;
pub mod export;
pub mod observability;
pub mod query;
pub mod storage;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, Mode};
pub use domain::error::{QuizbankError, Result};
pub use ui::Theme;

use crate::query::page::PageSize;

/// Application configuration.
///
/// Parsed from command-line arguments; every field has a usable default so
/// the binary runs with no arguments at all.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the JSON dataset.
    ///
    /// Default: `db.json` in the working directory.
    pub data_path: String,

    /// Built-in theme name to use.
    ///
    /// Options: `default-dark`, `default-light`. Ignored if `theme_file`
    /// is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    ///
    /// Takes precedence over `theme_name`. See [`ui::theme`] for format.
    pub theme_file: Option<String>,

    /// Tracing level filter.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. `RUST_LOG`
    /// overrides this. Default: `warn`.
    pub trace_level: Option<String>,

    /// Initial rows-per-page for the table view.
    pub page_size: PageSize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: "db.json".to_string(),
            theme_name: None,
            theme_file: None,
            trace_level: None,
            page_size: PageSize::default(),
        }
    }
}

impl Config {
    /// Parses configuration from command-line arguments.
    ///
    /// Recognized flags, each taking one value:
    /// `--data`, `--theme`, `--theme-file`, `--trace-level`, `--page-size`.
    /// Unknown flags and malformed values fall back to defaults rather
    /// than failing; startup diagnostics go through tracing once it is up.
    #[must_use]
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut config = Self::default();
        let args: Vec<String> = args.into_iter().map(Into::into).collect();

        let mut i = 0;
        while i < args.len() {
            let value = args.get(i + 1).cloned();
            match (args[i].as_str(), value) {
                ("--data", Some(v)) => config.data_path = v,
                ("--theme", Some(v)) => config.theme_name = Some(v),
                ("--theme-file", Some(v)) => config.theme_file = Some(v),
                ("--trace-level", Some(v)) => config.trace_level = Some(v),
                ("--page-size", Some(v)) => {
                    if let Some(size) = PageSize::parse(&v) {
                        config.page_size = size;
                    }
                }
                _ => {
                    i += 1;
                    continue;
                }
            }
            i += 2;
        }

        config
    }
}

/// Initializes the application with configuration and loaded records.
///
/// Resolves the theme (custom file, then built-in name, then default; a
/// failed load falls back with a debug event rather than failing startup),
/// creates the `AppState`, and runs the first derivation pass so the view
/// and decks are populated before the first render.
#[must_use]
pub fn initialize(config: &Config, records: Vec<domain::Record>) -> AppState {
    tracing::debug!(record_count = records.len(), "initializing quizbank");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::debug!(theme_name = %theme_name, "failed to load theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            Theme::from_file(theme_file).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    let mut state = AppState::new(records, theme);
    state.page_size = config.page_size;
    state.refresh_view();
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_args_parses_recognized_flags() {
        let config = Config::from_args([
            "--data",
            "bank.json",
            "--theme",
            "default-light",
            "--page-size",
            "25",
        ]);
        assert_eq!(config.data_path, "bank.json");
        assert_eq!(config.theme_name.as_deref(), Some("default-light"));
        assert_eq!(config.page_size, PageSize::Limited(25));
    }

    #[test]
    fn from_args_ignores_unknown_flags_and_bad_values() {
        let config = Config::from_args(["--verbose", "--page-size", "lots"]);
        assert_eq!(config.data_path, "db.json");
        assert_eq!(config.page_size, PageSize::default());
    }

    #[test]
    fn from_args_parses_all_as_page_size() {
        let config = Config::from_args(["--page-size", "all"]);
        assert_eq!(config.page_size, PageSize::All);
    }

    #[test]
    fn initialize_falls_back_to_default_theme() {
        let config = Config {
            theme_name: Some("no-such-theme".to_string()),
            ..Config::default()
        };
        let state = initialize(&config, vec![]);
        assert_eq!(state.theme.name, "default-dark");
    }

    #[test]
    fn initialize_runs_the_first_derivation_pass() {
        let records = vec![domain::Record {
            question: "Q".to_string(),
            answer: "A".to_string(),
            ..domain::Record::default()
        }];
        let state = initialize(&Config::default(), records);
        assert_eq!(state.view.len(), 1);
        assert_eq!(state.flashcard.len(), 1);
    }
}
