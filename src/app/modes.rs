//! View mode state machine types.

/// Top-level view mode.
///
/// Determines which body component renders and which commands the shell
/// accepts. Switching away from a practice mode does not reset its session;
/// only filter changes do.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Paginated, sortable question table.
    #[default]
    Table,
    /// Flip-through flashcard practice.
    Flashcard,
    /// Graded quiz practice.
    Quiz,
    /// Distribution statistics for the current view.
    Stats,
}

impl Mode {
    /// All modes, in display order.
    pub const ALL: [Self; 4] = [Self::Table, Self::Flashcard, Self::Quiz, Self::Stats];

    /// Display name for the header.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Table => "Table",
            Self::Flashcard => "Flashcards",
            Self::Quiz => "Quiz",
            Self::Stats => "Stats",
        }
    }

    /// Parses a mode name, case-insensitively.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "table" => Some(Self::Table),
            "flashcards" | "flashcard" | "cards" => Some(Self::Flashcard),
            "quiz" => Some(Self::Quiz),
            "stats" => Some(Self::Stats),
            _ => None,
        }
    }
}
