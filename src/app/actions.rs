//! Side effect commands emitted by the event handler.
//!
//! The handler never performs I/O itself. It returns actions describing the
//! side effects an event requires, and the shell in `main` executes them in
//! order. This keeps every state transition testable without touching the
//! filesystem or the terminal.

/// A side effect to execute after an event has been handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Write an exported CSV document to disk.
    WriteExport {
        /// Suggested file name, timestamped to avoid collisions.
        filename: String,
        /// Complete CSV document.
        contents: String,
    },

    /// Show a transient confirmation message.
    Toast(String),

    /// Exit the application.
    Quit,
}
