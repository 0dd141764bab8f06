//! Card-deck practice sessions.
//!
//! Two independent sessions consume the current view as a deck of cards:
//! flashcards (flip-to-reveal with wrapping navigation) and the quiz
//! (typed answers with grading and a running score). Each session owns a
//! private copy of the view's records, so shuffling a deck never mutates
//! the view or the store; the copies are re-derived whenever filter
//! criteria change the view.
//!
//! # Modules
//!
//! - [`flashcard`]: Flip-card session
//! - [`quiz`]: Graded quiz session

pub mod flashcard;
pub mod quiz;

pub use flashcard::FlashcardSession;
pub use quiz::{Grade, QuizPhase, QuizSession};
