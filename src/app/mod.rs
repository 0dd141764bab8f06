//! Application layer coordinating state, events, and actions.
//!
//! Sits between the terminal shell (main.rs) and the domain/query/deck
//! layers, implementing the event-driven architecture that powers the
//! interactive UI.
//!
//! # Architecture
//!
//! Unidirectional data flow:
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: View mode state machine types
//! - [`state`]: Central application state container and view model computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::Mode;
pub use state::AppState;
