//! Dataset loading.
//!
//! The question bank is read once at startup from a static JSON file and
//! treated as read-only for the rest of the session. There is no schema
//! negotiation, no partial load, and no retry: a failed load is terminal.
//!
//! # Modules
//!
//! - [`dataset`]: One-shot JSON dataset loading

pub mod dataset;

pub use dataset::load_dataset;
