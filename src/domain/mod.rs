//! Domain layer for quizbank.
//!
//! This module contains the core domain types for the question bank,
//! independent of rendering or shell concerns: the question record itself,
//! the column configuration that drives table display and type-aware
//! sorting, and the crate-wide error type.
//!
//! # Organization
//!
//! - [`error`]: Error types and result alias
//! - [`record`]: Question record model
//! - [`columns`]: Column keys, semantic types, and default configuration

pub mod columns;
pub mod error;
pub mod record;

pub use columns::{default_columns, Column, ColumnKey, ColumnType};
pub use error::{QuizbankError, Result};
pub use record::Record;
