//! Tracing setup.
//!
//! State transitions throughout the crate are instrumented with `tracing`
//! spans and events. This module wires them to a formatted subscriber on
//! stderr, filtered by the configured level (or `RUST_LOG` when set), so
//! diagnostics never interleave with the rendered UI on stdout.
//!
//! # Modules
//!
//! - [`init`]: Subscriber initialization

mod init;

pub use init::init_tracing;
