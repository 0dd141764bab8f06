//! Terminal UI rendering.
//!
//! Rendering is a pure function of application state: each pass computes an
//! immutable [`viewmodel::UIViewModel`] from `AppState`, then prints it
//! through the mode's component. No component reads application state
//! directly.
//!
//! # Modules
//!
//! - [`theme`]: Color schemes and ANSI escape generation
//! - [`viewmodel`]: Display-ready view model types
//! - [`helpers`]: Match-range search and highlight weaving
//! - [`components`]: Per-section renderers (header, table, decks, stats)
//! - [`renderer`]: Top-level render entry point

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
