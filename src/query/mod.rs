//! View derivation: filtering, sorting, pagination, and aggregation.
//!
//! These are the pure data-derivation functions behind the interactive
//! views. Each is a deterministic function of explicit inputs, with no
//! hidden state, which keeps them unit-testable without any rendering
//! environment.
//!
//! # Pipeline
//!
//! ```text
//! store → apply_filters → sort_view → paginate (table)
//!                                   → deck sessions (flashcard/quiz)
//!                                   → compute_stats (stats)
//! ```
//!
//! # Modules
//!
//! - [`filter`]: Facet and free-text filtering, facet option discovery
//! - [`sort`]: Type-aware stable sorting with direction toggling
//! - [`page`]: Page slicing and page-control strip computation
//! - [`stats`]: Count-by aggregations for the stats view

pub mod filter;
pub mod page;
pub mod sort;
pub mod stats;

pub use filter::{apply_filters, facet_options, Facet, FilterCriteria};
pub use page::{page_controls, paginate, PageControl, PageSize, PageSlice};
pub use sort::{sort_view, SortCriteria, SortDirection};
pub use stats::{compute_stats, Stats};
