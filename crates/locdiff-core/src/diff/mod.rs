//! Snapshot diff engine.
//!
//! Compares two `key -> text` snapshots and produces structured,
//! deterministic diff rows suitable for tabular export and human review.
//!
//! ## Entry point
//!
//! ```
//! use locdiff_core::config::CompareConfig;
//! use locdiff_core::diff::engine::{compare, Snapshot};
//!
//! let old = Snapshot::new();
//! let mut new = Snapshot::new();
//! new.insert("1".to_string(), "hello".to_string());
//!
//! let rows = compare(&old, &new, &CompareConfig::default());
//! assert_eq!(rows.len(), 1);
//! ```
//!
//! ## Guarantees
//!
//! - **Determinism**: rows are sorted by change type (Added, Modified,
//!   Deleted), key, then `split_part`, whatever order the worker pool
//!   finished in.
//! - **Blank suppression**: a key whose text is blank on a relevant side
//!   produces no row.
//! - **Lossless cells**: rendered runs always concatenate to the source text.

pub mod engine;
pub mod human_summary;
pub mod model;

pub use engine::{build_report, compare, Snapshot};
pub use human_summary::render_human_summary;
pub use model::{ChangeType, DiffReport, DiffRow};
