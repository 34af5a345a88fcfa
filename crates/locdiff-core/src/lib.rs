//! LocDiff Core - snapshot diff engine for delimiter-structured localization text
//!
//! This crate provides the pure comparison kernel, including:
//! - Delimiter tokenizing and length-bounded chunk packing
//! - Segment-level added/removed detection
//! - Bracket-scoped character diffs rendered as highlighted text runs
//! - Per-key classification into Added/Modified/Deleted rows
//! - Structured error and logging facilities shared by the other crates

pub mod config;
pub mod diff;
pub mod errors;
pub mod logging_facility;
pub mod text;

pub use locdiff_core_types as core_types;

// Re-export commonly used types
pub use config::CompareConfig;
pub use diff::{build_report, compare, ChangeType, DiffReport, DiffRow, Snapshot};
pub use errors::{ExError, ExErrorKind, LocDiffError, Result};
pub use text::CellText;
