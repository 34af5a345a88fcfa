//! LocDiff Store - snapshot loading and report export
//!
//! Provides:
//! - SQLite snapshot loading (single table of `fid, text_data`)
//! - JSON snapshot loading (flat `key -> text` object)
//! - Atomic JSON export of diff reports

pub mod db;
pub mod errors;
pub mod export;
pub mod snapshot;

// Re-export key types
pub use errors::Result;
pub use export::{suggested_output_path, write_report_json};
pub use snapshot::{load_json_snapshot, load_snapshot, load_sqlite_snapshot};
