//! Diff output types.
//!
//! All types implement `Debug, Clone, Serialize, Deserialize, PartialEq`.
//! Collections are sorted `Vec`s for deterministic serialization.

use crate::text::rich_text::CellText;
use chrono::{DateTime, Utc};
use locdiff_core_types::RunId;
use serde::{Deserialize, Serialize};

/// Classification of a changed record.
///
/// Variant order is the output sort priority: Added, then Modified, then
/// Deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ChangeType {
    /// Key present only in the new snapshot
    Added,
    /// Key present in both snapshots with different text
    Modified,
    /// Key present only in the old snapshot
    Deleted,
}

impl ChangeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeType::Added => "Added",
            ChangeType::Modified => "Modified",
            ChangeType::Deleted => "Deleted",
        }
    }
}

impl std::fmt::Display for ChangeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One output row of a comparison.
///
/// A record whose chunk plan has `N > 1` chunks produces `N` rows with
/// identical content and `split_part` values `1..=N`; otherwise one row with
/// `split_part = 0`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiffRow {
    pub key: String,
    pub split_part: u32,
    pub change_type: ChangeType,
    pub old_text: CellText,
    pub new_text: CellText,
    pub changes_summary: String,
}

/// Digest identity of both input snapshots.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiffIdentity {
    /// SHA-256 over the old snapshot's sorted entries
    pub old_digest: String,
    /// SHA-256 over the new snapshot's sorted entries
    pub new_digest: String,
    /// Number of keys in the old snapshot
    pub old_key_count: usize,
    /// Number of keys in the new snapshot
    pub new_key_count: usize,
}

/// Per-classification totals.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ChangeCounts {
    pub added_keys: usize,
    pub modified_keys: usize,
    pub deleted_keys: usize,
    /// Rows emitted, including extra `split_part` rows
    pub rows: usize,
}

/// A complete comparison result ready for export.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiffReport {
    /// Schema version of this report structure (always 1)
    pub report_schema_version: u32,
    pub run_id: RunId,
    pub generated_at: DateTime<Utc>,
    pub delimiter: String,
    pub split_limit: i64,
    pub identity: DiffIdentity,
    pub counts: ChangeCounts,
    pub rows: Vec<DiffRow>,
}
