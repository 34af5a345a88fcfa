//! Snapshot comparison engine.
//!
//! The core entry point is [`compare`], which classifies every key of two
//! `key -> text` snapshots and produces sorted [`DiffRow`]s. [`build_report`]
//! wraps the rows with run identity and totals.

use crate::config::CompareConfig;
use crate::diff::model::{ChangeCounts, ChangeType, DiffIdentity, DiffReport, DiffRow};
use crate::errors::{ExError, ExErrorKind, Result};
use crate::text::chunk::chunk_text;
use crate::text::range_diff::Side;
use crate::text::rich_text::{render_side, CellText};
use crate::text::segment_delta::changes_summary;
use crate::{log_op_end, log_op_start};
use locdiff_core_types::RunId;
use rayon::prelude::*;
use sha2::{Digest as _, Sha256};
use std::collections::{BTreeMap, BTreeSet};
use std::time::Instant;

/// A snapshot: record key to text.
pub type Snapshot = BTreeMap<String, String>;

/// True when `text` is empty or whitespace only.
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Classify a key from its presence and text on each side.
///
/// Returns `None` when no row should be emitted: unchanged text, blank text
/// on a relevant side, or absence from both snapshots.
pub fn classify(old: Option<&str>, new: Option<&str>) -> Option<ChangeType> {
    match (old, new) {
        (None, Some(n)) if !is_blank(n) => Some(ChangeType::Added),
        (Some(o), None) if !is_blank(o) => Some(ChangeType::Deleted),
        (Some(o), Some(n)) if !is_blank(o) && !is_blank(n) && o != n => {
            Some(ChangeType::Modified)
        }
        _ => None,
    }
}

/// Produce the rows for a single key.
///
/// Independent of every other key; an empty result means the key is skipped.
pub fn diff_key(
    key: &str,
    old: Option<&str>,
    new: Option<&str>,
    config: &CompareConfig,
) -> Vec<DiffRow> {
    let Some(change_type) = classify(old, new) else {
        return Vec::new();
    };
    let old = old.unwrap_or("");
    let new = new.unwrap_or("");
    let delimiter = config.delimiter();

    let (old_text, new_text, changes, chunked) = match change_type {
        ChangeType::Added => (
            CellText::default(),
            CellText::from(new),
            new.to_string(),
            new,
        ),
        ChangeType::Deleted => (
            CellText::from(old),
            CellText::default(),
            String::new(),
            old,
        ),
        ChangeType::Modified => (
            render_side(old, new, Side::Old),
            render_side(old, new, Side::New),
            changes_summary(old, new, ChangeType::Modified, delimiter),
            new,
        ),
    };

    let plan = chunk_text(chunked, delimiter, config.split_limit());
    plan.split_parts()
        .into_iter()
        .map(|split_part| DiffRow {
            key: key.to_string(),
            split_part,
            change_type,
            old_text: old_text.clone(),
            new_text: new_text.clone(),
            changes_summary: changes.clone(),
        })
        .collect()
}

/// Compare two snapshots and return rows sorted by change type, key and
/// `split_part`.
///
/// Keys are processed in parallel on the rayon pool; the final sort makes the
/// output independent of scheduling. Neither snapshot is modified.
pub fn compare(old: &Snapshot, new: &Snapshot, config: &CompareConfig) -> Vec<DiffRow> {
    let started = Instant::now();
    log_op_start!("compare", old_len = old.len(), new_len = new.len());

    let keys: Vec<&String> = old
        .keys()
        .chain(new.keys())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let mut rows: Vec<DiffRow> = keys
        .par_iter()
        .flat_map_iter(|key| {
            diff_key(
                key,
                old.get(*key).map(String::as_str),
                new.get(*key).map(String::as_str),
                config,
            )
        })
        .collect();

    rows.sort_by(|a, b| {
        a.change_type
            .cmp(&b.change_type)
            .then_with(|| a.key.cmp(&b.key))
            .then_with(|| a.split_part.cmp(&b.split_part))
    });

    log_op_end!(
        "compare",
        duration_ms = started.elapsed().as_millis() as u64,
        row_count = rows.len()
    );
    rows
}

/// Run [`compare`] and wrap the rows into a [`DiffReport`].
///
/// # Errors
///
/// - `DeterminismViolation`: the report fails its JSON round-trip check
///   (should never occur in correct builds)
pub fn build_report(old: &Snapshot, new: &Snapshot, config: &CompareConfig) -> Result<DiffReport> {
    let run_id = RunId::new();
    let span = tracing::info_span!("compare_run", run_id = %run_id);
    let _guard = span.enter();

    let rows = compare(old, new, config);
    let report = DiffReport {
        report_schema_version: 1,
        run_id,
        generated_at: chrono::Utc::now(),
        delimiter: config.delimiter().to_string(),
        split_limit: config.split_limit(),
        identity: DiffIdentity {
            old_digest: snapshot_digest(old),
            new_digest: snapshot_digest(new),
            old_key_count: old.len(),
            new_key_count: new.len(),
        },
        counts: count_changes(&rows),
        rows,
    };

    // Determinism guard: round-trip through JSON must produce an equal struct
    let serialized = serde_json::to_string(&report).map_err(|e| {
        ExError::new(ExErrorKind::DeterminismViolation)
            .with_op("build_report")
            .with_message(format!("failed to serialize report: {}", e))
    })?;
    let reparsed: DiffReport = serde_json::from_str(&serialized).map_err(|e| {
        ExError::new(ExErrorKind::DeterminismViolation)
            .with_op("build_report")
            .with_message(format!("failed to re-parse report: {}", e))
    })?;
    if reparsed != report {
        return Err(ExError::new(ExErrorKind::DeterminismViolation)
            .with_op("build_report")
            .with_message("report is not deterministic: round-trip produced different struct"));
    }

    Ok(report)
}

/// Totals per change type; keys are counted once regardless of `split_part`.
pub fn count_changes(rows: &[DiffRow]) -> ChangeCounts {
    let mut counts = ChangeCounts {
        rows: rows.len(),
        ..ChangeCounts::default()
    };
    let distinct: BTreeSet<(ChangeType, &str)> = rows
        .iter()
        .map(|r| (r.change_type, r.key.as_str()))
        .collect();
    for (change_type, _) in distinct {
        match change_type {
            ChangeType::Added => counts.added_keys += 1,
            ChangeType::Modified => counts.modified_keys += 1,
            ChangeType::Deleted => counts.deleted_keys += 1,
        }
    }
    counts
}

/// SHA-256 over the snapshot's entries in key order, each as `key\0text\0`.
pub fn snapshot_digest(snapshot: &Snapshot) -> String {
    let mut hasher = Sha256::new();
    for (key, text) in snapshot {
        hasher.update(key.as_bytes());
        hasher.update([0u8]);
        hasher.update(text.as_bytes());
        hasher.update([0u8]);
    }
    hex::encode(hasher.finalize())
}
