//! Snapshot loading
//!
//! A snapshot is a `key -> text` map. Two on-disk forms are supported:
//!
//! - SQLite: a database holding exactly one user table with `fid` and
//!   `text_data` columns
//! - JSON: a flat object of string values

use crate::db::{open_read_only, quote_ident, user_tables};
use crate::errors::{from_rusqlite, io_error, serialization_error, Result};
use locdiff_core::diff::Snapshot;
use locdiff_core::errors::LocDiffError;
use locdiff_core::{log_op_end, log_op_error, log_op_start};
use rusqlite::types::ValueRef;
use std::path::Path;
use std::time::Instant;

/// Load a snapshot, choosing the format from the file extension.
///
/// `.json` (case-insensitive) is read as JSON, anything else as SQLite.
///
/// # Errors
///
/// See [`load_json_snapshot`] and [`load_sqlite_snapshot`].
pub fn load_snapshot(path: &Path) -> Result<Snapshot> {
    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));

    if is_json {
        load_json_snapshot(path)
    } else {
        load_sqlite_snapshot(path)
    }
}

/// Load a snapshot from a single-table SQLite database.
///
/// `fid` values are rendered as text whatever their storage class; rows with
/// a NULL `fid` are skipped. A NULL `text_data` becomes the empty string.
/// When a `fid` repeats, the last row read wins.
///
/// # Errors
///
/// - `Persistence`: the file cannot be opened or queried
/// - `NotFound`: the database has no user table
/// - `AmbiguousSelection`: the database has more than one user table
pub fn load_sqlite_snapshot(path: &Path) -> Result<Snapshot> {
    let started = Instant::now();
    log_op_start!("load_sqlite_snapshot", path = %path.display());

    let result = read_sqlite(path);
    let duration_ms = started.elapsed().as_millis() as u64;
    match &result {
        Ok(snapshot) => log_op_end!(
            "load_sqlite_snapshot",
            duration_ms = duration_ms,
            key_count = snapshot.len()
        ),
        Err(e) => log_op_error!("load_sqlite_snapshot", e.clone(), duration_ms = duration_ms),
    }
    result
}

fn read_sqlite(path: &Path) -> Result<Snapshot> {
    let conn = open_read_only(path)?;
    let table = single_table(&conn, path)?;

    let sql = format!("SELECT fid, text_data FROM {}", quote_ident(&table));
    let mut stmt = conn.prepare(&sql).map_err(from_rusqlite)?;
    let mut rows = stmt.query([]).map_err(from_rusqlite)?;

    let mut snapshot = Snapshot::new();
    let mut skipped = 0usize;
    while let Some(row) = rows.next().map_err(from_rusqlite)? {
        let fid = row.get_ref(0).map_err(from_rusqlite)?;
        let Some(key) = value_text(fid) else {
            skipped += 1;
            continue;
        };
        let text = row.get_ref(1).map_err(from_rusqlite)?;
        snapshot.insert(key, value_text(text).unwrap_or_default());
    }

    if skipped > 0 {
        tracing::warn!(
            path = %path.display(),
            table = %table,
            skipped,
            "skipped rows with NULL fid"
        );
    }
    Ok(snapshot)
}

fn single_table(conn: &rusqlite::Connection, path: &Path) -> Result<String> {
    let mut tables = user_tables(conn)?;
    match tables.len() {
        0 => Err(LocDiffError::SnapshotTableMissing {
            path: path.display().to_string(),
        }
        .into()),
        1 => Ok(tables.remove(0)),
        _ => Err(LocDiffError::SnapshotTableAmbiguous {
            path: path.display().to_string(),
            tables,
        }
        .into()),
    }
}

/// Text form of a SQLite value; `None` for NULL.
fn value_text(value: ValueRef<'_>) -> Option<String> {
    match value {
        ValueRef::Null => None,
        ValueRef::Integer(i) => Some(i.to_string()),
        ValueRef::Real(f) => Some(f.to_string()),
        ValueRef::Text(bytes) | ValueRef::Blob(bytes) => {
            Some(String::from_utf8_lossy(bytes).into_owned())
        }
    }
}

/// Load a snapshot from a JSON object of `key -> text`.
///
/// `null` values become the empty string.
///
/// # Errors
///
/// - `Io`: the file cannot be read
/// - `Serialization`: the file is not valid JSON
/// - `InvalidInput`: the top level is not an object, or a value is neither
///   a string nor `null`
pub fn load_json_snapshot(path: &Path) -> Result<Snapshot> {
    let started = Instant::now();
    log_op_start!("load_json_snapshot", path = %path.display());

    let result = read_json(path);
    let duration_ms = started.elapsed().as_millis() as u64;
    match &result {
        Ok(snapshot) => log_op_end!(
            "load_json_snapshot",
            duration_ms = duration_ms,
            key_count = snapshot.len()
        ),
        Err(e) => log_op_error!("load_json_snapshot", e.clone(), duration_ms = duration_ms),
    }
    result
}

fn read_json(path: &Path) -> Result<Snapshot> {
    let content = std::fs::read_to_string(path).map_err(|e| io_error("read_snapshot", e))?;
    let value: serde_json::Value =
        serde_json::from_str(&content).map_err(|e| serialization_error("parse_snapshot", e))?;

    let invalid = |reason: String| LocDiffError::InvalidSnapshot {
        path: path.display().to_string(),
        reason,
    };

    let serde_json::Value::Object(map) = value else {
        return Err(invalid("top level must be an object".to_string()).into());
    };

    let mut snapshot = Snapshot::new();
    for (key, value) in map {
        let text = match value {
            serde_json::Value::String(s) => s,
            serde_json::Value::Null => String::new(),
            other => {
                return Err(invalid(format!(
                    "value for key {} must be a string, found {}",
                    key, other
                ))
                .into())
            }
        };
        snapshot.insert(key, text);
    }
    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_text_storage_classes() {
        assert_eq!(value_text(ValueRef::Null), None);
        assert_eq!(value_text(ValueRef::Integer(42)), Some("42".to_string()));
        assert_eq!(value_text(ValueRef::Text(b"abc")), Some("abc".to_string()));
        assert_eq!(value_text(ValueRef::Real(1.5)), Some("1.5".to_string()));
    }
}
