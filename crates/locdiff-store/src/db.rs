//! Database connection management
//!
//! Snapshots are only ever read, so connections are opened read-only and a
//! missing file is reported instead of silently created.

use crate::errors::{from_rusqlite, Result};
use rusqlite::{Connection, OpenFlags};
use std::path::Path;

/// Open an existing SQLite database read-only
pub fn open_read_only<P: AsRef<Path>>(path: P) -> Result<Connection> {
    Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
    .map_err(from_rusqlite)
}

/// Names of all user tables, sorted; SQLite's internal `sqlite_%` tables are excluded
pub fn user_tables(conn: &Connection) -> Result<Vec<String>> {
    let mut stmt = conn
        .prepare(
            "SELECT name FROM sqlite_master \
             WHERE type = 'table' AND name NOT LIKE 'sqlite_%' \
             ORDER BY name",
        )
        .map_err(from_rusqlite)?;

    let names = stmt
        .query_map([], |row| row.get::<_, String>(0))
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(from_rusqlite)?;

    Ok(names)
}

/// Quote an identifier for interpolation into SQL
pub fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
