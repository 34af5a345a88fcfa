//! Report export
//!
//! Reports are written as pretty-printed JSON through a temp file and a
//! rename, so a reader never observes a partially written report.

use crate::errors::{io_error, serialization_error, Result};
use locdiff_core::diff::DiffReport;
use locdiff_core::{log_op_end, log_op_start};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Write `report` to `path` as pretty JSON, creating parent directories.
///
/// # Errors
///
/// - `Serialization`: the report cannot be encoded
/// - `Io`: the directory, temp file or rename fails
pub fn write_report_json(path: &Path, report: &DiffReport) -> Result<()> {
    let started = Instant::now();
    log_op_start!("write_report_json", path = %path.display(), row_count = report.rows.len());

    let mut content = serde_json::to_vec_pretty(report)
        .map_err(|e| serialization_error("encode_report", e))?;
    content.push(b'\n');
    atomic_write(path, &content)?;

    log_op_end!(
        "write_report_json",
        duration_ms = started.elapsed().as_millis() as u64,
        bytes = content.len()
    );
    Ok(())
}

/// Default report location: `diff__<old_stem>__VS__<new_stem>.json` in the
/// directory of the old snapshot.
///
/// An empty stem falls back to `old` / `new`.
pub fn suggested_output_path(old: &Path, new: &Path) -> PathBuf {
    let old_stem = stem_or(old, "old");
    let new_stem = stem_or(new, "new");
    let file_name = format!("diff__{}__VS__{}.json", old_stem, new_stem);

    match old.parent() {
        Some(dir) => dir.join(file_name),
        None => PathBuf::from(file_name),
    }
}

fn stem_or(path: &Path, fallback: &str) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

/// Write bytes to a sibling temp file, then rename it over `target`
fn atomic_write(target: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| io_error("create_report_dir", e))?;
    }

    let temp_path = target.with_extension("json.tmp");
    fs::write(&temp_path, content).map_err(|e| io_error("write_report_temp", e))?;
    fs::rename(&temp_path, target).map_err(|e| io_error("rename_report_temp", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_suggested_path_uses_both_stems() {
        let path = suggested_output_path(Path::new("/data/v1.db"), Path::new("/other/v2.db"));
        assert_eq!(path, PathBuf::from("/data/diff__v1__VS__v2.json"));
    }

    #[test]
    fn test_suggested_path_relative_old() {
        let path = suggested_output_path(Path::new("old.json"), Path::new("new.json"));
        assert_eq!(path, PathBuf::from("diff__old__VS__new.json"));
    }

    #[test]
    fn test_suggested_path_fallback_stems() {
        let path = suggested_output_path(Path::new(""), Path::new(""));
        assert_eq!(path, PathBuf::from("diff__old__VS__new.json"));
    }

    #[test]
    fn test_atomic_write_creates_parent_and_leaves_no_temp() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("nested").join("report.json");

        atomic_write(&target, b"{}").unwrap();

        assert_eq!(fs::read(&target).unwrap(), b"{}");
        let leftovers = fs::read_dir(target.parent().unwrap())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
            .count();
        assert_eq!(leftovers, 0);
    }
}
