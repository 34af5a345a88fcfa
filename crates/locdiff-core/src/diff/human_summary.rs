//! Human-readable summary renderer for diff reports.

use crate::diff::model::{ChangeType, DiffReport};

/// Keys listed per change type before the list is truncated.
const MAX_LISTED_KEYS: usize = 20;

/// Render a human-readable Markdown summary of a [`DiffReport`].
///
/// Intended for console output after an export. It is informational only
/// and does not affect the structured rows.
pub fn render_human_summary(report: &DiffReport) -> String {
    let mut out = String::new();

    out.push_str("## Snapshot Diff\n\n");
    out.push_str(&format!(
        "**Run**: `{}`  \n**Delimiter**: `{}`  \n**Split limit**: {}\n\n",
        report.run_id, report.delimiter, report.split_limit
    ));

    // Identity
    out.push_str("### Identity\n\n");
    out.push_str(&format!(
        "| | Digest | Keys |\n\
         |---|---|---|\n\
         | Old | `{}` | {} |\n\
         | New | `{}` | {} |\n\n",
        short(&report.identity.old_digest),
        report.identity.old_key_count,
        short(&report.identity.new_digest),
        report.identity.new_key_count,
    ));

    if report.rows.is_empty() {
        out.push_str("_No changes detected._\n");
        return out;
    }

    let counts = &report.counts;
    out.push_str("### Totals\n\n");
    out.push_str(&format!(
        "- **Added**: {}\n- **Modified**: {}\n- **Deleted**: {}\n- **Rows** (including split parts): {}\n\n",
        counts.added_keys, counts.modified_keys, counts.deleted_keys, counts.rows
    ));

    for change_type in [ChangeType::Added, ChangeType::Modified, ChangeType::Deleted] {
        let mut keys: Vec<&str> = report
            .rows
            .iter()
            .filter(|r| r.change_type == change_type)
            .map(|r| r.key.as_str())
            .collect();
        keys.dedup();
        if keys.is_empty() {
            continue;
        }

        out.push_str(&format!("### {}\n\n", change_type));
        for key in keys.iter().take(MAX_LISTED_KEYS) {
            out.push_str(&format!("- `{}`\n", key));
        }
        if keys.len() > MAX_LISTED_KEYS {
            out.push_str(&format!("- … and {} more\n", keys.len() - MAX_LISTED_KEYS));
        }
        out.push('\n');
    }

    out
}

/// Return the first 12 characters of a digest for display purposes.
fn short(digest: &str) -> &str {
    let end = digest.len().min(12);
    &digest[..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CompareConfig;
    use crate::diff::engine::{build_report, Snapshot};

    fn snapshot(entries: &[(&str, &str)]) -> Snapshot {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_summary_no_changes() {
        let a = snapshot(&[("1", "same")]);
        let report = build_report(&a, &a, &CompareConfig::default()).unwrap();
        let s = render_human_summary(&report);
        assert!(s.contains("_No changes detected._"));
    }

    #[test]
    fn test_summary_lists_keys_once_per_type() {
        let old = snapshot(&[("gone", "x"), ("edit", "a")]);
        let new = snapshot(&[("edit", "b"), ("fresh", "abcdefghij")]);
        let config = CompareConfig::new("|||", 5).unwrap();
        let report = build_report(&old, &new, &config).unwrap();
        let s = render_human_summary(&report);

        assert!(s.contains("- **Added**: 1"));
        assert!(s.contains("- **Modified**: 1"));
        assert!(s.contains("- **Deleted**: 1"));
        assert!(s.contains("- **Rows** (including split parts): 4"));
        assert_eq!(s.matches("- `fresh`").count(), 1);
    }

    #[test]
    fn test_short_digest() {
        assert_eq!(short("0123456789abcdef"), "0123456789ab");
        assert_eq!(short("ab"), "ab");
    }
}
