//! Segment-level set difference and the changes summary built from it.

use crate::diff::model::ChangeType;
use crate::text::segment::split_segments;
use std::collections::BTreeSet;

/// Summary used when a record changed but no whole segment was added,
/// i.e. the edit happened inside existing segments.
pub const CONTENT_CHANGED_SENTINEL: &str = "(content changed, see highlighted new_text)";

/// Segments present on one side only.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SegmentDelta<'a> {
    /// Segments of the new text missing from the old segment set, in new order
    pub added: Vec<&'a str>,
    /// Segments of the old text missing from the new segment set, in old order
    pub removed: Vec<&'a str>,
}

/// Compute added/removed segments between `old` and `new`.
///
/// Empty segments are ignored. Membership is tested against a set built from
/// the other side, while the reported sequences keep the original order and
/// multiplicity of the side they come from.
pub fn segment_delta<'a>(old: &'a str, new: &'a str, delimiter: &str) -> SegmentDelta<'a> {
    let old_parts = non_empty_segments(old, delimiter);
    let new_parts = non_empty_segments(new, delimiter);

    let old_set: BTreeSet<&str> = old_parts.iter().copied().collect();
    let new_set: BTreeSet<&str> = new_parts.iter().copied().collect();

    let added = new_parts
        .iter()
        .copied()
        .filter(|s| !old_set.contains(s))
        .collect();
    let removed = old_parts
        .iter()
        .copied()
        .filter(|s| !new_set.contains(s))
        .collect();

    SegmentDelta { added, removed }
}

/// Build the `changes_summary` cell for a record.
///
/// - `Deleted` → empty
/// - otherwise the delimiter-joined added segments; when no segment was added
///   but the texts differ, [`CONTENT_CHANGED_SENTINEL`]
pub fn changes_summary(old: &str, new: &str, change_type: ChangeType, delimiter: &str) -> String {
    if change_type == ChangeType::Deleted {
        return String::new();
    }

    let delta = segment_delta(old, new, delimiter);
    if !delta.added.is_empty() {
        return delta.added.join(delimiter);
    }
    if old != new {
        return CONTENT_CHANGED_SENTINEL.to_string();
    }
    String::new()
}

fn non_empty_segments<'a>(text: &'a str, delimiter: &str) -> Vec<&'a str> {
    split_segments(text, delimiter)
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicates_keep_multiplicity() {
        let delta = segment_delta("A", "B|||A|||B", "|||");
        assert_eq!(delta.added, vec!["B", "B"]);
        assert!(delta.removed.is_empty());
    }

    #[test]
    fn test_reordering_is_not_a_change() {
        let delta = segment_delta("A|||B", "B|||A", "|||");
        assert_eq!(delta, SegmentDelta::default());
    }

    #[test]
    fn test_summary_sentinel_for_inner_edit() {
        let summary = changes_summary("A|||B", "A|||B|||", ChangeType::Modified, "|||");
        assert_eq!(summary, CONTENT_CHANGED_SENTINEL);
    }
}
