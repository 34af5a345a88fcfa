//! Character-level alignment and highlight ranges.
//!
//! Alignment is Myers' diff over `char`s, provided by `similar`. Operation
//! and highlight offsets are byte offsets into the aligned strings and always
//! fall on character boundaries, so they can be used to slice directly.

use serde::{Deserialize, Serialize};
use similar::{Algorithm, DiffTag, TextDiff};
use std::ops::Range;

/// Classification of one alignment operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditTag {
    Equal,
    Insert,
    Delete,
    Replace,
}

impl From<DiffTag> for EditTag {
    fn from(tag: DiffTag) -> Self {
        match tag {
            DiffTag::Equal => EditTag::Equal,
            DiffTag::Insert => EditTag::Insert,
            DiffTag::Delete => EditTag::Delete,
            DiffTag::Replace => EditTag::Replace,
        }
    }
}

/// One alignment operation with its ranges in both operands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditOp {
    pub tag: EditTag,
    /// Byte range into the base operand (empty for `Insert`)
    pub base: Range<usize>,
    /// Byte range into the other operand (empty for `Delete`)
    pub other: Range<usize>,
}

/// Half-open byte range `[start, end)` marking changed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CharRange {
    pub start: usize,
    pub end: usize,
}

impl CharRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// Which side of a record is being highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Old,
    New,
}

/// Align `base` against `other` and return the classified operations.
///
/// Identical inputs produce a single `Equal` operation (or none for two
/// empty strings).
pub fn diff_ops(base: &str, other: &str) -> Vec<EditOp> {
    if base == other {
        if base.is_empty() {
            return Vec::new();
        }
        return vec![EditOp {
            tag: EditTag::Equal,
            base: 0..base.len(),
            other: 0..other.len(),
        }];
    }

    let base_bounds = char_boundaries(base);
    let other_bounds = char_boundaries(other);

    let diff = TextDiff::configure()
        .algorithm(Algorithm::Myers)
        .diff_chars(base, other);

    diff.ops()
        .iter()
        .map(|op| {
            let (tag, base_idx, other_idx) = op.as_tag_tuple();
            EditOp {
                tag: tag.into(),
                base: base_bounds[base_idx.start]..base_bounds[base_idx.end],
                other: other_bounds[other_idx.start]..other_bounds[other_idx.end],
            }
        })
        .collect()
}

/// Ranges of `base` that have no counterpart in `other`.
///
/// Collects `Delete` and `Replace` operations by their base offsets, then
/// sorts and merges them. Empty when the inputs are identical.
pub fn changed_ranges(base: &str, other: &str) -> Vec<CharRange> {
    if base == other {
        return Vec::new();
    }

    let ranges = diff_ops(base, other)
        .into_iter()
        .filter(|op| matches!(op.tag, EditTag::Delete | EditTag::Replace))
        .filter(|op| !op.base.is_empty())
        .map(|op| CharRange::new(op.base.start, op.base.end))
        .collect();

    merge_ranges(ranges)
}

/// Highlight ranges for one side of an `(old_inner, new_inner)` pair.
///
/// The rendered side is always the base operand: `Side::Old` aligns old
/// against new, `Side::New` aligns new against old. This makes the result
/// for `(a, b, Old)` identical to `(b, a, New)`.
pub fn highlight_ranges(old_inner: &str, new_inner: &str, side: Side) -> Vec<CharRange> {
    match side {
        Side::Old => changed_ranges(old_inner, new_inner),
        Side::New => changed_ranges(new_inner, old_inner),
    }
}

/// Sort ranges and merge any that overlap or touch.
pub fn merge_ranges(mut ranges: Vec<CharRange>) -> Vec<CharRange> {
    ranges.sort();

    let mut merged: Vec<CharRange> = Vec::with_capacity(ranges.len());
    for range in ranges {
        match merged.last_mut() {
            Some(prev) if range.start <= prev.end => {
                prev.end = prev.end.max(range.end);
            }
            _ => merged.push(range),
        }
    }
    merged
}

/// Byte offset of every char start plus the total length, indexed by char position.
fn char_boundaries(s: &str) -> Vec<usize> {
    s.char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(s.len()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_touching_and_overlapping() {
        let merged = merge_ranges(vec![
            CharRange::new(5, 7),
            CharRange::new(0, 2),
            CharRange::new(2, 3),
            CharRange::new(6, 9),
        ]);
        assert_eq!(merged, vec![CharRange::new(0, 3), CharRange::new(5, 9)]);
    }

    #[test]
    fn test_char_boundaries_multibyte() {
        assert_eq!(char_boundaries("aé"), vec![0, 1, 3]);
        assert_eq!(char_boundaries(""), vec![0]);
    }

    #[test]
    fn test_ops_cover_both_operands() {
        let base = "kitten";
        let other = "sitting";
        let ops = diff_ops(base, other);
        let base_total: usize = ops.iter().map(|op| op.base.len()).sum();
        let other_total: usize = ops.iter().map(|op| op.other.len()).sum();
        assert_eq!(base_total, base.len());
        assert_eq!(other_total, other.len());
    }
}
