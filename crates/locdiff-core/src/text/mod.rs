//! Text segmentation and annotation primitives.
//!
//! Every function here is pure and total: any UTF-8 input yields a defined
//! result, and the only shared inputs (the texts being compared) are borrowed
//! read-only.
//!
//! - [`segment`]: delimiter tokenizer
//! - [`chunk`]: length-bounded chunk packer
//! - [`segment_delta`]: added/removed segments with order preserved
//! - [`bracket`]: non-nested `[...]` span scanner
//! - [`range_diff`]: character alignment and highlight ranges
//! - [`rich_text`]: styled run rendering

pub mod bracket;
pub mod chunk;
pub mod range_diff;
pub mod rich_text;
pub mod segment;
pub mod segment_delta;

pub use bracket::{locate_brackets, BracketSpan};
pub use chunk::{chunk_text, split_parts, ChunkPlan};
pub use range_diff::{changed_ranges, diff_ops, highlight_ranges, CharRange, EditOp, EditTag, Side};
pub use rich_text::{render_highlighted, render_side, CellText, RunBuilder, TextRun};
pub use segment::split_segments;
pub use segment_delta::{changes_summary, segment_delta, SegmentDelta, CONTENT_CHANGED_SENTINEL};
