//! Styled run rendering for bracket-scoped highlights.

use crate::text::bracket::{locate_brackets, BracketSpan};
use crate::text::range_diff::{highlight_ranges, CharRange, Side};
use serde::{Deserialize, Serialize};

/// A piece of cell text with a single style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRun {
    pub text: String,
    pub highlighted: bool,
}

/// Cell content of a diff row: a plain string, or styled runs when at least
/// one run is highlighted.
///
/// Serializes untagged, as a JSON string or an array of runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellText {
    Plain(String),
    Rich(Vec<TextRun>),
}

impl CellText {
    /// The unstyled text (run texts concatenated).
    pub fn plain_text(&self) -> String {
        match self {
            CellText::Plain(s) => s.clone(),
            CellText::Rich(runs) => runs.iter().map(|r| r.text.as_str()).collect(),
        }
    }

    pub fn is_rich(&self) -> bool {
        matches!(self, CellText::Rich(_))
    }

    /// Texts of the highlighted runs, in order.
    pub fn highlighted_texts(&self) -> Vec<&str> {
        match self {
            CellText::Plain(_) => Vec::new(),
            CellText::Rich(runs) => runs
                .iter()
                .filter(|r| r.highlighted)
                .map(|r| r.text.as_str())
                .collect(),
        }
    }
}

impl Default for CellText {
    fn default() -> Self {
        CellText::Plain(String::new())
    }
}

impl From<&str> for CellText {
    fn from(s: &str) -> Self {
        CellText::Plain(s.to_string())
    }
}

/// Append-only builder of [`TextRun`]s.
#[derive(Debug, Default)]
pub struct RunBuilder {
    runs: Vec<TextRun>,
}

impl RunBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a run; empty text is dropped.
    pub fn push(&mut self, text: &str, highlighted: bool) -> &mut Self {
        if !text.is_empty() {
            self.runs.push(TextRun {
                text: text.to_string(),
                highlighted,
            });
        }
        self
    }

    pub fn has_highlight(&self) -> bool {
        self.runs.iter().any(|r| r.highlighted)
    }

    /// Finish into a [`CellText`]: runs when anything is highlighted,
    /// otherwise `base` as a plain string.
    pub fn finish(self, base: &str) -> CellText {
        if self.has_highlight() {
            CellText::Rich(self.runs)
        } else {
            CellText::Plain(base.to_string())
        }
    }
}

/// Render `base` with per-span highlight ranges.
///
/// `ranges[i]` holds the merged ranges for `spans[i]`, relative to that
/// span's inner text; a missing entry means no highlight. Brackets and
/// text outside spans are never highlighted.
pub fn render_highlighted(base: &str, spans: &[BracketSpan<'_>], ranges: &[Vec<CharRange>]) -> CellText {
    if base.is_empty() || spans.is_empty() {
        return CellText::Plain(base.to_string());
    }

    let mut builder = RunBuilder::new();
    let mut pos = 0;

    for (idx, span) in spans.iter().enumerate() {
        builder.push(&base[pos..span.start], false);
        builder.push("[", false);

        let inner = span.inner;
        let mut inner_pos = 0;
        for range in ranges.get(idx).map(Vec::as_slice).unwrap_or_default() {
            let start = range.start.min(inner.len());
            let end = range.end.min(inner.len());
            if start < inner_pos
                || start >= end
                || !inner.is_char_boundary(start)
                || !inner.is_char_boundary(end)
            {
                continue;
            }
            builder.push(&inner[inner_pos..start], false);
            builder.push(&inner[start..end], true);
            inner_pos = end;
        }
        builder.push(&inner[inner_pos..], false);

        builder.push("]", false);
        pos = span.end;
    }
    builder.push(&base[pos..], false);

    builder.finish(base)
}

/// Render one side of an `(old, new)` record pair.
///
/// Spans are located in both texts and paired by index; a span with no
/// counterpart is diffed against the empty string, so its whole inner text
/// is highlighted.
pub fn render_side(old: &str, new: &str, side: Side) -> CellText {
    let (base, other) = match side {
        Side::Old => (old, new),
        Side::New => (new, old),
    };

    let base_spans = locate_brackets(base);
    if base_spans.is_empty() {
        return CellText::Plain(base.to_string());
    }
    let other_spans = locate_brackets(other);

    let ranges: Vec<Vec<CharRange>> = base_spans
        .iter()
        .enumerate()
        .map(|(idx, span)| {
            let other_inner = other_spans.get(idx).map(|s| s.inner).unwrap_or("");
            match side {
                Side::Old => highlight_ranges(span.inner, other_inner, Side::Old),
                Side::New => highlight_ranges(other_inner, span.inner, Side::New),
            }
        })
        .collect();

    render_highlighted(base, &base_spans, &ranges)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_drops_empty_runs() {
        let mut builder = RunBuilder::new();
        builder.push("", true).push("a", false);
        assert!(!builder.has_highlight());
        assert_eq!(builder.finish("a"), CellText::Plain("a".into()));
    }

    #[test]
    fn test_cell_text_serializes_untagged() {
        let plain = serde_json::to_string(&CellText::from("x")).unwrap();
        assert_eq!(plain, "\"x\"");

        let rich = CellText::Rich(vec![TextRun {
            text: "y".into(),
            highlighted: true,
        }]);
        let json = serde_json::to_string(&rich).unwrap();
        assert_eq!(json, r#"[{"text":"y","highlighted":true}]"#);
    }
}
