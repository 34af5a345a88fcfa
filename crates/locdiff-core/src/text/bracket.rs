//! Non-nested bracket span scanner.
//!
//! A span is `[`, a run of characters containing neither `[` nor `]`, then
//! `]`. The scanner makes one pass over the bytes:
//!
//! - `[` opens a candidate span; a second `[` before any `]` moves the
//!   candidate to the new position and the earlier `[` stays plain text
//! - `]` closes the open candidate (first `]` wins); a `]` with no open
//!   candidate is plain text
//! - a `[` still open at the end of the text yields no span
//!
//! Both brackets are ASCII, so byte offsets found this way always sit on
//! UTF-8 character boundaries.

/// A located `[...]` span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BracketSpan<'a> {
    /// Byte offset of the opening `[`
    pub start: usize,
    /// Byte offset one past the closing `]`
    pub end: usize,
    /// Text strictly between the brackets
    pub inner: &'a str,
}

impl<'a> BracketSpan<'a> {
    /// Byte offset of the first inner character.
    pub fn inner_start(&self) -> usize {
        self.start + 1
    }
}

/// Locate all bracket spans of `text` in document order.
pub fn locate_brackets(text: &str) -> Vec<BracketSpan<'_>> {
    let mut spans = Vec::new();
    let mut open: Option<usize> = None;

    for (i, byte) in text.bytes().enumerate() {
        match byte {
            b'[' => open = Some(i),
            b']' => {
                if let Some(start) = open.take() {
                    spans.push(BracketSpan {
                        start,
                        end: i + 1,
                        inner: &text[start + 1..i],
                    });
                }
            }
            _ => {}
        }
    }

    spans
}
