//! Length-bounded chunk packer.
//!
//! A text is cut into delimiter-aligned pieces (the first segment alone,
//! every later segment together with the delimiter in front of it) and the
//! pieces are packed greedily into chunks of at most `limit` characters.
//! A piece that is longer than `limit` on its own is hard-sliced into
//! `limit`-sized windows.
//!
//! Chunks borrow from the input, and concatenating them in order always
//! yields the input byte for byte.

/// Ordered, lossless partition of a text into bounded chunks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkPlan<'a> {
    chunks: Vec<&'a str>,
}

impl<'a> ChunkPlan<'a> {
    /// The chunks in source order. Never empty.
    pub fn chunks(&self) -> &[&'a str] {
        &self.chunks
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    /// Always false: a plan holds at least one (possibly empty) chunk.
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// `split_part` tags for this plan, see [`split_parts`].
    pub fn split_parts(&self) -> Vec<u32> {
        split_parts(self.chunks.len())
    }

    /// Concatenate the chunks back into one string.
    pub fn reassemble(&self) -> String {
        self.chunks.concat()
    }
}

/// `split_part` numbering for a plan of `count` chunks: `[0]` for a single
/// chunk, `1..=count` otherwise.
pub fn split_parts(count: usize) -> Vec<u32> {
    if count <= 1 {
        vec![0]
    } else {
        (1..=count as u32).collect()
    }
}

/// Pack `text` into chunks of at most `limit` characters.
///
/// `limit <= 0` disables chunking and returns the whole text as one chunk.
/// Lengths are counted in `char`s, so a window never splits a code point.
pub fn chunk_text<'a>(text: &'a str, delimiter: &str, limit: i64) -> ChunkPlan<'a> {
    let limit = match usize::try_from(limit) {
        Ok(l) if l > 0 => l,
        _ => return ChunkPlan { chunks: vec![text] },
    };

    let mut chunks: Vec<&'a str> = Vec::new();
    // Pending chunk as a byte range of `text` plus its char count.
    let mut cur_start = 0usize;
    let mut cur_end = 0usize;
    let mut cur_chars = 0usize;

    for (start, end) in piece_bounds(text, delimiter) {
        let piece = &text[start..end];
        let piece_chars = piece.chars().count();

        if piece_chars > limit {
            if cur_end > cur_start {
                chunks.push(&text[cur_start..cur_end]);
            }
            chunks.extend(hard_slice(piece, limit));
            cur_start = end;
            cur_end = end;
            cur_chars = 0;
            continue;
        }

        if cur_end == cur_start {
            cur_start = start;
            cur_end = end;
            cur_chars = piece_chars;
        } else if cur_chars + piece_chars <= limit {
            cur_end = end;
            cur_chars += piece_chars;
        } else {
            chunks.push(&text[cur_start..cur_end]);
            cur_start = start;
            cur_end = end;
            cur_chars = piece_chars;
        }
    }

    if cur_end > cur_start {
        chunks.push(&text[cur_start..cur_end]);
    }
    if chunks.is_empty() {
        chunks.push(text);
    }

    ChunkPlan { chunks }
}

/// Byte ranges of the delimiter-prefixed pieces of `text`.
///
/// Piece `k > 0` starts at the `k`-th delimiter occurrence, so the ranges are
/// contiguous and cover the whole text.
fn piece_bounds(text: &str, delimiter: &str) -> Vec<(usize, usize)> {
    let mut starts = vec![0usize];
    if !delimiter.is_empty() {
        starts.extend(text.match_indices(delimiter).map(|(i, _)| i));
    }

    let mut bounds = Vec::with_capacity(starts.len());
    for (i, &start) in starts.iter().enumerate() {
        let end = starts.get(i + 1).copied().unwrap_or(text.len());
        bounds.push((start, end));
    }
    bounds
}

/// Slice `piece` into consecutive windows of `limit` chars (last may be shorter).
fn hard_slice(piece: &str, limit: usize) -> Vec<&str> {
    let cuts: Vec<usize> = piece
        .char_indices()
        .map(|(i, _)| i)
        .step_by(limit)
        .chain(std::iter::once(piece.len()))
        .collect();
    cuts.windows(2).map(|w| &piece[w[0]..w[1]]).collect()
}
