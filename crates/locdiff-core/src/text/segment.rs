//! Delimiter tokenizer.

/// Split `text` on every occurrence of `delimiter`.
///
/// Segments keep their original order and may be empty (leading, trailing or
/// doubled delimiters). An empty `delimiter` is rejected by
/// [`CompareConfig`](crate::config::CompareConfig); if one reaches this
/// function anyway the whole text comes back as a single segment.
pub fn split_segments<'a>(text: &'a str, delimiter: &str) -> Vec<&'a str> {
    if delimiter.is_empty() {
        return vec![text];
    }
    text.split(delimiter).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_keeps_boundary_empties() {
        assert_eq!(split_segments("|||a||||||b|||", "|||"), vec!["", "a", "", "b", ""]);
    }

    #[test]
    fn test_empty_text_is_one_empty_segment() {
        assert_eq!(split_segments("", "|||"), vec![""]);
    }

    #[test]
    fn test_empty_delimiter_is_identity() {
        assert_eq!(split_segments("a|b", ""), vec!["a|b"]);
    }
}
