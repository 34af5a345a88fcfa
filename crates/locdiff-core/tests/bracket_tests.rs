//! Bracket locator tests.

use locdiff_core::text::bracket::locate_brackets;

#[test]
fn test_plain_text_has_no_spans() {
    assert!(locate_brackets("just prose, no markup").is_empty());
    assert!(locate_brackets("").is_empty());
}

#[test]
fn test_spans_in_document_order() {
    let text = "a [one] b [two] c";
    let spans = locate_brackets(text);
    let inners: Vec<&str> = spans.iter().map(|s| s.inner).collect();
    assert_eq!(inners, vec!["one", "two"]);
    assert_eq!(&text[spans[0].start..spans[0].end], "[one]");
    assert_eq!(&text[spans[1].start..spans[1].end], "[two]");
}

#[test]
fn test_first_closing_bracket_wins() {
    let text = "[a]b]";
    let spans = locate_brackets(text);
    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].inner, "a");
    assert_eq!(spans[0].end, 3);
}

#[test]
fn test_second_open_bracket_restarts_span() {
    let text = "[a[b]";
    let spans = locate_brackets(text);
    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].start, 2);
    assert_eq!(spans[0].inner, "b");
}

#[test]
fn test_unterminated_bracket_is_plain_text() {
    assert!(locate_brackets("tail [open").is_empty());
    let spans = locate_brackets("[ok] then [open");
    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].inner, "ok");
}

#[test]
fn test_stray_closing_bracket_is_ignored() {
    let spans = locate_brackets("] x [y]");
    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].inner, "y");
}

#[test]
fn test_empty_span() {
    let spans = locate_brackets("[]");
    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].inner, "");
    assert_eq!((spans[0].start, spans[0].end), (0, 2));
}

#[test]
fn test_multibyte_offsets_are_char_boundaries() {
    let text = "é[ü€]ß";
    let spans = locate_brackets(text);
    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].inner, "ü€");
    assert!(text.is_char_boundary(spans[0].start));
    assert!(text.is_char_boundary(spans[0].end));
}

#[test]
fn test_spans_do_not_overlap() {
    let spans = locate_brackets("[a][b]]][[c]");
    for pair in spans.windows(2) {
        assert!(pair[0].end <= pair[1].start);
    }
    let inners: Vec<&str> = spans.iter().map(|s| s.inner).collect();
    assert_eq!(inners, vec!["a", "b", "c"]);
}
