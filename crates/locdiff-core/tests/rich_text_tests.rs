//! Rich text renderer tests: run layout, plain fallback and losslessness.

use locdiff_core::text::bracket::locate_brackets;
use locdiff_core::text::range_diff::{CharRange, Side};
use locdiff_core::text::rich_text::{render_highlighted, render_side, CellText, TextRun};
use proptest::prelude::*;

fn run(text: &str, highlighted: bool) -> TextRun {
    TextRun {
        text: text.to_string(),
        highlighted,
    }
}

// S4: rendering each side highlights only the changed word region
#[test]
fn test_render_sides_for_changed_word() {
    let old = "before [one two] after";
    let new = "before [one three] after";

    let old_cell = render_side(old, new, Side::Old);
    let new_cell = render_side(old, new, Side::New);

    assert_eq!(
        old_cell,
        CellText::Rich(vec![
            run("before ", false),
            run("[", false),
            run("one t", false),
            run("wo", true),
            run("]", false),
            run(" after", false),
        ])
    );
    assert_eq!(new_cell.highlighted_texts(), vec!["hree"]);
    assert_eq!(old_cell.plain_text(), old);
    assert_eq!(new_cell.plain_text(), new);
}

#[test]
fn test_identical_texts_render_plain() {
    let text = "a [b] c [d]";
    assert_eq!(render_side(text, text, Side::Old), CellText::Plain(text.into()));
    assert_eq!(render_side(text, text, Side::New), CellText::Plain(text.into()));
}

#[test]
fn test_changes_outside_brackets_are_not_highlighted() {
    let cell = render_side("hello [x] world", "goodbye [x] planet", Side::New);
    assert_eq!(cell, CellText::Plain("goodbye [x] planet".into()));
}

#[test]
fn test_no_brackets_renders_plain() {
    let cell = render_side("A|||B|||C", "A|||X|||C", Side::Old);
    assert_eq!(cell, CellText::Plain("A|||B|||C".into()));
}

#[test]
fn test_extra_span_is_diffed_against_empty() {
    let old = "[ab] [cd]";
    let new = "[ab]";
    let old_cell = render_side(old, new, Side::Old);
    assert_eq!(old_cell.highlighted_texts(), vec!["cd"]);
    assert_eq!(render_side(old, new, Side::New), CellText::Plain(new.into()));
}

#[test]
fn test_spans_pair_by_index() {
    // An inserted leading span shifts pairing for the spans after it
    let old = "[a] [b]";
    let new = "[z] [a] [b]";
    let new_cell = render_side(old, new, Side::New);
    assert_eq!(new_cell.highlighted_texts(), vec!["z", "a", "b"]);
}

#[test]
fn test_empty_base_is_plain_empty() {
    assert_eq!(render_side("", "[x]", Side::Old), CellText::Plain(String::new()));
}

#[test]
fn test_render_highlighted_with_multiple_ranges() {
    let base = "[abcdef]";
    let spans = locate_brackets(base);
    let ranges = vec![vec![CharRange::new(0, 1), CharRange::new(3, 5)]];
    let cell = render_highlighted(base, &spans, &ranges);
    assert_eq!(
        cell,
        CellText::Rich(vec![
            run("[", false),
            run("a", true),
            run("bc", false),
            run("de", true),
            run("f", false),
            run("]", false),
        ])
    );
}

#[test]
fn test_render_highlighted_missing_ranges_entry_is_plain() {
    let base = "x [y] z";
    let spans = locate_brackets(base);
    let cell = render_highlighted(base, &spans, &[]);
    assert_eq!(cell, CellText::Plain(base.into()));
}

#[test]
fn test_render_highlighted_ignores_out_of_bounds_ranges() {
    let base = "[é]";
    let spans = locate_brackets(base);
    // 1 is inside the two-byte 'é'
    let ranges = vec![vec![CharRange::new(1, 2), CharRange::new(5, 9)]];
    let cell = render_highlighted(base, &spans, &ranges);
    assert_eq!(cell, CellText::Plain(base.into()));
}

proptest! {
    #[test]
    fn prop_render_is_lossless(old in "[ab\\[\\] é]{0,20}", new in "[ab\\[\\] é]{0,20}") {
        for side in [Side::Old, Side::New] {
            let base = if side == Side::Old { &old } else { &new };
            let cell = render_side(&old, &new, side);
            prop_assert_eq!(&cell.plain_text(), base);
        }
    }

    #[test]
    fn prop_same_text_is_never_rich(text in "[ab\\[\\] ]{0,20}") {
        prop_assert!(!render_side(&text, &text, Side::Old).is_rich());
        prop_assert!(!render_side(&text, &text, Side::New).is_rich());
    }
}
