//! Chunk packer tests: greedy packing, hard slicing and lossless reassembly.

use locdiff_core::text::chunk::{chunk_text, split_parts};
use proptest::prelude::*;

const D: &str = "|||";

// S3: a delimiter-free text longer than the limit is hard-sliced
#[test]
fn test_hard_slice_without_delimiter() {
    let plan = chunk_text("abcdefghij", D, 5);
    assert_eq!(plan.chunks(), &["abcde", "fghij"]);
    assert_eq!(plan.split_parts(), vec![1, 2]);
}

#[test]
fn test_short_text_is_single_chunk_part_zero() {
    let plan = chunk_text("A|||B", D, 100);
    assert_eq!(plan.chunks(), &["A|||B"]);
    assert_eq!(plan.split_parts(), vec![0]);
}

#[test]
fn test_non_positive_limit_is_passthrough() {
    for limit in [0, -1, i64::MIN] {
        let plan = chunk_text("abc|||def", D, limit);
        assert_eq!(plan.chunks(), &["abc|||def"]);
        assert_eq!(plan.split_parts(), vec![0]);
    }
}

#[test]
fn test_greedy_packing_keeps_delimiter_with_following_segment() {
    // pieces: "aa" (2), "|||bb" (5), "|||cc" (5)
    let plan = chunk_text("aa|||bb|||cc", D, 7);
    assert_eq!(plan.chunks(), &["aa|||bb", "|||cc"]);
}

#[test]
fn test_exact_fit_stays_in_one_chunk() {
    let plan = chunk_text("aa|||bb", D, 7);
    assert_eq!(plan.len(), 1);
}

#[test]
fn test_oversized_piece_flushes_pending_chunk_first() {
    // pieces: "a" (1), "|||bcdefgh" (10) with limit 4
    let plan = chunk_text("a|||bcdefgh", D, 4);
    assert_eq!(plan.chunks(), &["a", "|||b", "cdef", "gh"]);
    assert_eq!(plan.split_parts(), vec![1, 2, 3, 4]);
}

#[test]
fn test_piece_after_hard_slice_starts_fresh_chunk() {
    let plan = chunk_text("abcdef|||g", D, 4);
    assert_eq!(plan.chunks(), &["abcd", "ef", "|||g"]);
}

#[test]
fn test_empty_text_yields_one_empty_chunk() {
    let plan = chunk_text("", D, 5);
    assert_eq!(plan.chunks(), &[""]);
    assert_eq!(plan.split_parts(), vec![0]);
}

#[test]
fn test_leading_delimiter() {
    let plan = chunk_text("|||abc", D, 6);
    assert_eq!(plan.chunks(), &["|||abc"]);
}

#[test]
fn test_limit_counts_characters_not_bytes() {
    let plan = chunk_text("ääää", D, 2);
    assert_eq!(plan.chunks(), &["ää", "ää"]);
}

#[test]
fn test_split_parts_helper() {
    assert_eq!(split_parts(0), vec![0]);
    assert_eq!(split_parts(1), vec![0]);
    assert_eq!(split_parts(2), vec![1, 2]);
}

fn delimited_text() -> impl Strategy<Value = String> {
    prop::collection::vec(prop_oneof!["[a-z]{0,12}", "[äß€ ]{0,4}", Just(String::new())], 0..8)
        .prop_map(|parts| parts.join(D))
}

proptest! {
    #[test]
    fn prop_chunks_reassemble_exactly(text in delimited_text(), limit in -2i64..20) {
        let plan = chunk_text(&text, D, limit);
        prop_assert_eq!(plan.reassemble(), text);
    }

    #[test]
    fn prop_arbitrary_text_reassembles(text in "\\PC{0,60}", limit in -2i64..20) {
        let plan = chunk_text(&text, D, limit);
        prop_assert_eq!(plan.reassemble(), text);
    }

    #[test]
    fn prop_chunks_respect_limit(text in delimited_text(), limit in 1i64..20) {
        let plan = chunk_text(&text, D, limit);
        for chunk in plan.chunks() {
            prop_assert!(chunk.chars().count() as i64 <= limit);
        }
    }

    #[test]
    fn prop_split_parts_match_chunk_count(text in delimited_text(), limit in 1i64..20) {
        let plan = chunk_text(&text, D, limit);
        let parts = plan.split_parts();
        if plan.len() == 1 {
            prop_assert_eq!(parts, vec![0]);
        } else {
            prop_assert_eq!(parts, (1..=plan.len() as u32).collect::<Vec<_>>());
        }
    }
}
