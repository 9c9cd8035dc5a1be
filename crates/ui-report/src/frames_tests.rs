// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use proptest::prelude::*;
use yare::parameterized;

#[parameterized(
    single_frame = { "hello\nworld", &["hello\nworld"] },
    surrounding_newlines = { "\n\nhello\n", &["hello"] },
    three_frames = { "A\n---FRAME---\nB\n---FRAME---\nC", &["A", "B", "C"] },
    blank_middle = { "A\n---FRAME---\n\n---FRAME---\nC", &["A", "", "C"] },
    padded_frames = { "A\n\n---FRAME---\n\nB\n", &["A", "B"] },
    marker_not_on_own_line = { "---FRAME---\nA", &["---FRAME---\nA"] },
    empty = { "", &[""] },
)]
fn split_frames_cases(raw: &str, expected: &[&str]) {
    assert_eq!(split_frames(raw), expected);
}

#[test]
fn split_keeps_inner_whitespace() {
    let frames = split_frames("  indented\n\n  more  ");
    assert_eq!(frames, vec!["  indented\n\n  more  "]);
}

#[test]
fn collect_drops_blank_frames_and_reindexes() {
    let frames = collect_frames("A\n---FRAME---\n   \n---FRAME---\nC");
    assert_eq!(
        frames,
        vec![
            Frame {
                index: 0,
                text: "A".to_string()
            },
            Frame {
                index: 1,
                text: "C".to_string()
            },
        ]
    );
}

#[parameterized(
    empty = { "" },
    only_newlines = { "\n\n\n" },
    only_whitespace = { "  \n\t\n" },
    only_separators = { "\n---FRAME---\n\n---FRAME---\n" },
)]
fn collect_substitutes_placeholder(raw: &str) {
    let frames = collect_frames(raw);
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].index, 0);
    assert_eq!(frames[0].text, EMPTY_CAPTURE_NOTICE);
}

#[test]
fn collect_normalizes_crlf() {
    let frames = collect_frames("A\r\nB\r\n---FRAME---\r\nC\r\n");
    let texts: Vec<_> = frames.iter().map(|f| f.text.as_str()).collect();
    assert_eq!(texts, vec!["A\nB", "C"]);
}

#[parameterized(
    crlf = { "a\r\nb", "a\nb" },
    lone_cr = { "a\rb", "a\nb" },
    mixed = { "a\r\n\rb\n", "a\n\nb\n" },
    untouched = { "a\nb", "a\nb" },
)]
fn normalize_newlines_cases(raw: &str, expected: &str) {
    assert_eq!(normalize_newlines(raw), expected);
}

#[parameterized(
    truncates = { "a\nb\nc", 2, "a\nb" },
    zero_keeps_one_line = { "a\nb\nc", 0, "a" },
    exact = { "a\nb\nc", 3, "a\nb\nc" },
    larger_than_frame = { "a\nb\nc", 40, "a\nb\nc" },
    form_feed = { "a\x0cb\x0cc", 1, "a" },
    line_separator = { "a\u{2028}b\u{2028}c", 2, "a\nb" },
    crlf_is_one_break = { "a\r\nb", 5, "a\nb" },
    trailing_break = { "a\nb\n", 5, "a\nb" },
)]
fn preview_cases(text: &str, max_lines: usize, expected: &str) {
    let frame = Frame {
        index: 0,
        text: text.to_string(),
    };
    assert_eq!(frame.preview(max_lines), expected);
}

#[parameterized(
    empty = { "", &[] },
    single = { "a", &["a"] },
    blank_lines_kept = { "a\n\nb", &["a", "", "b"] },
    trailing_newline_dropped = { "a\n", &["a"] },
    vertical_tab = { "a\x0bb", &["a", "b"] },
    group_separators = { "a\x1cb\x1dc\x1ed", &["a", "b", "c", "d"] },
    next_line = { "a\u{85}b", &["a", "b"] },
    paragraph_separator = { "a\u{2029}b", &["a", "b"] },
    lone_cr = { "a\rb", &["a", "b"] },
)]
fn split_lines_cases(text: &str, expected: &[&str]) {
    assert_eq!(split_lines(text), expected);
}

#[parameterized(
    unit_separator = { "A\n---FRAME---\n\x1f" },
    record_separator = { "A\n---FRAME---\n\x1e \x1c" },
    unicode_space = { "A\n---FRAME---\n\u{2003}" },
)]
fn collect_drops_control_whitespace_frames(raw: &str) {
    let frames = collect_frames(raw);
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].text, "A");
}

proptest! {
    #[test]
    fn split_yields_one_frame_per_separator_plus_one(
        frames in proptest::collection::vec("[a-z ]{0,8}", 1..12),
    ) {
        let raw = frames.join(FRAME_SEPARATOR);
        let split = split_frames(&raw);
        prop_assert_eq!(split.len(), frames.len());
        prop_assert_eq!(split, frames);
    }

    #[test]
    fn text_without_marker_is_one_stripped_frame(raw in "[a-z\n ]{0,40}") {
        prop_assert_eq!(split_frames(&raw), vec![raw.trim_matches('\n').to_string()]);
    }

    #[test]
    fn collect_never_empty(raw in ".{0,60}") {
        let frames = collect_frames(&raw);
        prop_assert!(!frames.is_empty());
        for (i, frame) in frames.iter().enumerate() {
            prop_assert_eq!(frame.index, i);
            prop_assert!(!frame.text.trim().is_empty());
        }
    }
}
