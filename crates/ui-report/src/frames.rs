// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Frame splitting for raw terminal captures.
//!
//! A capture holds one or more screens of terminal output separated by a
//! line containing only `---FRAME---`. Splitting never fails: blank frames
//! are dropped and an empty capture yields a single placeholder frame.

/// Marker text that separates frames.
pub const FRAME_MARKER: &str = "---FRAME---";

/// The marker on a line of its own, as it appears between frames.
pub const FRAME_SEPARATOR: &str = "\n---FRAME---\n";

/// Placeholder frame used when a capture contains no visible output.
pub const EMPTY_CAPTURE_NOTICE: &str = "(No non-empty terminal output captured)";

/// Characters that end a line of frame text. `\r\n` counts as one break.
const LINE_BREAKS: &[char] = &[
    '\n', '\r', '\x0b', '\x0c', '\x1c', '\x1d', '\x1e', '\u{85}', '\u{2028}', '\u{2029}',
];

/// One non-empty frame, indexed by its position among the kept frames.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub index: usize,
    pub text: String,
}

impl Frame {
    /// The first `max_lines` lines of the frame joined by `\n`.
    ///
    /// At least one line is always kept. Lines beyond the limit are dropped
    /// without any marker.
    pub fn preview(&self, max_lines: usize) -> String {
        split_lines(&self.text)
            .into_iter()
            .take(max_lines.max(1))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Split text into lines on every `LINE_BREAKS` character.
///
/// A trailing break does not produce an empty final line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = text;
    while let Some(pos) = rest.find(LINE_BREAKS) {
        let (line, tail) = rest.split_at(pos);
        lines.push(line);
        let width = if tail.starts_with("\r\n") {
            2
        } else {
            tail.chars().next().map_or(1, char::len_utf8)
        };
        rest = &tail[width..];
    }
    if !rest.is_empty() {
        lines.push(rest);
    }
    lines
}

/// Whitespace for blank-frame detection; includes the ASCII separator
/// controls `\x1c`..=`\x1f`.
fn is_blank(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Convert `\r\n` and lone `\r` line endings to `\n`.
pub fn normalize_newlines(raw: &str) -> String {
    if !raw.contains('\r') {
        return raw.to_string();
    }
    raw.replace("\r\n", "\n").replace('\r', "\n")
}

/// Split raw capture text into frames, stripping surrounding newlines.
///
/// Empty segments are kept here; see [`collect_frames`] for the filtered
/// sequence.
pub fn split_frames(raw: &str) -> Vec<String> {
    if !raw.contains(FRAME_MARKER) {
        return vec![raw.trim_matches('\n').to_string()];
    }
    raw.split(FRAME_SEPARATOR)
        .map(|segment| segment.trim_matches('\n').to_string())
        .collect()
}

/// Split a capture and keep only frames with visible content.
///
/// Returns at least one frame.
pub fn collect_frames(raw: &str) -> Vec<Frame> {
    let mut frames: Vec<Frame> = split_frames(&normalize_newlines(raw))
        .into_iter()
        .filter(|text| !text.chars().all(is_blank))
        .enumerate()
        .map(|(index, text)| Frame { index, text })
        .collect();

    if frames.is_empty() {
        frames.push(Frame {
            index: 0,
            text: EMPTY_CAPTURE_NOTICE.to_string(),
        });
    }
    frames
}

#[cfg(test)]
#[path = "frames_tests.rs"]
mod tests;
