// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Report and capture file writing.
//!
//! One run produces:
//! - `{prefix}-{stamp}-capture-{NN}-frame-{FFFF}.txt` per selected frame
//! - `{prefix}-{stamp}.md`, the markdown report embedding a preview of each

use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::error::ReportError;
use crate::frames::{collect_frames, Frame};
use crate::select::pick_indices;
use crate::time::{Clock, RunTimestamp};

pub const DEFAULT_PREFIX: &str = "ui-report";
pub const DEFAULT_MAX_CAPTURES: i64 = 5;
pub const DEFAULT_LINES_PER_CAPTURE: i64 = 40;

const REPORT_TITLE: &str = "# Terminal UI Test Report";

/// Inputs for a single report run.
///
/// Counts are kept as given on the command line; values below one are
/// clamped when the report is generated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportOptions {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub prefix: String,
    pub max_captures: i64,
    pub lines_per_capture: i64,
}

impl ReportOptions {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output_dir: PathBuf::from("."),
            prefix: DEFAULT_PREFIX.to_string(),
            max_captures: DEFAULT_MAX_CAPTURES,
            lines_per_capture: DEFAULT_LINES_PER_CAPTURE,
        }
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_max_captures(mut self, max_captures: i64) -> Self {
        self.max_captures = max_captures;
        self
    }

    pub fn with_lines_per_capture(mut self, lines: i64) -> Self {
        self.lines_per_capture = lines;
        self
    }
}

/// A frame written to its own capture file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaptureEntry {
    /// 1-based position among the captures of this run
    pub number: usize,
    pub frame_index: usize,
    pub path: PathBuf,
    pub preview: String,
}

/// What a completed run wrote.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportSummary {
    pub report_path: PathBuf,
    pub source: PathBuf,
    pub total_frames: usize,
    pub captures: Vec<CaptureEntry>,
}

/// Generate the capture files and markdown report for `options`.
///
/// Nothing is written if the input file is missing.
pub fn generate(options: &ReportOptions, clock: &dyn Clock) -> Result<ReportSummary, ReportError> {
    let source = resolve_input(&options.input)?;
    let output_dir = prepare_output_dir(&options.output_dir)?;
    let stamp = RunTimestamp::capture(clock);

    let raw = fs::read_to_string(&source).map_err(|e| ReportError::io(&source, e))?;
    let frames = collect_frames(&raw);
    let indices = pick_indices(frames.len(), clamp_count(options.max_captures));

    let captures = write_captures(
        &frames,
        &indices,
        &output_dir,
        &options.prefix,
        &stamp,
        clamp_count(options.lines_per_capture),
    )?;

    let report_path = output_dir.join(report_file_name(&options.prefix, &stamp));
    let markdown = render_markdown(&stamp, &source, frames.len(), &captures);
    fs::write(&report_path, markdown).map_err(|e| ReportError::io(&report_path, e))?;

    Ok(ReportSummary {
        report_path,
        source,
        total_frames: frames.len(),
        captures,
    })
}

/// Resolve the input to an absolute path, failing if it is not a file.
pub fn resolve_input(path: &Path) -> Result<PathBuf, ReportError> {
    match path.canonicalize() {
        Ok(resolved) if resolved.is_file() => Ok(resolved),
        Ok(resolved) => Err(ReportError::InputNotFound(resolved)),
        Err(_) => Err(ReportError::InputNotFound(resolve_lenient(path))),
    }
}

/// Make `path` absolute without requiring it to exist.
///
/// Existing leading components are canonicalized so symlinks resolve; `.`
/// and `..` in the missing remainder are folded lexically.
fn resolve_lenient(path: &Path) -> PathBuf {
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());

    let mut resolved = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            other => {
                resolved.push(other);
                if let Ok(real) = resolved.canonicalize() {
                    resolved = real;
                }
            }
        }
    }
    resolved
}

fn prepare_output_dir(dir: &Path) -> Result<PathBuf, ReportError> {
    fs::create_dir_all(dir).map_err(|e| ReportError::io(dir, e))?;
    dir.canonicalize().map_err(|e| ReportError::io(dir, e))
}

fn clamp_count(value: i64) -> usize {
    usize::try_from(value.max(1)).unwrap_or(usize::MAX)
}

pub fn capture_file_name(
    prefix: &str,
    stamp: &RunTimestamp,
    number: usize,
    frame_index: usize,
) -> String {
    format!(
        "{}-{}-capture-{:02}-frame-{:04}.txt",
        prefix,
        stamp.file_stamp(),
        number,
        frame_index
    )
}

pub fn report_file_name(prefix: &str, stamp: &RunTimestamp) -> String {
    format!("{}-{}.md", prefix, stamp.file_stamp())
}

/// Write one capture file per selected frame, in ascending index order.
pub fn write_captures(
    frames: &[Frame],
    indices: &[usize],
    output_dir: &Path,
    prefix: &str,
    stamp: &RunTimestamp,
    lines_per_capture: usize,
) -> Result<Vec<CaptureEntry>, ReportError> {
    let selected = indices.iter().filter_map(|&index| frames.get(index));

    let mut captures = Vec::with_capacity(indices.len());
    for (offset, frame) in selected.enumerate() {
        let number = offset + 1;
        let path = output_dir.join(capture_file_name(prefix, stamp, number, frame.index));
        fs::write(&path, format!("{}\n", frame.text)).map_err(|e| ReportError::io(&path, e))?;

        captures.push(CaptureEntry {
            number,
            frame_index: frame.index,
            path,
            preview: frame.preview(lines_per_capture),
        });
    }
    Ok(captures)
}

/// Render the markdown report.
pub fn render_markdown(
    stamp: &RunTimestamp,
    source: &Path,
    total_frames: usize,
    captures: &[CaptureEntry],
) -> String {
    let mut lines = vec![
        REPORT_TITLE.to_string(),
        String::new(),
        format!("- Generated at (UTC): `{}`", stamp.iso8601()),
        format!("- Source input: `{}`", source.display()),
        format!("- Total frames detected: `{}`", total_frames),
        format!("- Captures included: `{}`", captures.len()),
        String::new(),
        "## Screen Captures".to_string(),
        String::new(),
    ];

    for capture in captures {
        lines.extend([
            format!("### Frame {}", capture.frame_index),
            format!("- Capture file: `{}`", capture.path.display()),
            String::new(),
            "```text".to_string(),
            capture.preview.clone(),
            "```".to_string(),
            String::new(),
        ]);
    }

    lines.join("\n")
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
