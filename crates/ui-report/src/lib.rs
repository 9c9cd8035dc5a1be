// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal UI report generation.
//!
//! Turns a raw terminal-output capture into a timestamped markdown report
//! plus one capture file per selected frame. Frames in the input are
//! separated by a `---FRAME---` marker line; an evenly spaced subset of
//! them is written out so large captures stay reviewable.
//!
//! ```no_run
//! use ui_report::{generate, ReportOptions, SystemClock};
//!
//! let options = ReportOptions::new("capture.txt").with_output_dir("reports");
//! let summary = generate(&options, &SystemClock::new())?;
//! println!("{}", summary.report_path.display());
//! # Ok::<(), ui_report::ReportError>(())
//! ```

pub mod cli;
pub mod diagnostic;
pub mod error;
pub mod frames;
pub mod report;
pub mod select;
pub mod time;

pub use error::ReportError;
pub use frames::{collect_frames, split_frames, Frame, EMPTY_CAPTURE_NOTICE, FRAME_SEPARATOR};
pub use report::{generate, CaptureEntry, ReportOptions, ReportSummary};
pub use select::pick_indices;
pub use time::{Clock, FakeClock, RunTimestamp, SystemClock};
