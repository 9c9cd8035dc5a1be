// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line interface for the report generator.

use std::path::PathBuf;

use clap::Parser;

use crate::report::{
    ReportOptions, DEFAULT_LINES_PER_CAPTURE, DEFAULT_MAX_CAPTURES, DEFAULT_PREFIX,
};

/// Create a markdown report and capture files from terminal output.
#[derive(Parser, Debug, Clone)]
#[command(name = "ui-report", version)]
pub struct Cli {
    /// Path to simulator/replay output text file
    #[arg(value_name = "INPUT_FILE")]
    pub input_file: PathBuf,

    /// Directory where report and capture artifacts are written
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Artifact filename prefix
    #[arg(long, default_value = DEFAULT_PREFIX)]
    pub prefix: String,

    /// Maximum number of screen captures to include
    #[arg(long, default_value_t = DEFAULT_MAX_CAPTURES, allow_negative_numbers = true)]
    pub max_captures: i64,

    /// Maximum lines to embed per capture in markdown
    #[arg(long, default_value_t = DEFAULT_LINES_PER_CAPTURE, allow_negative_numbers = true)]
    pub lines_per_capture: i64,
}

impl Cli {
    pub fn report_options(&self) -> ReportOptions {
        ReportOptions::new(&self.input_file)
            .with_output_dir(&self.output_dir)
            .with_prefix(&self.prefix)
            .with_max_captures(self.max_captures)
            .with_lines_per_capture(self.lines_per_capture)
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
