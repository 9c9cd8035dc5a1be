// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Errors raised while generating a report.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors from report generation.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The input capture does not resolve to an existing file.
    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// Reading the input or writing an artifact failed.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ReportError {
    /// Wrap an I/O error with the path it occurred on.
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
