// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Evenly spaced frame selection.

use std::collections::BTreeSet;

/// Pick at most `max_captures` frame indices spread evenly over `0..total`.
///
/// The first and last frame are always included when more than one capture
/// is requested. Sample positions are `i * (total - 1) / (max_captures - 1)`
/// rounded half-to-even; positions that round to the same index collapse, so
/// fewer than `max_captures` indices can come back.
pub fn pick_indices(total: usize, max_captures: usize) -> Vec<usize> {
    if total == 0 {
        return Vec::new();
    }
    if max_captures <= 1 || total == 1 {
        return vec![0];
    }
    if total <= max_captures {
        return (0..total).collect();
    }

    let last = (total - 1) as f64;
    let steps = (max_captures - 1) as f64;
    let picks: BTreeSet<usize> = (0..max_captures)
        .map(|i| (i as f64 * last / steps).round_ties_even() as usize)
        .collect();
    picks.into_iter().collect()
}

#[cfg(test)]
#[path = "select_tests.rs"]
mod tests;
