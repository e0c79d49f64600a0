//! Runs of painted unit segments along a single row or column.
//!
//! Strokes on the same line may overlap, touch, or repeat each other.
//! Merging collapses them into canonical coverage so every painted unit
//! segment is represented exactly once.

use std::ops::RangeInclusive;

use hashbrown::HashMap;
use log::trace;

/// Half-open interval `[start, end)` of compressed indices.
///
/// A stored run always satisfies `start < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Run {
    pub start: usize,
    pub end: usize,
}

impl Run {
    /// Run between two endpoints in either order. Returns `None` when the
    /// endpoints coincide, since a zero-length stroke paints nothing.
    pub fn between(a: usize, b: usize) -> Option<Self> {
        if a == b {
            return None;
        }
        Some(Self {
            start: a.min(b),
            end: a.max(b),
        })
    }

    /// Number of unit segments covered
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Positions with a painted unit arm on both sides, clamped to the
    /// interior of an axis with `axis_len` coordinates.
    ///
    /// A center `c` needs `[c-1, c)` and `[c, c+1)` inside the run, so
    /// `start + 1 <= c <= end - 1`. The range is empty when nothing fits.
    pub fn interior_centers(&self, axis_len: usize) -> RangeInclusive<usize> {
        let lo = (self.start + 1).max(1);
        let hi = (self.end - 1).min(axis_len.saturating_sub(2));
        lo..=hi
    }
}

/// Merge the runs of one line into sorted, disjoint, non-touching runs.
///
/// A run whose start is at or before the current run's end is absorbed
/// into it. The input order does not affect the result.
pub fn merge_runs(mut runs: Vec<Run>) -> Vec<Run> {
    runs.sort_unstable_by_key(|r| (r.start, r.end));

    let mut merged: Vec<Run> = Vec::with_capacity(runs.len());
    for run in runs {
        if let Some(last) = merged.last_mut() {
            if run.start <= last.end {
                last.end = last.end.max(run.end);
                continue;
            }
        }
        merged.push(run);
    }
    merged
}

/// Raw runs grouped by line (a row's y index or a column's x index)
#[derive(Debug, Clone, Default)]
pub struct RunTable {
    lines: HashMap<usize, Vec<Run>>,
}

impl RunTable {
    pub fn new() -> Self {
        Self {
            lines: HashMap::new(),
        }
    }

    pub fn insert(&mut self, line: usize, run: Run) {
        self.lines.entry(line).or_default().push(run);
    }

    /// Number of lines holding at least one run
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn run_count(&self) -> usize {
        self.lines.values().map(Vec::len).sum()
    }

    /// Merge every line independently
    pub fn merge(self) -> Coverage {
        let lines = self
            .lines
            .into_iter()
            .map(|(line, runs)| {
                let before = runs.len();
                let merged = merge_runs(runs);
                trace!("line {line}: {before} runs merged into {}", merged.len());
                (line, merged)
            })
            .collect();
        Coverage { lines }
    }
}

/// Merged runs grouped by line.
///
/// Within a line runs are sorted by start and never overlap or touch.
#[derive(Debug, Clone, Default)]
pub struct Coverage {
    lines: HashMap<usize, Vec<Run>>,
}

impl Coverage {
    /// Merged runs on `line` (empty if nothing was painted there)
    pub fn runs(&self, line: usize) -> &[Run] {
        self.lines.get(&line).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &[Run])> {
        self.lines.iter().map(|(&line, runs)| (line, runs.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn run_count(&self) -> usize {
        self.lines.values().map(Vec::len).sum()
    }
}
