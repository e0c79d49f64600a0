//! Plus-sign center finding.
//!
//! This module scans merged row and column coverage for points with a
//! painted unit arm on both sides, then intersects the two candidate sets.

use hashbrown::HashSet;

use crate::compress::{CenterPoint, Compression};
use crate::run::Coverage;

/// Set of candidate centers in compressed space
pub type CenterSet = HashSet<CenterPoint>;

// ============================================================================
// Candidate generation
// ============================================================================

/// Find all interior points with a left and a right arm.
///
/// `rows` must be merged coverage keyed by compressed y.
pub fn find_horizontal_centers(rows: &Coverage, compression: &Compression) -> CenterSet {
    let mut centers = CenterSet::new();
    for (cy, runs) in rows.iter() {
        if !compression.ys.is_interior(cy) {
            continue;
        }
        for run in runs {
            for cx in run.interior_centers(compression.width()) {
                centers.insert(CenterPoint::new(cx, cy));
            }
        }
    }
    centers
}

/// Find all interior points with an up and a down arm.
///
/// `columns` must be merged coverage keyed by compressed x.
pub fn find_vertical_centers(columns: &Coverage, compression: &Compression) -> CenterSet {
    let mut centers = CenterSet::new();
    for (cx, runs) in columns.iter() {
        if !compression.xs.is_interior(cx) {
            continue;
        }
        for run in runs {
            for cy in run.interior_centers(compression.height()) {
                centers.insert(CenterPoint::new(cx, cy));
            }
        }
    }
    centers
}

// ============================================================================
// Intersection
// ============================================================================

/// Iterate the smaller set, probing the larger one
fn smaller_first<'a>(a: &'a CenterSet, b: &'a CenterSet) -> (&'a CenterSet, &'a CenterSet) {
    if a.len() <= b.len() {
        (a, b)
    } else {
        (b, a)
    }
}

/// `|a ∩ b|`
pub fn count_common(a: &CenterSet, b: &CenterSet) -> usize {
    let (small, large) = smaller_first(a, b);
    small.iter().filter(|p| large.contains(*p)).count()
}

/// Points present in both sets, in unspecified order
pub fn common_centers(a: &CenterSet, b: &CenterSet) -> Vec<CenterPoint> {
    let (small, large) = smaller_first(a, b);
    small.iter().filter(|p| large.contains(*p)).copied().collect()
}
