//! Segment building: strokes re-expressed as compressed runs.

use log::debug;

use crate::compress::Compression;
use crate::run::{Run, RunTable};
use crate::stroke::Vertex;

/// Raw runs of a path, before merging
#[derive(Debug, Clone, Default)]
pub struct Segments {
    /// Horizontal runs keyed by compressed y
    pub rows: RunTable,
    /// Vertical runs keyed by compressed x
    pub columns: RunTable,
}

/// Turn every consecutive vertex pair into a run on its row or column.
///
/// Zero-length strokes are dropped. Vertices missing from `compression`
/// are skipped, which cannot happen when it was built from the same
/// vertices.
pub fn build_segments(vertices: &[Vertex], compression: &Compression) -> Segments {
    let mut segments = Segments::default();

    for pair in vertices.windows(2) {
        let (Some(a), Some(b)) = (compression.compress(pair[0]), compression.compress(pair[1]))
        else {
            continue;
        };

        if a.x == b.x {
            if let Some(run) = Run::between(a.y, b.y) {
                segments.columns.insert(a.x, run);
            }
        } else if a.y == b.y {
            if let Some(run) = Run::between(a.x, b.x) {
                segments.rows.insert(a.y, run);
            }
        }
    }

    debug!(
        "built {} horizontal runs on {} rows, {} vertical runs on {} columns",
        segments.rows.run_count(),
        segments.rows.len(),
        segments.columns.run_count(),
        segments.columns.len()
    );
    segments
}
