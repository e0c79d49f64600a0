//! Coordinate compression.
//!
//! The path may wander over an enormous plane, but only the coordinates it
//! actually stops at matter. Each axis is collapsed to the sorted list of
//! distinct visited values, and a coordinate is replaced by its rank.

use crate::stroke::Vertex;

/// A point in compressed index space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CenterPoint {
    pub x: usize,
    pub y: usize,
}

impl CenterPoint {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// Sorted distinct coordinates along one axis.
///
/// The rank lookup is a strict monotonic bijection between the visited
/// coordinates and `0..len()`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AxisMap {
    coords: Vec<i64>,
}

impl AxisMap {
    pub fn new(values: impl IntoIterator<Item = i64>) -> Self {
        let mut coords: Vec<i64> = values.into_iter().collect();
        coords.sort_unstable();
        coords.dedup();
        Self { coords }
    }

    /// Compressed index of `value`, if it was visited
    pub fn index_of(&self, value: i64) -> Option<usize> {
        self.coords.binary_search(&value).ok()
    }

    /// Original coordinate at compressed index `index`
    pub fn coord_at(&self, index: usize) -> Option<i64> {
        self.coords.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Returns true if `index` has a neighbor on both sides
    pub fn is_interior(&self, index: usize) -> bool {
        index > 0 && index + 1 < self.coords.len()
    }
}

/// Compressed coordinate system for one path
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Compression {
    pub xs: AxisMap,
    pub ys: AxisMap,
}

impl Compression {
    pub fn new(vertices: &[Vertex]) -> Self {
        Self {
            xs: AxisMap::new(vertices.iter().map(|v| v.x)),
            ys: AxisMap::new(vertices.iter().map(|v| v.y)),
        }
    }

    /// Number of distinct x coordinates (`compNX`)
    pub fn width(&self) -> usize {
        self.xs.len()
    }

    /// Number of distinct y coordinates (`compNY`)
    pub fn height(&self) -> usize {
        self.ys.len()
    }

    /// A plus-sign center needs a coordinate strictly between the extremes
    /// on both axes, so at least 3×3 distinct values.
    pub fn has_interior(&self) -> bool {
        self.width() >= 3 && self.height() >= 3
    }

    /// Map a vertex into compressed space
    pub fn compress(&self, v: Vertex) -> Option<CenterPoint> {
        Some(CenterPoint::new(
            self.xs.index_of(v.x)?,
            self.ys.index_of(v.y)?,
        ))
    }

    /// Map a compressed point back to the original plane
    pub fn expand(&self, p: CenterPoint) -> Option<Vertex> {
        Some(Vertex::new(self.xs.coord_at(p.x)?, self.ys.coord_at(p.y)?))
    }
}
