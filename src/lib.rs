//! # plusgrid
//!
//! Count the plus signs painted by a path of axis-aligned brush strokes.
//!
//! The brush starts at the origin and each stroke moves it a whole number
//! of units up, down, left or right, painting the segment it covers. A
//! *plus sign* is a grid point whose four orthogonal unit-length arms are
//! all painted.
//!
//! Coordinates may be huge (strokes of length ~10^9), so the plane is never
//! scanned directly. The pipeline is:
//!
//! 1. **Simulate** the strokes into absolute vertices ([`Path::vertices`])
//! 2. **Compress** each axis to the ranks of visited coordinates ([`Compression`])
//! 3. **Build** a run per stroke on its row or column ([`segment::build_segments`])
//! 4. **Merge** runs per line so overlapping strokes count once ([`run::merge_runs`])
//! 5. **Find** points with both horizontal arms, and with both vertical arms
//! 6. **Intersect** the two candidate sets
//!
//! # Example
//!
//! ```rust
//! let count = plusgrid::count_plus_signs(9, &[6, 3, 4, 5, 1, 6, 3, 3, 4], "ULDRULURD")?;
//! assert_eq!(count, 4);
//! # Ok::<(), plusgrid::Error>(())
//! ```

pub mod compress;
mod error;
pub mod finder;
pub mod run;
pub mod segment;
pub mod stroke;

use log::debug;

pub use compress::{AxisMap, CenterPoint, Compression};
pub use error::{Error, Result};
pub use finder::CenterSet;
pub use run::{Coverage, Run, RunTable};
pub use stroke::{Direction, Path, Stroke, Vertex};

/// Options for validating stroke input.
///
/// The defaults accept exactly the uppercase letters `U`, `D`, `L`, `R`
/// and silently skip zero-length strokes.
///
/// # Example
///
/// ```rust
/// use plusgrid::{count_plus_signs_with_options, CountOptions};
///
/// let options = CountOptions::new().with_lowercase(true);
/// let count = count_plus_signs_with_options(8, &[1; 8], "rdluuldr", &options)?;
/// assert_eq!(count, 1);
/// # Ok::<(), plusgrid::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct CountOptions {
    /// Also accept lowercase direction letters.
    pub lowercase: bool,
    /// Report zero-length strokes as [`Error::ZeroLength`] instead of
    /// skipping them.
    pub reject_zero_length: bool,
}

impl CountOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    pub fn with_reject_zero_length(mut self, reject: bool) -> Self {
        self.reject_zero_length = reject;
        self
    }
}

/// A path's painted coverage in compressed space.
///
/// Holds the compressed coordinate system together with the merged runs of
/// every row and column, which is everything needed to locate plus signs.
#[derive(Debug, Clone, Default)]
pub struct Painting {
    compression: Compression,
    rows: Coverage,
    columns: Coverage,
}

impl Painting {
    pub fn new(path: &Path) -> Result<Self> {
        let vertices = path.vertices()?;
        let compression = Compression::new(&vertices);
        debug!(
            "{} vertices compressed to {}x{}",
            vertices.len(),
            compression.width(),
            compression.height()
        );

        if !compression.has_interior() {
            debug!("compressed grid has no interior, skipping run building");
            return Ok(Self {
                compression,
                ..Self::default()
            });
        }

        let segments = segment::build_segments(&vertices, &compression);
        let rows = segments.rows.merge();
        let columns = segments.columns.merge();
        debug!(
            "merged into {} horizontal and {} vertical runs",
            rows.run_count(),
            columns.run_count()
        );

        Ok(Self {
            compression,
            rows,
            columns,
        })
    }

    pub fn compression(&self) -> &Compression {
        &self.compression
    }

    /// Merged horizontal runs keyed by compressed y
    pub fn rows(&self) -> &Coverage {
        &self.rows
    }

    /// Merged vertical runs keyed by compressed x
    pub fn columns(&self) -> &Coverage {
        &self.columns
    }

    /// Points with painted left and right arms
    pub fn horizontal_centers(&self) -> CenterSet {
        finder::find_horizontal_centers(&self.rows, &self.compression)
    }

    /// Points with painted up and down arms
    pub fn vertical_centers(&self) -> CenterSet {
        finder::find_vertical_centers(&self.columns, &self.compression)
    }

    /// Number of plus-sign centers
    pub fn count(&self) -> u64 {
        if !self.compression.has_interior() {
            return 0;
        }
        let h = self.horizontal_centers();
        let v = self.vertical_centers();
        debug!("{} horizontal and {} vertical candidates", h.len(), v.len());
        finder::count_common(&h, &v) as u64
    }

    /// Plus-sign centers on the original plane, sorted by `(y, x)`
    pub fn centers(&self) -> Vec<Vertex> {
        if !self.compression.has_interior() {
            return Vec::new();
        }
        let h = self.horizontal_centers();
        let v = self.vertical_centers();
        let mut centers: Vec<Vertex> = finder::common_centers(&h, &v)
            .into_iter()
            .filter_map(|p| self.compression.expand(p))
            .collect();
        centers.sort_unstable_by_key(|c| (c.y, c.x));
        centers
    }
}

/// Count plus signs using default options.
///
/// `lengths` and `directions` must each hold `stroke_count` entries.
/// Fewer than two strokes can never form a plus sign and yield 0.
pub fn count_plus_signs(stroke_count: usize, lengths: &[u64], directions: &str) -> Result<u64> {
    count_plus_signs_with_options(stroke_count, lengths, directions, &CountOptions::default())
}

/// Count plus signs with custom validation options
pub fn count_plus_signs_with_options(
    stroke_count: usize,
    lengths: &[u64],
    directions: &str,
    options: &CountOptions,
) -> Result<u64> {
    let path = Path::parse(stroke_count, lengths, directions, options)?;
    if path.len() < 2 {
        return Ok(0);
    }
    Ok(Painting::new(&path)?.count())
}

/// Locate plus-sign centers on the original plane, sorted by `(y, x)`
pub fn find_plus_signs(
    stroke_count: usize,
    lengths: &[u64],
    directions: &str,
    options: &CountOptions,
) -> Result<Vec<Vertex>> {
    let path = Path::parse(stroke_count, lengths, directions, options)?;
    if path.len() < 2 {
        return Ok(Vec::new());
    }
    Ok(Painting::new(&path)?.centers())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(lengths: &[u64], directions: &str) -> u64 {
        count_plus_signs(lengths.len(), lengths, directions).unwrap()
    }

    #[test_log::test]
    fn test_sample_paths() {
        assert_eq!(count(&[6, 3, 4, 5, 1, 6, 3, 3, 4], "ULDRULURD"), 4);
        assert_eq!(count(&[1, 1, 1, 1, 1, 1, 1, 1], "RDLUULDR"), 1);
        assert_eq!(count(&[1, 2, 2, 1, 1, 2, 2, 1], "UDUDLRLR"), 1);
    }

    #[test_log::test]
    fn test_closed_rectangle() {
        assert_eq!(count(&[5, 2, 5, 2], "RDLU"), 0);
    }

    #[test_log::test]
    fn test_stroke_crossing_rectangle() {
        // The last stroke runs up through the bottom side at (2, 0)
        assert_eq!(count(&[5, 2, 3, 4], "RDLU"), 1);
        let centers = find_plus_signs(4, &[5, 2, 3, 4], "RDLU", &CountOptions::default()).unwrap();
        assert_eq!(centers, vec![Vertex::new(2, 0)]);
    }

    #[test_log::test]
    fn test_degenerate_inputs() {
        assert_eq!(count(&[100], "R"), 0);
        assert_eq!(count(&[], ""), 0);
        // Never leaves a single line
        assert_eq!(count(&[3, 6, 3], "RLR"), 0);
        // Only two distinct y values
        assert_eq!(count(&[2, 1, 2, 1, 2], "RURDR"), 0);
    }

    #[test]
    fn test_invalid_input_fails_before_counting() {
        assert_eq!(
            count_plus_signs(2, &[1, 1], "UZ"),
            Err(Error::InvalidDirection {
                index: 1,
                found: 'Z'
            })
        );
        // Validation comes first even for inputs too short to count
        assert!(count_plus_signs(1, &[1], "Q").is_err());
        assert!(matches!(
            count_plus_signs(3, &[1, 1], "UD"),
            Err(Error::LengthMismatch { .. })
        ));
    }

    #[test]
    fn test_zero_length_strokes_skipped() {
        assert_eq!(count(&[1, 0, 1, 1, 1, 1, 0, 1, 1, 1], "RUDLUURLDR"), 1);
    }

    #[test]
    fn test_overlap_invariance() {
        // Both sample paths return to the origin, so walking them twice
        // repaints every segment.
        let twice = |lengths: &[u64], directions: &str| {
            let lengths: Vec<u64> = lengths.iter().chain(lengths).copied().collect();
            count(&lengths, &directions.repeat(2))
        };
        assert_eq!(twice(&[1, 1, 1, 1, 1, 1, 1, 1], "RDLUULDR"), 1);
        assert_eq!(twice(&[1, 2, 2, 1, 1, 2, 2, 1], "UDUDLRLR"), 1);
        // Retrace the first stroke of the larger sample
        assert_eq!(count(&[6, 6, 6, 3, 4, 5, 1, 6, 3, 3, 4], "UDULDRULURD"), 4);
    }

    #[test]
    fn test_pure() {
        let lengths = [6, 3, 4, 5, 1, 6, 3, 3, 4];
        let a = count_plus_signs(9, &lengths, "ULDRULURD");
        let b = count_plus_signs(9, &lengths, "ULDRULURD");
        assert_eq!(a, b);
    }

    #[test]
    fn test_large_coordinates() {
        let b = 1_000_000_000;
        assert_eq!(count(&[b, 2 * b, b, b, 2 * b, b], "RLRUDU"), 1);
        let centers =
            find_plus_signs(6, &[b, 2 * b, b, b, 2 * b, b], "RLRUDU", &CountOptions::default())
                .unwrap();
        assert_eq!(centers, vec![Vertex::ORIGIN]);
    }

    #[test]
    fn test_overflow_reported() {
        assert_eq!(
            count_plus_signs(2, &[u64::MAX, 1], "UR"),
            Err(Error::CoordinateOverflow { index: 0 })
        );
    }

    #[test]
    fn test_options() {
        let lower = CountOptions::new().with_lowercase(true);
        assert_eq!(
            count_plus_signs_with_options(8, &[1, 2, 2, 1, 1, 2, 2, 1], "udUDlrLR", &lower),
            Ok(1)
        );

        let strict = CountOptions::new().with_reject_zero_length(true);
        assert_eq!(
            count_plus_signs_with_options(2, &[1, 0], "UD", &strict),
            Err(Error::ZeroLength { index: 1 })
        );
    }

    #[test]
    fn test_painting_stages() {
        let path = Path::parse(
            9,
            &[6, 3, 4, 5, 1, 6, 3, 3, 4],
            "ULDRULURD",
            &CountOptions::default(),
        )
        .unwrap();
        let painting = Painting::new(&path).unwrap();
        let h = painting.horizontal_centers();
        let v = painting.vertical_centers();
        assert!(h.len() >= 4);
        assert!(v.len() >= 4);
        assert_eq!(painting.count(), 4);
        assert_eq!(painting.centers().len(), 4);
        for c in painting.centers() {
            let p = painting.compression().compress(c).unwrap();
            assert!(h.contains(&p) && v.contains(&p));
        }
    }
}
