//! Error type for stroke validation and path simulation.

use thiserror::Error;

/// Errors reported while validating or simulating a stroke path.
///
/// Degenerate inputs (too few strokes, a path that never leaves a line)
/// are not errors; they simply contain no plus signs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("expected {expected} strokes, got {lengths} lengths and {directions} directions")]
    LengthMismatch {
        expected: usize,
        lengths: usize,
        directions: usize,
    },
    #[error("stroke {index}: invalid direction {found:?} (expected one of U, D, L, R)")]
    InvalidDirection { index: usize, found: char },
    #[error("stroke {index}: zero-length stroke")]
    ZeroLength { index: usize },
    #[error("stroke {index}: coordinate overflow")]
    CoordinateOverflow { index: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
