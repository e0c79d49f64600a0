//! Stroke paths and their simulation into absolute vertices.
//!
//! A path is a turtle-graphics walk: it starts at the origin and every
//! stroke moves the pen a whole number of units up, down, left or right.

use crate::error::{Error, Result};
use crate::CountOptions;

/// Absolute integer position on the painting plane.
///
/// `i64` leaves room for ~2×10^5 strokes of length ~10^9 without
/// overflow; anything past that is caught by [`Vertex::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Vertex {
    pub x: i64,
    pub y: i64,
}

impl Vertex {
    pub const ORIGIN: Vertex = Vertex { x: 0, y: 0 };

    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Move along `stroke`, returning `None` if a coordinate would leave
    /// the `i64` range.
    pub fn step(self, stroke: Stroke) -> Option<Self> {
        let len = i64::try_from(stroke.length).ok()?;
        let (x, y) = match stroke.direction {
            Direction::Up => (self.x, self.y.checked_add(len)?),
            Direction::Down => (self.x, self.y.checked_sub(len)?),
            Direction::Left => (self.x.checked_sub(len)?, self.y),
            Direction::Right => (self.x.checked_add(len)?, self.y),
        };
        Some(Self { x, y })
    }
}

/// Stroke direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards +y (`U`)
    Up,
    /// Towards -y (`D`)
    Down,
    /// Towards -x (`L`)
    Left,
    /// Towards +x (`R`)
    Right,
}

impl Direction {
    /// Parse a direction letter. Lowercase letters are only accepted when
    /// `lowercase` is set.
    pub fn from_char(c: char, lowercase: bool) -> Option<Self> {
        match c {
            'U' => Some(Direction::Up),
            'D' => Some(Direction::Down),
            'L' => Some(Direction::Left),
            'R' => Some(Direction::Right),
            'u' | 'd' | 'l' | 'r' if lowercase => Self::from_char(c.to_ascii_uppercase(), false),
            _ => None,
        }
    }
}

/// A single brush stroke
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stroke {
    pub direction: Direction,
    pub length: u64,
}

impl Stroke {
    pub fn new(direction: Direction, length: u64) -> Self {
        Self { direction, length }
    }

    /// Returns true if this stroke paints nothing
    pub fn is_degenerate(&self) -> bool {
        self.length == 0
    }
}

/// Ordered sequence of strokes starting at the origin
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Path {
    strokes: Vec<Stroke>,
}

impl Path {
    /// Validate raw stroke input and build a path from it.
    ///
    /// `lengths` and `directions` must both hold exactly `stroke_count`
    /// entries. Every direction letter is checked before anything else
    /// happens, so a bad letter at the end of a long path still fails
    /// without simulating it.
    pub fn parse(
        stroke_count: usize,
        lengths: &[u64],
        directions: &str,
        options: &CountOptions,
    ) -> Result<Self> {
        let direction_count = directions.chars().count();
        if lengths.len() != stroke_count || direction_count != stroke_count {
            return Err(Error::LengthMismatch {
                expected: stroke_count,
                lengths: lengths.len(),
                directions: direction_count,
            });
        }

        let strokes = lengths
            .iter()
            .zip(directions.chars())
            .enumerate()
            .map(|(index, (&length, c))| {
                let direction = Direction::from_char(c, options.lowercase)
                    .ok_or(Error::InvalidDirection { index, found: c })?;
                let stroke = Stroke::new(direction, length);
                if stroke.is_degenerate() && options.reject_zero_length {
                    return Err(Error::ZeroLength { index });
                }
                Ok(stroke)
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { strokes })
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    /// Simulate the walk: `len() + 1` vertices, the first being the origin.
    pub fn vertices(&self) -> Result<Vec<Vertex>> {
        let mut vertices = Vec::with_capacity(self.strokes.len() + 1);
        let mut current = Vertex::ORIGIN;
        vertices.push(current);

        for (index, &stroke) in self.strokes.iter().enumerate() {
            current = current
                .step(stroke)
                .ok_or(Error::CoordinateOverflow { index })?;
            vertices.push(current);
        }

        Ok(vertices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(lengths: &[u64], directions: &str) -> Result<Path> {
        Path::parse(lengths.len(), lengths, directions, &CountOptions::default())
    }

    #[test]
    fn test_direction_from_char() {
        assert_eq!(Direction::from_char('U', false), Some(Direction::Up));
        assert_eq!(Direction::from_char('R', false), Some(Direction::Right));
        assert_eq!(Direction::from_char('u', false), None);
        assert_eq!(Direction::from_char('u', true), Some(Direction::Up));
        assert_eq!(Direction::from_char('x', true), None);
    }

    #[test]
    fn test_vertices() {
        let path = parse(&[6, 3, 4], "ULD").unwrap();
        assert_eq!(
            path.vertices().unwrap(),
            vec![
                Vertex::new(0, 0),
                Vertex::new(0, 6),
                Vertex::new(-3, 6),
                Vertex::new(-3, 2),
            ]
        );
    }

    #[test]
    fn test_zero_length_repeats_vertex() {
        let path = parse(&[2, 0, 1], "RUD").unwrap();
        let vertices = path.vertices().unwrap();
        assert_eq!(vertices.len(), 4);
        assert_eq!(vertices[1], vertices[2]);
        assert!(path.strokes()[1].is_degenerate());
    }

    #[test]
    fn test_invalid_direction() {
        assert_eq!(
            parse(&[1, 1, 1], "UXD"),
            Err(Error::InvalidDirection {
                index: 1,
                found: 'X'
            })
        );
        // Case-sensitive by default
        assert_eq!(
            parse(&[1], "r"),
            Err(Error::InvalidDirection {
                index: 0,
                found: 'r'
            })
        );
    }

    #[test]
    fn test_length_mismatch() {
        let err = Path::parse(3, &[1, 2], "UDL", &CountOptions::default()).unwrap_err();
        assert_eq!(
            err,
            Error::LengthMismatch {
                expected: 3,
                lengths: 2,
                directions: 3
            }
        );
        assert!(Path::parse(2, &[1, 2], "UDL", &CountOptions::default()).is_err());
    }

    #[test]
    fn test_reject_zero_length() {
        let options = CountOptions::new().with_reject_zero_length(true);
        assert_eq!(
            Path::parse(2, &[1, 0], "UD", &options),
            Err(Error::ZeroLength { index: 1 })
        );
    }

    #[test]
    fn test_large_lengths() {
        let big = 1_000_000_000;
        let path = parse(&[big; 4], "RRRR").unwrap();
        let last = *path.vertices().unwrap().last().unwrap();
        assert_eq!(last, Vertex::new(4 * big as i64, 0));
    }

    #[test]
    fn test_coordinate_overflow() {
        let path = parse(&[u64::MAX], "U").unwrap();
        assert_eq!(path.vertices(), Err(Error::CoordinateOverflow { index: 0 }));

        let half = i64::MAX as u64;
        let path = parse(&[half, half], "LL").unwrap();
        assert_eq!(path.vertices(), Err(Error::CoordinateOverflow { index: 1 }));
    }
}
