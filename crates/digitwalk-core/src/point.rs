//! Point - Integer lattice coordinate
//!
//! A plain value type: two points are equal, and hash identically, iff both
//! coordinates match.

use crate::digits::point_score;
use std::fmt;

/// A point on the integer lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Point {
    /// X coordinate
    pub x: i32,
    /// Y coordinate
    pub y: i32,
}

impl Point {
    /// The origin `(0, 0)`.
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Admissibility score of this point.
    #[inline]
    pub fn score(&self) -> u32 {
        point_score(self.x, self.y)
    }

    /// Whether the score does not exceed `threshold`.
    #[inline]
    pub fn is_admissible(&self, threshold: u32) -> bool {
        self.score() <= threshold
    }

    /// Point offset by `(dx, dy)`, or `None` on overflow.
    pub fn checked_offset(&self, dx: i32, dy: i32) -> Option<Point> {
        Some(Point::new(self.x.checked_add(dx)?, self.y.checked_add(dy)?))
    }

    /// The four 4-connected neighbors, skipping any that would overflow.
    pub fn neighbors(self) -> impl Iterator<Item = Point> {
        [(1, 0), (-1, 0), (0, 1), (0, -1)]
            .into_iter()
            .filter_map(move |(dx, dy)| self.checked_offset(dx, dy))
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for (i32, i32) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
