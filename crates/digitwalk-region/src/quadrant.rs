//! Quadrant descriptors
//!
//! A quadrant is traversed in column-major order starting next to the origin
//! and stepping away from it. The four presets each own one half-axis, so
//! together with the origin they tile the plane without overlap:
//!
//! | Preset     | Start    | Step       | Covers                |
//! |------------|----------|------------|-----------------------|
//! | Quadrant 1 | (1, 0)   | (+1, +1)   | x > 0, y >= 0         |
//! | Quadrant 2 | (0, 1)   | (-1, +1)   | x <= 0, y > 0         |
//! | Quadrant 3 | (-1, 0)  | (-1, -1)   | x < 0, y <= 0         |
//! | Quadrant 4 | (0, -1)  | (+1, -1)   | x >= 0, y < 0         |

use crate::error::{RegionError, RegionResult};
use digitwalk_core::Point;
use std::fmt;

/// An immutable traversal origin and step direction pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Quadrant {
    label: &'static str,
    start_x: i32,
    start_y: i32,
    step_x: i32,
    step_y: i32,
}

impl Quadrant {
    /// Representative quadrant for the symmetry fast path.
    pub const FIRST: Quadrant = Quadrant::preset("Quadrant 1", 1, 0, 1, 1);

    /// All four quadrants, in scan order.
    pub const ALL: [Quadrant; 4] = [
        Quadrant::FIRST,
        Quadrant::preset("Quadrant 2", 0, 1, -1, 1),
        Quadrant::preset("Quadrant 3", -1, 0, -1, -1),
        Quadrant::preset("Quadrant 4", 0, -1, 1, -1),
    ];

    const fn preset(
        label: &'static str,
        start_x: i32,
        start_y: i32,
        step_x: i32,
        step_y: i32,
    ) -> Self {
        Self {
            label,
            start_x,
            start_y,
            step_x,
            step_y,
        }
    }

    /// Create a custom quadrant descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::InvalidQuadrant`] unless every start and step
    /// component lies in {-1, 0, 1} and the steps are not both zero.
    pub fn new(
        label: &'static str,
        start_x: i32,
        start_y: i32,
        step_x: i32,
        step_y: i32,
    ) -> RegionResult<Self> {
        let unit = |v: i32| (-1..=1).contains(&v);
        let units = unit(start_x) && unit(start_y) && unit(step_x) && unit(step_y);
        if !units || (step_x == 0 && step_y == 0) {
            return Err(RegionError::InvalidQuadrant {
                label,
                start_x,
                start_y,
                step_x,
                step_y,
            });
        }
        Ok(Self::preset(label, start_x, start_y, step_x, step_y))
    }

    /// Human-readable name, e.g. "Quadrant 1"
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// First point of the traversal
    pub fn start(&self) -> Point {
        Point::new(self.start_x, self.start_y)
    }

    pub fn start_x(&self) -> i32 {
        self.start_x
    }

    pub fn start_y(&self) -> i32 {
        self.start_y
    }

    /// Horizontal step: -1, 0 or +1
    pub fn step_x(&self) -> i32 {
        self.step_x
    }

    /// Vertical step: -1, 0 or +1
    pub fn step_y(&self) -> i32 {
        self.step_y
    }

    /// Column coordinates visited by the outer loop, while `|x| <= bound`.
    pub fn columns(&self, bound: i32) -> impl Iterator<Item = i32> {
        axis_walk(self.start_x, self.step_x, bound)
    }

    /// Row coordinates visited within each column, while `|y| <= bound`.
    pub fn rows(&self, bound: i32) -> impl Iterator<Item = i32> {
        axis_walk(self.start_y, self.step_y, bound)
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label)
    }
}

/// Walk from `start` by `step` while the magnitude stays within `bound`.
///
/// A zero step visits `start` alone.
fn axis_walk(start: i32, step: i32, bound: i32) -> impl Iterator<Item = i32> {
    let limit = bound.unsigned_abs();
    std::iter::successors(Some(start), move |&v| v.checked_add(step))
        .take(if step == 0 { 1 } else { usize::MAX })
        .take_while(move |v| bound >= 0 && v.unsigned_abs() <= limit)
}
