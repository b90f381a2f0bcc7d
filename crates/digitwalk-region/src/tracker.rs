//! Connectivity tracking for a single quadrant scan
//!
//! A full breadth-first search needs a queue that grows with the region.
//! Scanning a quadrant column by column away from the origin lets a local
//! test stand in for it: a newly admissible point is reachable if the point
//! one step back along the row or the column has already been accepted, or
//! if it sits next to an axis whose point has not been recorded (axis points
//! are reachable through the origin, which is counted separately).

use digitwalk_core::Point;
use std::collections::HashSet;

/// Set of points accepted so far in the current quadrant scan.
///
/// Points are only ever added. A point is present iff it was admissible and
/// connected at the moment it was offered through [`try_accept`].
///
/// [`try_accept`]: ConnectivityTracker::try_accept
#[derive(Debug, Clone, Default)]
pub struct ConnectivityTracker {
    points: HashSet<Point>,
}

impl ConnectivityTracker {
    /// Create an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty tracker with room for `capacity` points.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: HashSet::with_capacity(capacity),
        }
    }

    /// Number of accepted points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn contains(&self, point: &Point) -> bool {
        self.points.contains(point)
    }

    /// Iterate over accepted points in no particular order.
    pub fn points(&self) -> impl Iterator<Item = &Point> {
        self.points.iter()
    }

    /// Forget every point, keeping the allocation for the next quadrant.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Test whether `point` newly connects to the accepted region.
    ///
    /// Returns `false` if the point is already present. Otherwise the point
    /// connects when any of these holds:
    ///
    /// - `step_x != 0` and `(x - step_x, y)` is present
    /// - `step_y != 0` and `(x, y - step_y)` is present
    /// - `x - step_x == 0` and `(0, y)` is absent
    /// - `y - step_y == 0` and `(x, 0)` is absent
    pub fn is_connected(&self, point: Point, step_x: i32, step_y: i32) -> bool {
        if self.contains(&point) {
            return false;
        }

        let Point { x, y } = point;
        let back_x = x.checked_sub(step_x);
        let back_y = y.checked_sub(step_y);

        if step_x != 0 && back_x.is_some_and(|bx| self.contains(&Point::new(bx, y))) {
            return true;
        }
        if step_y != 0 && back_y.is_some_and(|by| self.contains(&Point::new(x, by))) {
            return true;
        }
        if back_x == Some(0) && !self.contains(&Point::new(0, y)) {
            return true;
        }
        back_y == Some(0) && !self.contains(&Point::new(x, 0))
    }

    /// Accept `point` if it is admissible under `threshold` and connected.
    ///
    /// Returns whether the point was added.
    pub fn try_accept(&mut self, point: Point, threshold: u32, step_x: i32, step_y: i32) -> bool {
        if point.is_admissible(threshold) && self.is_connected(point, step_x, step_y) {
            self.points.insert(point)
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_neighbor_connects() {
        let tracker = ConnectivityTracker::new();
        // (0, 5) is not recorded, so the first column connects to the y axis
        assert!(tracker.is_connected(Point::new(1, 5), 1, 1));
        // nothing around (2, 3) yet
        assert!(!tracker.is_connected(Point::new(2, 3), 1, 1));
    }

    #[test]
    fn test_row_and_column_neighbors() {
        let mut tracker = ConnectivityTracker::new();
        assert!(tracker.try_accept(Point::new(1, 0), 25, 1, 1));
        assert!(tracker.try_accept(Point::new(1, 1), 25, 1, 1));

        // column neighbor (1, 1) -> (1, 2)
        assert!(tracker.is_connected(Point::new(1, 2), 1, 1));
        // row neighbor (1, 1) -> (2, 1)
        assert!(tracker.is_connected(Point::new(2, 1), 1, 1));
        // (3, 3) has neither
        assert!(!tracker.is_connected(Point::new(3, 3), 1, 1));
    }

    #[test]
    fn test_already_present_is_not_connected() {
        let mut tracker = ConnectivityTracker::new();
        assert!(tracker.try_accept(Point::new(1, 0), 5, 1, 1));
        assert!(!tracker.is_connected(Point::new(1, 0), 1, 1));
        assert!(!tracker.try_accept(Point::new(1, 0), 5, 1, 1));
        assert_eq!(tracker.len(), 1);
    }

    #[test]
    fn test_inadmissible_rejected() {
        let mut tracker = ConnectivityTracker::new();
        // score 30 > 25, even though it touches the axis
        assert!(!tracker.try_accept(Point::new(1, 99), 25, 1, 1));
        assert!(tracker.is_empty());
    }

    #[test]
    fn test_negative_direction() {
        let mut tracker = ConnectivityTracker::new();
        // quadrant 3 walks (-1, 0), (-1, -1), ...
        assert!(tracker.try_accept(Point::new(-1, 0), 3, -1, -1));
        assert!(tracker.try_accept(Point::new(-1, -1), 3, -1, -1));
        assert!(tracker.is_connected(Point::new(-2, -1), -1, -1));
        assert!(!tracker.is_connected(Point::new(-3, -2), -1, -1));
    }

    #[test]
    fn test_zero_step_column() {
        let tracker = ConnectivityTracker::new();
        // with step_x == 0 on x == 0 the axis clause looks up the point
        // itself, which is never present at this stage
        assert!(tracker.is_connected(Point::new(0, 7), 0, 1));
        assert!(!tracker.is_connected(Point::new(1, 7), 0, 1));
    }

    #[test]
    fn test_clear() {
        let mut tracker = ConnectivityTracker::with_capacity(4);
        tracker.try_accept(Point::new(1, 0), 5, 1, 1);
        tracker.clear();
        assert!(tracker.is_empty());
        assert_eq!(tracker.points().count(), 0);
    }
}
