//! Seed fill from the origin
//!
//! A plain 4-connected breadth-first flood fill over the admissible
//! predicate. Its memory grows with the whole region, so it is only meant
//! for small thresholds, where it serves as the independent check on the
//! quadrant scan in [`crate::counter`].

use crate::error::RegionResult;
use digitwalk_core::{Point, check_threshold, point_limit};
use log::debug;
use std::collections::{HashSet, VecDeque};

/// Flood fill the admissible region from the origin.
///
/// Returns every reachable point, the origin included. The fill is confined
/// to `|x|, |y| <= bound`; the row and column just past the bound are
/// entirely inadmissible, so nothing reachable lies outside.
///
/// # Errors
///
/// Returns an error if the threshold is negative or its bound overflows.
pub fn flood_fill(threshold: i32) -> RegionResult<HashSet<Point>> {
    let max_sum = check_threshold(threshold)?;
    let bound = point_limit(threshold)?;
    let limit = bound.unsigned_abs();
    let within = |p: &Point| p.x.unsigned_abs() <= limit && p.y.unsigned_abs() <= limit;

    let mut filled = HashSet::new();
    let mut queue = VecDeque::new();
    filled.insert(Point::ORIGIN);
    queue.push_back(Point::ORIGIN);

    while let Some(p) = queue.pop_front() {
        for n in p.neighbors() {
            if within(&n) && n.is_admissible(max_sum) && filled.insert(n) {
                queue.push_back(n);
            }
        }
    }

    debug!("flood fill: threshold {}, {} points", max_sum, filled.len());
    Ok(filled)
}

/// Number of points reachable from the origin, the origin included.
pub fn flood_fill_count(threshold: i32) -> RegionResult<u64> {
    Ok(flood_fill(threshold)?.len() as u64)
}
