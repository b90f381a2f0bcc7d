//! Region counting
//!
//! Counts the lattice points reachable from the origin by unit steps through
//! admissible points. Each quadrant is scanned column by column with a
//! [`ConnectivityTracker`] standing in for a search queue; the origin is
//! never scanned and is added once at the end.
//!
//! Admissibility and the connectivity rule are both invariant under
//! reflection across the axes, so the four quadrants hold the same number of
//! points. The fast path scans [`Quadrant::FIRST`] and multiplies by four;
//! the reference path scans all four quadrants and is kept as the oracle for
//! the fast path.

use crate::error::{RegionError, RegionResult};
use crate::quadrant::Quadrant;
use crate::seedfill::flood_fill_count;
use crate::tracker::ConnectivityTracker;
use digitwalk_core::{Error, Point, check_threshold, digit_sum, point_limit};
use log::debug;

/// Inadmissible-run length tuned by hand for threshold 25.
///
/// Only usable through [`SkipPolicy::Fixed`]. It undercounts from threshold
/// 27 on (3417397 instead of 4216357 at 27); check any other threshold with
/// [`cross_check`] before relying on it.
pub const DEFAULT_SKIP_THRESHOLD: u32 = 99;

/// Highest digit sum any budget needs to distinguish; no `i32` exceeds 47.
const MAX_COLUMN_BUDGET: u32 = 64;

/// Early-exit policy for the inner (column) loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SkipPolicy {
    /// Scan every column up to the bound
    Disabled,
    /// Skip length from [`derived_skip_threshold`]; counts exactly like
    /// `Disabled`
    #[default]
    Derived,
    /// Leave a column once more than this many consecutive inadmissible
    /// points have been seen in it. May undercount when the run is shorter
    /// than a gap inside some column.
    Fixed(u32),
}

impl SkipPolicy {
    /// Run length that ends a column, or `None` to scan columns in full.
    pub fn resolve(self, threshold: u32, bound: i32) -> Option<u32> {
        match self {
            SkipPolicy::Disabled => None,
            SkipPolicy::Derived => Some(derived_skip_threshold(threshold, bound)),
            SkipPolicy::Fixed(limit) => Some(limit),
        }
    }
}

/// Longest run of inadmissible rows that still has an admissible row after
/// it, over every column the scan can visit.
///
/// A column whose `|x|` has digit sum `d` admits row `y` iff
/// `digit_sum(y) <= threshold - d`, so the columns differ only in that
/// budget. For each budget the gaps between admissible rows in
/// `-1..=bound` are measured; rows are walked from a start in {-1, 0, 1}
/// in either direction, and the score is symmetric in `y`, so every column
/// scan sees a suffix of one of these sequences. A run longer than the
/// result can only be the tail of a column, which makes leaving the column
/// at that point exact.
///
/// # Examples
///
/// ```
/// use digitwalk_region::counter::derived_skip_threshold;
///
/// assert_eq!(derived_skip_threshold(9, 18), 8);
/// assert_eq!(derived_skip_threshold(27, 1998), 899);
/// ```
pub fn derived_skip_threshold(threshold: u32, bound: i32) -> u32 {
    let budgets = threshold.min(MAX_COLUMN_BUDGET) as usize;
    // last admissible row seen per budget; -2 sits just before the first row
    let mut last = vec![-2i64; budgets + 1];
    let mut longest = 0i64;

    for y in -1..=bound {
        let score = digit_sum(y) as usize;
        if score > budgets {
            continue;
        }
        let row = i64::from(y);
        for prev in &mut last[score..] {
            longest = longest.max(row - *prev - 1);
            *prev = row;
        }
    }

    u32::try_from(longest).unwrap_or(u32::MAX)
}

/// Options for region counting
#[derive(Debug, Clone)]
pub struct CountOptions {
    /// Scan one quadrant and multiply by four (default) instead of scanning
    /// all four
    pub use_symmetry: bool,
    /// Column early-exit policy
    pub skip: SkipPolicy,
}

impl Default for CountOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl CountOptions {
    /// Options for the fast path with a skip length derived per threshold
    ///
    /// The derived skip never changes the count. Swapping in
    /// [`SkipPolicy::Fixed`] trades that guarantee for speed: a fixed run
    /// shorter than the gaps inside a column silently undercounts.
    pub fn new() -> Self {
        Self {
            use_symmetry: true,
            skip: SkipPolicy::default(),
        }
    }

    /// Options for the reference path: all four quadrants
    pub fn reference() -> Self {
        Self::new().with_symmetry(false)
    }

    /// Enable or disable the symmetry fast path
    pub fn with_symmetry(mut self, use_symmetry: bool) -> Self {
        self.use_symmetry = use_symmetry;
        self
    }

    /// Set the column early-exit policy
    pub fn with_skip(mut self, skip: SkipPolicy) -> Self {
        self.skip = skip;
        self
    }
}

/// Result of scanning a single quadrant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuadrantCount {
    /// Label of the scanned quadrant
    pub label: &'static str,
    /// Number of accepted points
    pub count: u64,
    /// Columns left early by the skip policy
    pub columns_cut_short: u64,
}

/// Result of a full region count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionCount {
    /// Threshold the count was computed for
    pub threshold: u32,
    /// Per-axis coordinate bound derived from the threshold
    pub bound: i32,
    /// Total reachable points, origin included
    pub total: u64,
    /// Per-quadrant results; one entry on the fast path, four otherwise
    pub quadrants: Vec<QuadrantCount>,
}

/// Scan one quadrant with a fresh tracker.
///
/// # Arguments
///
/// * `quadrant` - Quadrant to traverse
/// * `threshold` - Admissibility ceiling
/// * `bound` - Per-axis coordinate bound, see [`point_limit`]
/// * `skip` - Column early-exit policy
///
/// # Errors
///
/// Returns [`RegionError::InvalidParameters`] for a negative bound.
pub fn scan_quadrant(
    quadrant: &Quadrant,
    threshold: u32,
    bound: i32,
    skip: SkipPolicy,
) -> RegionResult<QuadrantCount> {
    let mut tracker = ConnectivityTracker::new();
    scan_quadrant_with(&mut tracker, quadrant, threshold, bound, skip)
}

/// Scan one quadrant, accumulating accepted points into `tracker`.
///
/// The tracker is expected to be empty; the returned count is its size
/// after the scan.
///
/// # Errors
///
/// Returns [`RegionError::InvalidParameters`] for a negative bound, and
/// [`Error::InvariantViolation`] if the tracker was not empty.
pub fn scan_quadrant_with(
    tracker: &mut ConnectivityTracker,
    quadrant: &Quadrant,
    threshold: u32,
    bound: i32,
    skip: SkipPolicy,
) -> RegionResult<QuadrantCount> {
    if bound < 0 {
        return Err(RegionError::InvalidParameters(format!(
            "bound must be non-negative, got {bound}"
        )));
    }
    if !tracker.is_empty() {
        return Err(Error::InvariantViolation(format!(
            "tracker holds {} points before scanning {}",
            tracker.len(),
            quadrant
        ))
        .into());
    }

    let (step_x, step_y) = (quadrant.step_x(), quadrant.step_y());
    let skip_after = skip.resolve(threshold, bound);
    let mut columns_cut_short = 0u64;

    for x in quadrant.columns(bound) {
        let mut invalid_run = 0u32;
        for y in quadrant.rows(bound) {
            let point = Point::new(x, y);
            if point.is_admissible(threshold) {
                invalid_run = 0;
                tracker.try_accept(point, threshold, step_x, step_y);
            } else {
                invalid_run += 1;
                if let Some(limit) = skip_after {
                    if invalid_run > limit {
                        columns_cut_short += 1;
                        break;
                    }
                }
            }
        }
    }

    let count = QuadrantCount {
        label: quadrant.label(),
        count: tracker.len() as u64,
        columns_cut_short,
    };
    debug!(
        "{}: {} points, {} columns cut short (threshold {}, bound {})",
        count.label, count.count, count.columns_cut_short, threshold, bound
    );
    Ok(count)
}

/// Count the reachable region, with a per-quadrant breakdown.
///
/// # Errors
///
/// Returns a core [`Error::InvalidArgument`] for a negative threshold and
/// [`Error::Overflow`] when the bound or the total does not fit.
pub fn count_region_detailed(
    threshold: i32,
    options: &CountOptions,
) -> RegionResult<RegionCount> {
    let max_sum = check_threshold(threshold)?;
    let bound = point_limit(threshold)?;

    // resolve once rather than per quadrant
    let skip = match options.skip.resolve(max_sum, bound) {
        Some(limit) => SkipPolicy::Fixed(limit),
        None => SkipPolicy::Disabled,
    };

    let selected: &[Quadrant] = if options.use_symmetry {
        std::slice::from_ref(&Quadrant::FIRST)
    } else {
        &Quadrant::ALL
    };
    debug!(
        "counting region: threshold {}, bound {}, {} quadrant(s), skip {:?} -> {:?}",
        max_sum,
        bound,
        selected.len(),
        options.skip,
        skip
    );

    let mut tracker = ConnectivityTracker::new();
    let mut quadrants = Vec::with_capacity(selected.len());
    for quadrant in selected {
        tracker.clear();
        quadrants.push(scan_quadrant_with(
            &mut tracker,
            quadrant,
            max_sum,
            bound,
            skip,
        )?);
    }

    let scanned = quadrants
        .iter()
        .try_fold(0u64, |acc, q| acc.checked_add(q.count))
        .ok_or(Error::Overflow("quadrant total"))?;
    let scanned = if options.use_symmetry {
        scanned
            .checked_mul(4)
            .ok_or(Error::Overflow("symmetric total"))?
    } else {
        scanned
    };
    // the origin is never visited by a quadrant scan
    let total = scanned
        .checked_add(1)
        .ok_or(Error::Overflow("region total"))?;

    debug!("threshold {}: {} reachable points", max_sum, total);
    Ok(RegionCount {
        threshold: max_sum,
        bound,
        total,
        quadrants,
    })
}

/// Count the reachable region, origin included.
///
/// # Examples
///
/// ```
/// use digitwalk_region::{CountOptions, count_region};
///
/// assert_eq!(count_region(0, &CountOptions::default()).unwrap(), 1);
/// assert_eq!(count_region(10, &CountOptions::new()).unwrap(), 1121);
/// ```
pub fn count_region(threshold: i32, options: &CountOptions) -> RegionResult<u64> {
    Ok(count_region_detailed(threshold, options)?.total)
}

/// Count the reachable region with the default options: symmetry fast path
/// and a skip length derived from the threshold.
///
/// The result is exact for every threshold whose bound fits. The hand-tuned
/// [`DEFAULT_SKIP_THRESHOLD`] is not used here because it undercounts from
/// threshold 27 on; pass it explicitly through [`count_region`] only for
/// thresholds already checked with [`cross_check`].
pub fn compute(threshold: i32) -> RegionResult<u64> {
    count_region(threshold, &CountOptions::new())
}

/// Count the region three ways and require them to agree.
///
/// Runs the fast path and the reference path with `options.skip`, and a
/// breadth-first flood fill from the origin. Returns the agreed total.
///
/// # Errors
///
/// Returns [`RegionError::CountMismatch`] naming the first method that
/// disagrees with the flood fill, plus any error from the counts themselves.
pub fn cross_check(threshold: i32, options: &CountOptions) -> RegionResult<u64> {
    let expected = flood_fill_count(threshold)?;

    let fast = count_region(threshold, &options.clone().with_symmetry(true))?;
    if fast != expected {
        return Err(RegionError::CountMismatch {
            method: "symmetric scan",
            expected,
            actual: fast,
        });
    }

    let reference = count_region(threshold, &options.clone().with_symmetry(false))?;
    if reference != expected {
        return Err(RegionError::CountMismatch {
            method: "four-quadrant scan",
            expected,
            actual: reference,
        });
    }

    Ok(expected)
}
