//! Digit sums and per-axis bounds
//!
//! The admissibility score of a lattice point is the sum of the decimal
//! digits of `|x|` plus the sum of the decimal digits of `|y|`. A point is
//! admissible when its score does not exceed the threshold.
//!
//! [`point_limit`] bounds the search along a single axis: the first integer
//! past the limit already has a digit sum above the threshold, so the whole
//! row and column at that magnitude are inadmissible and act as a wall.

use crate::error::{Error, Result};

/// Sum of the decimal digits of `|value|`.
///
/// Returns 0 for 0. Negative values are handled identically to positive
/// ones, including `i32::MIN`.
///
/// # Examples
///
/// ```
/// use digitwalk_core::digit_sum;
///
/// assert_eq!(digit_sum(59), 14);
/// assert_eq!(digit_sum(-59), 14);
/// ```
pub fn digit_sum(value: i32) -> u32 {
    let mut num = value.unsigned_abs();
    let mut sum = 0;
    while num > 0 {
        sum += num % 10;
        num /= 10;
    }
    sum
}

/// Admissibility score of the point `(x, y)`.
#[inline]
pub fn point_score(x: i32, y: i32) -> u32 {
    digit_sum(x) + digit_sum(y)
}

/// Validate a caller-supplied threshold.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `threshold` is negative.
pub fn check_threshold(threshold: i32) -> Result<u32> {
    u32::try_from(threshold).map_err(|_| {
        Error::InvalidArgument(format!("threshold must be non-negative, got {threshold}"))
    })
}

/// Find the last integer, in the run starting at 0, whose digit sum does not
/// exceed `threshold`.
///
/// The result `L` satisfies `digit_sum(L + 1) > threshold`, and every
/// `0 <= k <= L` has `digit_sum(k) <= threshold`. For example:
///
/// - the limit of 5 is 5
/// - the limit of 10 is 28, because 29 (2 + 9) ends the run
/// - the limit of 25 is 898
///
/// The first integer to exceed the threshold is the smallest integer whose
/// digit sum is `threshold + 1`: the digit `(threshold + 1) % 9` followed by
/// `(threshold + 1) / 9` nines. The limit is one less than that.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] for a negative threshold and
/// [`Error::Overflow`] when the limit (plus the one step past it that the
/// scan loops take) does not fit in an `i32`.
///
/// # Examples
///
/// ```
/// use digitwalk_core::point_limit;
///
/// assert_eq!(point_limit(10).unwrap(), 28);
/// assert_eq!(point_limit(25).unwrap(), 898);
/// ```
pub fn point_limit(threshold: i32) -> Result<i32> {
    let target = check_threshold(threshold)?
        .checked_add(1)
        .ok_or(Error::Overflow("threshold"))?;

    let nines = target / 9;
    let lead = target % 9;

    let mut first: i64 = i64::from(lead);
    for _ in 0..nines {
        first = first
            .checked_mul(10)
            .and_then(|v| v.checked_add(9))
            .filter(|&v| v <= i64::from(i32::MAX))
            .ok_or(Error::Overflow("coordinate bound"))?;
    }

    // `first` is the first coordinate outside the bound; the scan loops step
    // onto it before terminating, so it has to be representable too.
    i32::try_from(first - 1).map_err(|_| Error::Overflow("coordinate bound"))
}
