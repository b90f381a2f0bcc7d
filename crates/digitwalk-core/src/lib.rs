//! Digitwalk Core - Digit sums, bounds and lattice points
//!
//! This crate provides the leaf building blocks used by the region counter:
//!
//! - [`digit_sum`] / [`point_score`] - the admissibility score
//! - [`point_limit`] - the per-axis coordinate bound for a threshold
//! - [`Point`] - a lattice coordinate with structural equality and hashing
//! - [`Error`] / [`Result`] - the shared error type
//!
//! # Example
//!
//! ```
//! use digitwalk_core::{Point, point_limit, point_score};
//!
//! assert_eq!(point_score(59, 79), 30);
//! assert!(Point::new(-5, -7).is_admissible(25));
//! assert_eq!(point_limit(5).unwrap(), 5);
//! ```

pub mod digits;
pub mod error;
pub mod point;

pub use digits::{check_threshold, digit_sum, point_limit, point_score};
pub use error::{Error, Result};
pub use point::Point;
