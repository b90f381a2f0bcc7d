//! Digitwalk - Count the lattice points reachable under a digit-sum limit
//!
//! Starting at the origin and moving one unit left, right, up or down at a
//! time, a walker may only stand on points `(x, y)` where the decimal digits
//! of `|x|` and `|y|` add up to at most a threshold. Digitwalk counts how many
//! points the walker can reach, the origin included.
//!
//! # Overview
//!
//! - [`digit_sum`], [`point_score`], [`point_limit`] and [`Point`] come from
//!   `digitwalk-core`
//! - [`region`] holds the quadrant scan, its options and the flood-fill check
//! - [`compute`] runs the default count
//!
//! The count is synchronous and single-threaded; callers that need it off a
//! UI thread run it on whatever executor they already use.
//!
//! # Example
//!
//! ```
//! use digitwalk::{Point, compute};
//!
//! assert!(!Point::new(59, 79).is_admissible(25));
//! assert!(Point::new(-5, -7).is_admissible(25));
//! assert_eq!(compute(10).unwrap(), 1121);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use digitwalk_core::*;

// Re-export the region crate as a module to keep its error type separate
pub use digitwalk_region as region;

pub use digitwalk_region::compute;
