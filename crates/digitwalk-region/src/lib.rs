//! digitwalk-region - Reachable-region counting for digitwalk
//!
//! This crate counts the lattice points reachable from the origin by unit
//! horizontal and vertical steps through points whose admissibility score
//! does not exceed a threshold:
//!
//! - **Quadrant descriptors** - Column-major traversal of one quadrant
//! - **Connectivity tracking** - Local reachability test replacing a search queue
//! - **Region counting** - Symmetry fast path and four-quadrant reference path
//! - **Seed fill** - Breadth-first flood fill used as an independent check
//!
//! # Examples
//!
//! ## Counting the region
//!
//! ```
//! use digitwalk_region::{CountOptions, count_region, compute};
//!
//! assert_eq!(compute(5).unwrap(), 61);
//!
//! let reference = CountOptions::reference();
//! assert_eq!(count_region(5, &reference).unwrap(), 61);
//! ```
//!
//! ## Per-quadrant breakdown
//!
//! ```
//! use digitwalk_region::{CountOptions, count_region_detailed};
//!
//! let result = count_region_detailed(3, &CountOptions::reference()).unwrap();
//! assert_eq!(result.total, 25);
//! assert_eq!(result.quadrants.len(), 4);
//! ```
//!
//! ## Cross-checking against a flood fill
//!
//! ```
//! use digitwalk_region::{CountOptions, cross_check};
//!
//! assert_eq!(cross_check(9, &CountOptions::default()).unwrap(), 505);
//! ```

pub mod counter;
pub mod error;
pub mod quadrant;
pub mod seedfill;
pub mod tracker;

// Re-export core types
pub use digitwalk_core;

// Re-export error types
pub use error::{RegionError, RegionResult};

// Re-export counting types and functions
pub use counter::{
    CountOptions, DEFAULT_SKIP_THRESHOLD, QuadrantCount, RegionCount, SkipPolicy, compute,
    count_region, count_region_detailed, cross_check, derived_skip_threshold, scan_quadrant,
    scan_quadrant_with,
};

// Re-export traversal types
pub use quadrant::Quadrant;
pub use tracker::ConnectivityTracker;

// Re-export seedfill functions
pub use seedfill::{flood_fill, flood_fill_count};
