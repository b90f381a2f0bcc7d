//! digitwalk-test - Regression test framework for digitwalk
//!
//! Each regression test creates a [`RegParams`], records a numbered series
//! of comparisons, and asserts on [`RegParams::cleanup`] at the end. A
//! failing comparison does not abort the test; all failures are collected
//! and reported together.
//!
//! # Usage
//!
//! ```
//! use digitwalk_test::RegParams;
//!
//! let mut rp = RegParams::new("region_count");
//! rp.compare_counts(1033841, 1033841);
//! assert!(rp.cleanup());
//! ```

mod params;

pub use params::RegParams;
