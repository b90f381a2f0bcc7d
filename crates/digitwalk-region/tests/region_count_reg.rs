//! Region count regression test
//!
//! Checks the canonical threshold-25 count on every path, and the
//! symmetry, monotonicity and origin-inclusion properties over a range of
//! thresholds.
//!
//! Run with:
//! ```
//! cargo test -p digitwalk-region --test region_count_reg
//! ```

use digitwalk_region::{
    CountOptions, SkipPolicy, compute, count_region, count_region_detailed,
};
use digitwalk_test::RegParams;

/// Known totals from an exhaustive search
const KNOWN: [(i32, u64); 8] = [
    (0, 1),
    (1, 5),
    (8, 145),
    (9, 505),
    (10, 1121),
    (12, 3245),
    (17, 14785),
    (19, 102485),
];

#[test]
fn region_count_reg() {
    let mut rp = RegParams::new("region_count");

    // Index 1: fast path with default options
    let total = compute(25).expect("compute(25)");
    eprintln!("compute(25) = {total}");
    rp.compare_counts(1033841, total);

    // Index 2: reference path
    let reference = count_region(25, &CountOptions::reference()).expect("reference");
    rp.compare_counts(1033841, reference);

    // Index 3: exact column scans
    let exact = count_region(25, &CountOptions::new().with_skip(SkipPolicy::Disabled))
        .expect("no skip");
    rp.compare_counts(1033841, exact);

    // Index 4-11: known totals
    for (threshold, expected) in KNOWN {
        rp.compare_counts(expected, compute(threshold).unwrap());
    }

    assert!(rp.cleanup());
}

#[test]
fn region_count_detail_reg() {
    let mut rp = RegParams::new("region_count_detail");

    let detail = count_region_detailed(25, &CountOptions::reference()).unwrap();
    rp.compare_counts(898, detail.bound as u64);
    rp.compare_counts(4, detail.quadrants.len() as u64);
    for q in &detail.quadrants {
        eprintln!("{}: {} points, {} cut short", q.label, q.count, q.columns_cut_short);
        rp.compare_counts(258460, q.count);
    }

    assert!(rp.cleanup());
}

#[test]
fn region_symmetry_reg() {
    let mut rp = RegParams::new("region_symmetry");

    for threshold in 0..=19 {
        let fast = count_region(threshold, &CountOptions::new()).unwrap();
        let reference = count_region(threshold, &CountOptions::reference()).unwrap();
        rp.compare_counts(reference, fast);
    }

    assert!(rp.cleanup());
}

#[test]
fn region_monotonic_reg() {
    let mut rp = RegParams::new("region_monotonic");

    let mut previous = 0u64;
    for threshold in 0..=20 {
        let total = compute(threshold).unwrap();
        rp.check(total >= 1, "origin is always counted");
        rp.check(
            total >= previous,
            &format!("count shrank at threshold {threshold}"),
        );
        previous = total;
    }

    assert!(rp.cleanup());
}
