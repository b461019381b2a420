//! Differential tests against an exhaustive reference.
//!
//! The recursive solver must agree with a pair-by-pair scan on every
//! input: same minimum distance, same tie group, no matter how the input
//! was ordered. The reference here is written independently of the
//! library's own brute-force path, which is itself compared as well.

use std::collections::BTreeSet;

use proptest::prelude::*;
use rand::prelude::*;
use rand::Rng;

use closepair::{
    brute_force, closest_pair, Axis, Euclidean, Haversine, Metric, MetricKind, PairResult, Point,
};

// Reference exhaustive scan for comparison
fn reference<M: Metric>(points: &[Point], metric: &M) -> (f64, BTreeSet<(String, String)>) {
    let mut best = f64::INFINITY;
    let mut pairs = BTreeSet::new();
    for (i, p) in points.iter().enumerate() {
        for q in &points[i + 1..] {
            let d = metric.distance(p, q, Axis::Full);
            if d < best {
                best = d;
                pairs.clear();
            }
            if d <= best {
                pairs.insert(label_key(p, q));
            }
        }
    }
    (metric.finalize(best), pairs)
}

fn label_key(p: &Point, q: &Point) -> (String, String) {
    if p.label <= q.label {
        (p.label.clone(), q.label.clone())
    } else {
        (q.label.clone(), p.label.clone())
    }
}

fn label_set(result: &PairResult) -> BTreeSet<(String, String)> {
    result.pairs.iter().map(|(p, q)| label_key(p, q)).collect()
}

fn to_points(coords: Vec<(f64, f64)>) -> Vec<Point> {
    coords
        .into_iter()
        .enumerate()
        .map(|(i, (x, y))| Point::new(x, y, format!("p{i}")))
        .collect()
}

/// Small integer grid: coordinate collisions and exact ties are common.
fn grid_points(max_len: usize) -> impl Strategy<Value = Vec<Point>> {
    proptest::collection::vec((0..8i32, 0..8i32), 2..=max_len)
        .prop_map(|coords| to_points(coords.into_iter().map(|(x, y)| (f64::from(x), f64::from(y))).collect()))
}

/// Continuous planar coordinates: arbitrary geometry, ties essentially absent.
fn planar_points(max_len: usize) -> impl Strategy<Value = Vec<Point>> {
    proptest::collection::vec((-1000.0f64..1000.0, -1000.0f64..1000.0), 2..=max_len)
        .prop_map(to_points)
}

/// A city-scale geographic window (lon, lat in degrees).
fn regional_geo_points(max_len: usize) -> impl Strategy<Value = Vec<Point>> {
    proptest::collection::vec((5.0f64..10.0, 45.0f64..50.0), 2..=max_len).prop_map(to_points)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    /// Tie-heavy grids: the solver reports the exact minimum and the
    /// complete tie group.
    #[test]
    fn matches_reference_on_tie_heavy_grids(points in grid_points(40)) {
        let (want_d, want_pairs) = reference(&points, &Euclidean);
        let found = closest_pair(&points, MetricKind::Euclidean).unwrap();
        prop_assert_eq!(found.distance, want_d);
        prop_assert_eq!(label_set(&found), want_pairs);
    }

    /// Continuous planar inputs.
    #[test]
    fn matches_reference_on_planar_points(points in planar_points(80)) {
        let (want_d, want_pairs) = reference(&points, &Euclidean);
        let found = closest_pair(&points, MetricKind::Euclidean).unwrap();
        prop_assert_eq!(found.distance, want_d);
        prop_assert_eq!(label_set(&found), want_pairs);
    }

    /// Geodesic inputs over a regional window.
    #[test]
    fn matches_reference_on_geographic_points(points in regional_geo_points(32)) {
        let (want_d, want_pairs) = reference(&points, &Haversine);
        let found = closest_pair(&points, MetricKind::Haversine).unwrap();
        prop_assert_eq!(found.distance, want_d);
        prop_assert_eq!(label_set(&found), want_pairs);
    }

    /// The library's own exhaustive path agrees in full, not just on the
    /// distance.
    #[test]
    fn matches_crate_oracle(points in grid_points(40)) {
        let fast = closest_pair(&points, MetricKind::Euclidean).unwrap();
        let exact = brute_force(&points, MetricKind::Euclidean).unwrap();
        prop_assert_eq!(fast, exact);
    }

    /// Input order is invisible: shuffled input produces the identical
    /// result, pair order included.
    #[test]
    fn reordering_is_invisible(points in grid_points(32), seed in any::<u64>()) {
        let mut shuffled = points.clone();
        shuffled.shuffle(&mut StdRng::seed_from_u64(seed));

        let a = closest_pair(&points, MetricKind::Euclidean).unwrap();
        let b = closest_pair(&shuffled, MetricKind::Euclidean).unwrap();
        prop_assert_eq!(a, b);
    }

    /// Two- and three-point inputs take the exhaustive path directly and
    /// must match it bit for bit.
    #[test]
    fn base_case_inputs_match_the_oracle_bit_for_bit(points in planar_points(3)) {
        let fast = closest_pair(&points, MetricKind::Euclidean).unwrap();
        let exact = brute_force(&points, MetricKind::Euclidean).unwrap();
        prop_assert_eq!(fast.distance.to_bits(), exact.distance.to_bits());
        prop_assert_eq!(fast.pairs, exact.pairs);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Seeded sweeps at sizes past what proptest shrinks comfortably
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn matches_oracle_at_larger_planar_sizes() {
    let mut rng = StdRng::seed_from_u64(42);

    for &n in &[64, 127, 256, 301] {
        let points: Vec<Point> = (0..n)
            .map(|i| {
                Point::new(
                    rng.gen_range(-500.0..500.0),
                    rng.gen_range(-500.0..500.0),
                    format!("p{i}"),
                )
            })
            .collect();

        let fast = closest_pair(&points, MetricKind::Euclidean).unwrap();
        let exact = brute_force(&points, MetricKind::Euclidean).unwrap();
        assert_eq!(fast, exact, "euclidean mismatch at n = {n}");
    }
}

#[test]
fn matches_oracle_at_larger_geographic_sizes() {
    let mut rng = StdRng::seed_from_u64(7);

    for &n in &[64, 128, 250] {
        let points: Vec<Point> = (0..n)
            .map(|i| {
                Point::new(
                    rng.gen_range(5.0..10.0),
                    rng.gen_range(45.0..50.0),
                    format!("p{i}"),
                )
            })
            .collect();

        let fast = closest_pair(&points, MetricKind::Haversine).unwrap();
        let exact = brute_force(&points, MetricKind::Haversine).unwrap();
        assert_eq!(fast, exact, "haversine mismatch at n = {n}");
    }
}

#[test]
fn duplicate_coordinates_in_bulk_stay_exact() {
    // Coordinates drawn from a tiny grid force dense tie groups and many
    // zero-distance pairs at once.
    let mut rng = StdRng::seed_from_u64(99);

    for &n in &[40, 100, 200] {
        let points: Vec<Point> = (0..n)
            .map(|i| {
                Point::new(
                    f64::from(rng.gen_range(0..6)),
                    f64::from(rng.gen_range(0..6)),
                    format!("p{i}"),
                )
            })
            .collect();

        let fast = closest_pair(&points, MetricKind::Euclidean).unwrap();
        let exact = brute_force(&points, MetricKind::Euclidean).unwrap();
        assert_eq!(fast, exact, "tie-group mismatch at n = {n}");
        assert_eq!(fast.distance, 0.0, "{n} points in 36 cells must collide");
    }
}
