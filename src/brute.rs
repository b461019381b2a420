//! Exhaustive closest-pair scan.
//!
//! Every unordered pair of the range is compared; nothing is pruned. The
//! recursion uses this on leaf ranges, and [`brute_force`] exposes it
//! standalone as the exact oracle the divide-and-conquer path is checked
//! against.

use crate::error::ClosestPairError;
use crate::metric::{Axis, Euclidean, Haversine, Metric, MetricKind};
use crate::point::{Point, PointSet};
use crate::result::{PairResult, TieSet};

/// Solve the closest-pair problem by comparing all `C(k, 2)` pairs.
///
/// Same validation, tie rule and reported scale as
/// [`closest_pair`](crate::closest_pair), without the recursive machinery:
/// O(k²) time, O(1) space beyond the tie group. Fine as a small-`k`
/// oracle, quadratic beyond that.
///
/// # Example
///
/// ```rust
/// use closepair::{brute_force, MetricKind, Point};
///
/// let points = vec![
///     Point::new(0.0, 0.0, "a"),
///     Point::new(3.0, 4.0, "b"),
///     Point::new(9.0, 9.0, "c"),
/// ];
/// let found = brute_force(&points, MetricKind::Euclidean).unwrap();
/// assert_eq!(found.distance, 5.0);
/// assert_eq!(found.label_pairs(), vec![("a", "b")]);
/// ```
pub fn brute_force(points: &[Point], metric: MetricKind) -> Result<PairResult, ClosestPairError> {
    let set = PointSet::new(points)?;
    Ok(match metric {
        MetricKind::Euclidean => exhaustive(&set, &Euclidean),
        MetricKind::Haversine => exhaustive(&set, &Haversine),
    })
}

fn exhaustive<M: Metric>(set: &PointSet, metric: &M) -> PairResult {
    let mut best = TieSet::new();
    scan_range(set, metric, set.by_x(), &mut best);
    best.into_result(set, metric)
}

/// Fold every unordered pair of `range` into `best`.
///
/// `range` holds indices into `set`; the scan touches exactly those
/// points, never the rest of the set.
pub(crate) fn scan_range<M: Metric>(
    set: &PointSet,
    metric: &M,
    range: &[usize],
    best: &mut TieSet,
) {
    for (offset, &i) in range.iter().enumerate() {
        for &j in &range[offset + 1..] {
            best.fold(metric.distance(set.point(i), set.point(j), Axis::Full), i, j);
        }
    }
}
