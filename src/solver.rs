//! Divide-and-conquer closest-pair search.
//!
//! The classic recursion over x-sorted order: split the range at the
//! ceiling midpoint, solve both halves independently, then reconcile the
//! boundary. Each call returns its own [`TieSet`]; the caller combines the
//! two (smaller distance wins, equal distances union) and only then runs
//! the strip scan with the combined best. No accumulator is ever shared
//! between the two descents.
//!
//! # The strip scan
//!
//! A pair beating the combined best `d` across the split line must have
//! both endpoints within `d` of the splitting x-coordinate. Those
//! survivors, kept in y order, are scanned with a forward window: partners
//! further than `d` along y alone can be dismissed unseen, and because the
//! strip is y-sorted that dismissal is a clean break, not a skip. The
//! window runs to distance exhaustion rather than a fixed neighbor count;
//! a capped scan would silently drop members of a tie group.
//!
//! | Range size | Path |
//! |------------|---------------------------|
//! | <= 3 | exhaustive scan of the range |
//! | > 3 | recurse, merge, strip scan |

use tracing::{debug, trace};

use crate::brute;
use crate::error::ClosestPairError;
use crate::metric::{Axis, Euclidean, Haversine, Metric, MetricKind};
use crate::point::{Point, PointSet};
use crate::result::{PairResult, TieSet};
use crate::BRUTE_FORCE_CUTOFF;

/// Ranges below this size are not worth shipping to the thread pool.
#[cfg(feature = "parallel")]
const PARALLEL_CUTOFF: usize = 1024;

/// Find the minimum pairwise distance and every pair achieving it.
///
/// Input is deduplicated and must leave at least two distinct points;
/// the metric is fixed up front via [`MetricKind`]. Runs in O(n log n)
/// comparisons for non-degenerate inputs (heavy tie groups can inflate
/// the strip windows).
///
/// # Errors
///
/// [`ClosestPairError::TooFewPoints`] when fewer than two distinct points
/// remain after deduplication. Unknown metric names are rejected earlier,
/// when parsing [`MetricKind`].
///
/// # Example
///
/// ```rust
/// use closepair::{closest_pair, MetricKind, Point};
///
/// let points = vec![
///     Point::new(2.0, 3.0, "p1"),
///     Point::new(2.0, 1.0, "p2"),
///     Point::new(3.0, 5.0, "p3"),
///     Point::new(-1.0, 1.0, "p4"),
///     Point::new(-2.0, 7.0, "p5"),
///     Point::new(6.0, 1.0, "p6"),
/// ];
/// let found = closest_pair(&points, MetricKind::Euclidean).unwrap();
/// assert_eq!(found.distance, 2.0);
/// assert_eq!(found.label_pairs(), vec![("p2", "p1")]);
/// ```
pub fn closest_pair(points: &[Point], metric: MetricKind) -> Result<PairResult, ClosestPairError> {
    let set = PointSet::new(points)?;
    debug!(points = set.len(), metric = %metric, "searching for closest pair");
    Ok(match metric {
        MetricKind::Euclidean => search(&set, &Euclidean),
        MetricKind::Haversine => search(&set, &Haversine),
    })
}

fn search<M: Metric + Sync>(set: &PointSet, metric: &M) -> PairResult {
    let best = solve(set, metric, 0, set.len());
    best.into_result(set, metric)
}

/// Solve the x-ordered index range `[start, end)`.
fn solve<M: Metric + Sync>(set: &PointSet, metric: &M, start: usize, end: usize) -> TieSet {
    if end - start <= BRUTE_FORCE_CUTOFF {
        let mut best = TieSet::new();
        brute::scan_range(set, metric, &set.by_x()[start..end], &mut best);
        return best;
    }

    let mid = (start + end + 1) / 2;
    let (left, right) = branch(set, metric, start, mid, end);

    let mut best = left;
    best.merge(right);
    strip_merge(set, metric, start, end, mid, &mut best);
    best
}

/// Solve the two halves. They read only the shared set and metric and
/// return owned results, so running them on the pool changes nothing
/// about the answer.
#[cfg(feature = "parallel")]
fn branch<M: Metric + Sync>(
    set: &PointSet,
    metric: &M,
    start: usize,
    mid: usize,
    end: usize,
) -> (TieSet, TieSet) {
    if end - start >= PARALLEL_CUTOFF {
        rayon::join(
            || solve(set, metric, start, mid),
            || solve(set, metric, mid, end),
        )
    } else {
        (solve(set, metric, start, mid), solve(set, metric, mid, end))
    }
}

#[cfg(not(feature = "parallel"))]
fn branch<M: Metric + Sync>(
    set: &PointSet,
    metric: &M,
    start: usize,
    mid: usize,
    end: usize,
) -> (TieSet, TieSet) {
    (solve(set, metric, start, mid), solve(set, metric, mid, end))
}

/// Fold in pairs that straddle the split line.
///
/// The strip keeps the range's points, in y order, whose x-projected
/// distance to the splitting point is within the combined best. The
/// forward window then compares y projections against the *live* best,
/// which only tightens as closer pairs land; a pair belonging to the
/// final tie group always passes both bounds at the moment it is visited.
fn strip_merge<M: Metric>(
    set: &PointSet,
    metric: &M,
    start: usize,
    end: usize,
    mid: usize,
    best: &mut TieSet,
) {
    let split = set.point(set.by_x()[mid - 1]);
    let d = best.distance;
    let strip: Vec<usize> = set.by_y()[start..end]
        .iter()
        .copied()
        .filter(|&i| metric.distance(set.point(i), split, Axis::X) <= d)
        .collect();
    trace!(range = end - start, strip = strip.len(), "strip scan");

    for (offset, &i) in strip.iter().enumerate() {
        for &k in &strip[offset + 1..] {
            if metric.distance(set.point(i), set.point(k), Axis::Y) > best.distance {
                break;
            }
            best.fold(metric.distance(set.point(i), set.point(k), Axis::Full), i, k);
        }
    }
}
