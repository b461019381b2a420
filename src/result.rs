//! Minimum-distance tie groups.
//!
//! The search keeps every pair achieving the current minimum, not just one
//! winner. [`TieSet`] is the comparison-scale accumulator the recursion
//! threads around; [`PairResult`] is the reported-scale answer handed back
//! to callers.

use std::collections::BTreeSet;

use crate::metric::Metric;
use crate::point::{Point, PointSet};

/// The outcome of a closest-pair search.
///
/// `pairs` holds every unordered pair at exactly `distance`, in a
/// deterministic order (ascending canonical point order). Each pair
/// appears once; `(p, q)` and `(q, p)` are the same pair.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PairResult {
    /// The minimum pairwise distance, on the metric's reported scale.
    pub distance: f64,
    /// Every pair achieving `distance`.
    pub pairs: Vec<(Point, Point)>,
}

impl PairResult {
    /// The tie group as unordered label pairs.
    ///
    /// ```rust
    /// use closepair::{closest_pair, MetricKind, Point};
    ///
    /// let points = vec![
    ///     Point::new(0.0, 0.0, "a"),
    ///     Point::new(0.0, 0.0, "b"),
    ///     Point::new(5.0, 5.0, "c"),
    /// ];
    /// let found = closest_pair(&points, MetricKind::Euclidean).unwrap();
    /// assert_eq!(found.distance, 0.0);
    /// assert_eq!(found.label_pairs(), vec![("a", "b")]);
    /// ```
    #[must_use]
    pub fn label_pairs(&self) -> Vec<(&str, &str)> {
        self.pairs
            .iter()
            .map(|(p, q)| (p.label.as_str(), q.label.as_str()))
            .collect()
    }
}

/// Comparison-scale accumulator over canonical `(lo, hi)` index pairs.
///
/// A strictly smaller distance clears the set and starts a new tie group;
/// an equal distance appends. The `BTreeSet` canonicalizes duplicates away
/// (the strip scan can revisit pairs a subtree already found) and gives
/// the deterministic output order [`PairResult`] promises.
///
/// Each recursive call owns its accumulator outright; combining two calls'
/// findings goes through [`TieSet::merge`], never shared state.
#[derive(Debug, Clone)]
pub(crate) struct TieSet {
    /// Best distance seen so far, on the comparison scale.
    pub(crate) distance: f64,
    pairs: BTreeSet<(usize, usize)>,
}

impl TieSet {
    pub(crate) fn new() -> Self {
        Self {
            distance: f64::INFINITY,
            pairs: BTreeSet::new(),
        }
    }

    /// Fold one examined pair into the tie group.
    pub(crate) fn fold(&mut self, d: f64, i: usize, j: usize) {
        let key = if i < j { (i, j) } else { (j, i) };
        if d < self.distance {
            self.distance = d;
            self.pairs.clear();
            self.pairs.insert(key);
        } else if d == self.distance {
            self.pairs.insert(key);
        }
    }

    /// Combine the findings of two independent sub-searches.
    ///
    /// Smaller distance wins outright; on a tie the groups union. Subtree
    /// groups only ever contain pairs internal to their own range, so a
    /// tie union cannot double-count.
    pub(crate) fn merge(&mut self, other: TieSet) {
        if other.distance < self.distance {
            *self = other;
        } else if other.distance == self.distance {
            self.pairs.extend(other.pairs);
        }
    }

    /// Resolve indices to points and move to the reported scale.
    pub(crate) fn into_result<M: Metric>(self, set: &PointSet, metric: &M) -> PairResult {
        PairResult {
            distance: metric.finalize(self.distance),
            pairs: self
                .pairs
                .into_iter()
                .map(|(i, j)| (set.point(i).clone(), set.point(j).clone()))
                .collect(),
        }
    }

    #[cfg(test)]
    fn keys(&self) -> Vec<(usize, usize)> {
        self.pairs.iter().copied().collect()
    }
}
