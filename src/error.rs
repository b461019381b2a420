//! Input-validation errors.
//!
//! The search itself cannot fail: every failure mode is caught before the
//! first distance is computed. A set of fully coincident points is *not* an
//! error; it yields distance zero with every coincident pair reported.

use thiserror::Error;

/// Errors raised while validating input to the closest-pair search.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClosestPairError {
    /// Fewer than two distinct points remained after collapsing exact
    /// duplicates.
    #[error("closest-pair search requires at least 2 distinct points, got {distinct}")]
    TooFewPoints {
        /// Number of distinct points after deduplication.
        distinct: usize,
    },

    /// Metric name outside the supported set.
    #[error("unknown distance metric {0:?} (supported: \"euclidean\", \"haversine\")")]
    UnknownMetric(String),
}
