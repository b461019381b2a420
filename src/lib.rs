//! Divide-and-conquer closest-pair search over labeled 2-D points.
//!
//! `closepair` finds the minimum pairwise distance in a point set and
//! *every* pair achieving it:
//!
//! - **Entry point**: [`closest_pair`] over a pluggable [`MetricKind`]
//! - **Metrics**: planar [`Euclidean`], great-circle [`Haversine`]
//! - **Oracle**: [`brute_force`], the exact O(n²) reference
//!
//! # Algorithm
//!
//! | Path | Comparisons | Notes |
//! |-----------------|-------------|-------|
//! | [`closest_pair`] | O(n log n) | recursion over x order, strip scan at each merge |
//! | [`brute_force`] | O(n²) | every pair, no pruning; the correctness oracle |
//!
//! Ranges of three points or fewer drop to the exhaustive scan. The merge
//! step prunes with single-axis distance projections, which both metrics
//! guarantee not to exceed the full distance on their comparison scale.
//! Ties are first-class: an equal distance joins the reported group
//! instead of being dropped, and the strip windows run to distance
//! exhaustion rather than the textbook fixed neighbor count, so a tie
//! group can never be truncated.
//!
//! # Historical Context
//!
//! The divide-and-conquer closest-pair algorithm goes back to Shamos and
//! Hoey (1975), one of the founding results of computational geometry; the
//! textbook treatment followed in Bentley's 1980 survey and Levitin's
//! *Introduction to the Design and Analysis of Algorithms*. The haversine
//! formula is much older navigation mathematics, publicized for computer
//! use by Sinnott (1984).
//!
//! # Example
//!
//! ```rust
//! use closepair::{closest_pair, MetricKind, Point};
//!
//! let points = vec![
//!     Point::new(0.0, 0.0, "a"),
//!     Point::new(0.0, 1.0, "b"),
//!     Point::new(1.0, 0.0, "c"),
//!     Point::new(1.0, 1.0, "d"),
//! ];
//!
//! // The unit square: four sides tie at distance 1, diagonals lose.
//! let found = closest_pair(&points, MetricKind::Euclidean).unwrap();
//! assert_eq!(found.distance, 1.0);
//! assert_eq!(found.pairs.len(), 4);
//! ```
//!
//! # References
//!
//! - Shamos & Hoey (1975). "Closest-point problems" (FOCS)
//! - Bentley (1980). "Multidimensional divide-and-conquer"
//! - Levitin. *Introduction to the Design and Analysis of Algorithms*
//! - Sinnott (1984). "Virtues of the Haversine", Sky and Telescope

#![warn(missing_docs)]
#![warn(clippy::all)]

mod brute;
mod error;
mod metric;
mod point;
mod result;
mod solver;

pub use brute::brute_force;
pub use error::ClosestPairError;
pub use metric::{Axis, Euclidean, Haversine, Metric, MetricKind};
pub use point::{Point, PointSet};
pub use result::PairResult;
pub use solver::closest_pair;

/// Largest range solved exhaustively instead of recursively.
///
/// Three points admit three pairs; below that scale the scan is cheaper
/// than another level of splitting and merging.
pub const BRUTE_FORCE_CUTOFF: usize = 3;

/// Equatorial radius of the Earth in kilometers, the haversine scaling
/// constant.
pub const EARTH_RADIUS_KM: f64 = 6378.0;
