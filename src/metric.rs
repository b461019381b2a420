//! Distance metrics with directional projections.
//!
//! Every metric answers the same three questions about a point pair: how
//! far apart are they, how far apart along x alone, and how far apart
//! along y alone. The projections exist for pruning: the recursion's merge
//! step discards candidates whose single-axis distance already exceeds the
//! best full distance found so far.
//!
//! | Metric | Comparison scale | Reported scale |
//! |-------------|---------------------|----------------|
//! | `Euclidean` | squared distance | distance (sqrt applied once, at the end) |
//! | `Haversine` | kilometers | kilometers |
//!
//! Working in each metric's own comparison scale keeps tie detection exact:
//! equal squared distances stay equal through the single final square root.

use std::fmt;
use std::str::FromStr;

use crate::error::ClosestPairError;
use crate::point::Point;
use crate::EARTH_RADIUS_KM;

/// Which component of the distance to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// The full distance between the two points.
    Full,
    /// The horizontal component only.
    X,
    /// The vertical component only.
    Y,
}

/// A symmetric distance over labeled 2-D points, with axis projections.
///
/// Implementations must keep the projections *pruning-safe*: for any pair,
/// the x-only and y-only distances may not exceed the full distance on the
/// metric's comparison scale. That bound is what lets the merge step drop
/// out-of-band points without looking at them.
pub trait Metric {
    /// Distance between `p` and `q`, full or restricted to one axis.
    fn distance(&self, p: &Point, q: &Point, axis: Axis) -> f64;

    /// Map a comparison-scale distance to the reported scale.
    ///
    /// Called exactly once, on the final minimum. The identity by default.
    #[inline]
    fn finalize(&self, raw: f64) -> f64 {
        raw
    }
}

/// Planar metric on the squared-Euclidean comparison scale.
///
/// All comparisons happen on squares; [`Metric::finalize`] takes the
/// single square root for the reported distance. Squares of exact inputs
/// compare exactly, so equal-distance ties never wobble through rounding.
///
/// # Example
///
/// ```rust
/// use closepair::{Axis, Euclidean, Metric, Point};
///
/// let p = Point::new(0.0, 0.0, "origin");
/// let q = Point::new(3.0, 4.0, "corner");
/// assert_eq!(Euclidean.distance(&p, &q, Axis::Full), 25.0);
/// assert_eq!(Euclidean.distance(&p, &q, Axis::X), 9.0);
/// assert_eq!(Euclidean.finalize(25.0), 5.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Euclidean;

impl Metric for Euclidean {
    #[inline]
    fn distance(&self, p: &Point, q: &Point, axis: Axis) -> f64 {
        let dx = p.x - q.x;
        let dy = p.y - q.y;
        match axis {
            Axis::Full => dx * dx + dy * dy,
            Axis::X => dx * dx,
            Axis::Y => dy * dy,
        }
    }

    #[inline]
    fn finalize(&self, raw: f64) -> f64 {
        raw.sqrt()
    }
}

/// Great-circle metric over degree coordinates, in kilometers.
///
/// `x` is longitude, `y` latitude. Distances come from the haversine
/// formula scaled by the equatorial Earth radius ([`EARTH_RADIUS_KM`]).
///
/// The x projection holds both points at the *first* point's latitude
/// before applying the full formula, isolating the longitudinal component;
/// the y projection holds both at the first point's longitude. The y
/// projection is a true lower bound on the sphere. The x projection is a
/// lower bound for city-scale longitude gaps but can overshoot the full
/// distance when points many tens of degrees apart in longitude drift
/// poleward; keep inputs regional when pruning fidelity matters.
#[derive(Debug, Clone, Copy, Default)]
pub struct Haversine;

impl Metric for Haversine {
    #[inline]
    fn distance(&self, p: &Point, q: &Point, axis: Axis) -> f64 {
        let (qx, qy) = match axis {
            Axis::Full => (q.x, q.y),
            Axis::X => (q.x, p.y),
            Axis::Y => (p.x, q.y),
        };
        great_circle_km(p.x, p.y, qx, qy)
    }
}

/// Haversine great-circle distance between two lon/lat pairs in degrees.
#[inline]
#[must_use]
fn great_circle_km(lon1: f64, lat1: f64, lon2: f64, lat2: f64) -> f64 {
    let lat1 = lat1.to_radians();
    let lat2 = lat2.to_radians();
    let half_dlon = (lon2 - lon1).to_radians() / 2.0;
    let half_dlat = (lat2 - lat1) / 2.0;

    let a = half_dlat.sin() * half_dlat.sin()
        + lat1.cos() * lat2.cos() * half_dlon.sin() * half_dlon.sin();
    EARTH_RADIUS_KM * 2.0 * a.sqrt().atan2((1.0 - a).sqrt())
}

/// The closed set of supported metrics, selected once per search.
///
/// Parsing rejects anything outside the set before computation starts:
///
/// ```rust
/// use closepair::{ClosestPairError, MetricKind};
///
/// assert_eq!("haversine".parse::<MetricKind>(), Ok(MetricKind::Haversine));
/// assert_eq!(
///     "manhattan".parse::<MetricKind>(),
///     Err(ClosestPairError::UnknownMetric("manhattan".into()))
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricKind {
    /// Planar squared-Euclidean comparisons, linear reported distance.
    Euclidean,
    /// Great-circle kilometers over degree coordinates.
    Haversine,
}

impl MetricKind {
    /// The selector name this kind parses from.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            MetricKind::Euclidean => "euclidean",
            MetricKind::Haversine => "haversine",
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MetricKind {
    type Err = ClosestPairError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "euclidean" => Ok(MetricKind::Euclidean),
            "haversine" => Ok(MetricKind::Haversine),
            other => Err(ClosestPairError::UnknownMetric(other.to_string())),
        }
    }
}
