//! Closest Cities
//!
//! The minimal walkthrough: one geodesic pass over a handful of European
//! capitals, one planar pass over the classic smoke points.
//!
//! # Metric Selection Guide
//!
//! | Metric      | Coordinates        | Reported distance |
//! |-------------|--------------------|-------------------|
//! | `euclidean` | plane (x, y)       | straight-line     |
//! | `haversine` | degrees (lon, lat) | kilometers        |
//!
//! ```bash
//! cargo run --example closest_cities --release
//! ```

use closepair::{closest_pair, MetricKind, Point};

fn main() {
    // Longitude first, latitude second.
    let cities = vec![
        Point::new(-0.1276, 51.5074, "London"),
        Point::new(2.3522, 48.8566, "Paris"),
        Point::new(4.3517, 50.8503, "Brussels"),
        Point::new(4.9041, 52.3676, "Amsterdam"),
        Point::new(13.4050, 52.5200, "Berlin"),
        Point::new(-3.7038, 40.4168, "Madrid"),
        Point::new(12.4964, 41.9028, "Rome"),
        Point::new(16.3738, 48.2082, "Vienna"),
    ];

    let nearest = closest_pair(&cities, MetricKind::Haversine).unwrap();
    println!("closest cities: {:.1} km apart", nearest.distance);
    for (p, q) in &nearest.pairs {
        println!("  {p} and {q}");
    }
    // Brussels to Amsterdam, about 173 km.
    assert!((nearest.distance - 173.0).abs() < 2.0);

    // The planar smoke points: (2, 3) and (2, 1) sit exactly 2 apart.
    let points = vec![
        Point::new(2.0, 3.0, "p1"),
        Point::new(2.0, 1.0, "p2"),
        Point::new(3.0, 5.0, "p3"),
        Point::new(-1.0, 1.0, "p4"),
        Point::new(-2.0, 7.0, "p5"),
        Point::new(6.0, 1.0, "p6"),
    ];

    let found = closest_pair(&points, MetricKind::Euclidean).unwrap();
    println!("closest planar pair: {} apart", found.distance);
    for (p, q) in &found.pairs {
        println!("  {p} and {q}");
    }
    assert_eq!(found.distance, 2.0);
}
