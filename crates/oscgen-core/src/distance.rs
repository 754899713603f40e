// crates/oscgen-core/src/distance.rs

//! Extremal pairwise distance over a point set.
//!
//! The running extrema are seeded with `max = 0` and `min = sentinel_min`
//! (the sampling interval width for generated sets) rather than infinities,
//! so sets with fewer than two points report those seeds unchanged.

use crate::format::Point;

/// Largest and smallest distance between any two distinct points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DistanceStats {
    /// Maximum pairwise distance (or `0` with no pairs).
    pub max: f64,
    /// Minimum pairwise distance (or the seed with no pairs).
    pub min: f64,
}

/// Scan every unordered pair `(i, j)`, `i < j`, once.
///
/// Coincident points at distinct indices count as a pair at distance 0.
#[must_use]
pub fn extremal_distances(points: &[Point], sentinel_min: f64) -> DistanceStats {
    let mut stats = DistanceStats {
        max: 0.0,
        min: sentinel_min,
    };
    for (i, a) in points.iter().enumerate() {
        for b in &points[i + 1..] {
            let d = a.distance(b);
            stats.max = stats.max.max(d);
            stats.min = stats.min.min(d);
        }
    }
    stats
}
