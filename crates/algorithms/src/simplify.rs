//! Single-pass ring simplification
//!
//! A flat decimation inspired by Douglas-Peucker: every interior point
//! is tested exactly once against the chord through its two neighbors
//! in the input and dropped when it deviates less than the tolerance.
//! The full recursive algorithm re-partitions on the farthest point and
//! would keep more detail; this pass trades that for a single cheap
//! sweep, which is the behavior downstream consumers expect.

/// Simplify a ring or line by dropping interior points that are close
/// to the chord through their neighbors.
///
/// The first and last points are always kept. Distances are measured
/// against each point's neighbors in the input, never against the
/// partially simplified output. Rings with fewer than 3 points are
/// returned unchanged.
///
/// This is a heuristic decimation: aggressive tolerances can produce
/// self-intersecting or degenerate rings, and no validity check is
/// performed.
pub fn simplify_ring(ring: &[Vec<f64>], tolerance: f64) -> Vec<Vec<f64>> {
    if ring.len() < 3 {
        return ring.to_vec();
    }

    let mut simplified = Vec::with_capacity(ring.len());
    simplified.push(ring[0].clone());

    for window in ring.windows(3) {
        let distance = perpendicular_distance(&window[1], &window[0], &window[2]);
        if distance > tolerance {
            simplified.push(window[1].clone());
        }
    }

    simplified.push(ring[ring.len() - 1].clone());
    simplified
}

/// Perpendicular distance from `point` to the line through `start` and `end`.
///
/// When `start` and `end` coincide the line is degenerate, and the
/// distance falls back to the Euclidean distance from `point` to
/// `start`. Only the first two ordinates are considered.
fn perpendicular_distance(point: &[f64], start: &[f64], end: &[f64]) -> f64 {
    let dx = end[0] - start[0];
    let dy = end[1] - start[1];
    let length = (dx * dx + dy * dy).sqrt();
    if length == 0.0 {
        let px = point[0] - start[0];
        let py = point[1] - start[1];
        return (px * px + py * py).sqrt();
    }
    (dy * point[0] - dx * point[1] + end[0] * start[1] - end[1] * start[0]).abs() / length
}
