//! Brute-force neighborhood (region) queries.

use super::distance::Distance;

/// Find all points within `eps` of `data[point_idx]`, the point itself included.
///
/// Indices are returned in ascending order. The scan is O(n) distance
/// evaluations and has no side effects.
///
/// # Panics
///
/// Panics if `point_idx` is out of range.
pub fn region_query<P, D>(data: &[P], distance: &D, point_idx: usize, eps: f64) -> Vec<usize>
where
    D: Distance<P> + ?Sized,
{
    let point = &data[point_idx];
    data.iter()
        .enumerate()
        .filter(|(_, other)| distance.distance(point, other) <= eps)
        .map(|(idx, _)| idx)
        .collect()
}
