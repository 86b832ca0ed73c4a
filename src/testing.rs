use crate::geometry::Point;
use rand::Rng;
use std::collections::HashSet;

/// Generates `n` pairwise distinct random points on a bounded grid.
///
/// Distinctness matters: the brute force treats a zero-cost edge as
/// missing, so coincident points would make instances unsolvable for it.
pub fn random_distinct_points(rng: &mut impl Rng, n: usize, max_coordinate: u32) -> Vec<Point> {
    assert!((n as u64) <= (max_coordinate as u64 + 1).pow(2));

    let mut seen = HashSet::new();
    let mut points = Vec::with_capacity(n);

    while points.len() < n {
        let point = Point::new(
            rng.gen_range(0..=max_coordinate),
            rng.gen_range(0..=max_coordinate),
        );
        if seen.insert(point) {
            points.push(point);
        }
    }

    points
}
