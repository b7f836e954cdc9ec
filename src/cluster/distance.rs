use super::point::Point;

/// Calculates straight-line (Euclidean) distance between two points
///
/// Coordinates are treated as a flat plane, so degrees of longitude and
/// latitude are weighted equally. Symmetric, and zero for equal points.
pub fn distance(p1: &Point, p2: &Point) -> f64 {
    let dx = p2.0[0] - p1.0[0];
    let dy = p2.0[1] - p1.0[1];

    (dx * dx + dy * dy).sqrt()
}
