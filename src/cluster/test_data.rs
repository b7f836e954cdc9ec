//! Fixtures shared by the cluster tests

use super::point::{Point, PointList};

/// 29 epicenters from a day of the USGS feed, as (longitude, latitude)
pub fn eq_points() -> PointList {
    [
        (-117.5971667, 36.0548333),
        (-116.5031667, 33.4818333),
        (-141.4784, 60.1567),
        (-155.290329, 19.4058342),
        (-122.7626648, 38.7903328),
        (-116.7968333, 33.511),
        (-117.4748333, 34.1531667),
        (-122.7713318, 38.7733345),
        (-111.345, 45.8603333),
        (-122.7433319, 38.7874985),
        (116.87, -34.3517),
        (-149.3208, 63.8402),
        (-117.6595, 36.0908333),
        (-122.7444992, 38.7888336),
        (-111.4148333, 45.9081667),
        (-116.7336667, 33.6603333),
        (-117.6656667, 33.8203333),
        (-151.3002, 61.7518),
        (-153.4153, 57.3909),
        (-117.7838, 37.0682),
        (-64.8718, 18.1781),
        (-151.028, 64.3487),
        (-144.2639, 69.6218),
        (-122.836166666667, 44.0826666666667),
        (-116.7908333, 33.4956667),
        (-149.9913, 56.0588),
        (-147.5786, 61.0576),
        (-147.3513, 68.649),
        (-117.6491667, 36.0861667),
    ]
    .iter()
    .map(|&(x, y)| Point::new(x, y))
    .collect()
}

/// Expected cluster per `eq_points` index for eps=4.0, minPoints=4 (-1 is noise)
pub const EQ_LABELS: [i32; 29] = [
    0, 0, -1, -1, 1, 0, 0, 1, -1, 1, -1, 2, 0, 1, -1, 0, 0, 2, -1, 0, -1, 2, -1, -1, 0, -1, 2, -1,
    0,
];

/// A horizontal bar, a stub below it and a short arm above it
pub fn grid_points() -> PointList {
    [
        (0, 1),
        (1, 1),
        (2, 1),
        (3, 1),
        (4, 1),
        (5, 1),
        (6, 1),
        (7, 1),
        (3, 0),
        (4, 0),
        (5, 0),
        (6, 0),
        (3, 2),
        (3, 3),
        (4, 3),
        (2, 3),
    ]
    .iter()
    .map(|&(x, y)| Point::new(x as f64, y as f64))
    .collect()
}

/// Picks `indices` out of `points`, in the given order
pub fn select(points: &PointList, indices: &[usize]) -> PointList {
    indices.iter().map(|&i| points[i]).collect()
}
