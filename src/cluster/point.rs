use std::collections::HashSet;

use crate::error::{ClusterError, Result};

/// Point represents an epicenter as a planar coordinate (x, y)
///
/// The point is stored as [x, y] where:
/// - `[0]` is x (longitude)
/// - `[1]` is y (latitude)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point(pub [f64; 2]);

/// PointList is a collection of Points
pub type PointList = Vec<Point>;

/// Cluster represents one group found by DBScan
#[derive(Debug, Clone, PartialEq)]
pub struct Cluster {
    /// Cluster ID
    pub c: usize,
    /// Indices of points belonging to this cluster, in dataset order
    pub points: Vec<usize>,
}

/// Dataset is the indexed set of input points
///
/// Each distinct coordinate pair gets a stable index at ingestion and all
/// labeling happens over those indices.
#[derive(Debug, Clone)]
pub struct Dataset {
    points: PointList,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point([x, y])
    }

    pub fn x(&self) -> f64 {
        self.0[0]
    }

    pub fn y(&self) -> f64 {
        self.0[1]
    }

    /// Distance to another point
    pub fn dist(&self, b: &Point) -> f64 {
        super::distance::distance(self, b)
    }

    fn is_finite(&self) -> bool {
        self.0[0].is_finite() && self.0[1].is_finite()
    }

    /// Bit pattern used to detect exact duplicates; `-0.0` and `0.0` compare equal
    fn key(&self) -> [u64; 2] {
        let norm = |v: f64| if v == 0.0 { 0.0_f64 } else { v };
        [norm(self.0[0]).to_bits(), norm(self.0[1]).to_bits()]
    }
}

impl Dataset {
    /// Builds a dataset from raw points
    ///
    /// Exact duplicates collapse to their first occurrence, so the resulting
    /// indices follow first-occurrence order of the input.
    ///
    /// # Errors
    ///
    /// Returns `EmptyDataset` for an empty input and `NonFiniteCoordinate`
    /// (with the index into the raw input) when a coordinate is NaN or infinite.
    pub fn new<I>(points: I) -> Result<Self>
    where
        I: IntoIterator<Item = Point>,
    {
        let mut seen = HashSet::new();
        let mut unique = PointList::new();
        let mut total = 0;

        for (index, point) in points.into_iter().enumerate() {
            total += 1;
            if !point.is_finite() {
                return Err(ClusterError::NonFiniteCoordinate { index });
            }
            if seen.insert(point.key()) {
                unique.push(point);
            }
        }

        if unique.is_empty() {
            return Err(ClusterError::EmptyDataset);
        }
        if unique.len() < total {
            log::debug!(
                "Collapsed {} duplicate points ({} distinct of {})",
                total - unique.len(),
                unique.len(),
                total
            );
        }

        Ok(Dataset { points: unique })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false for a constructed dataset; kept for API symmetry with `len`
    #[allow(dead_code)] // Part of public API, may be used by external code
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the point stored at `i`
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of range
    pub fn point(&self, i: usize) -> Point {
        self.points[i]
    }

    #[allow(dead_code)] // Part of public API, may be used by external code
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Iterates `(index, point)` pairs in dataset order
    pub fn iter(&self) -> impl Iterator<Item = (usize, Point)> + '_ {
        self.points.iter().copied().enumerate()
    }
}

impl Cluster {
    /// Number of member points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[allow(dead_code)] // Part of public API, may be used by external code
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Resolves member indices to coordinates
    pub fn coordinates(&self, dataset: &Dataset) -> PointList {
        self.points.iter().map(|&i| dataset.point(i)).collect()
    }

    /// Calculates center and cluster bounds
    ///
    /// Returns `(center, min, max)` where:
    /// - `center` is the centroid of the cluster
    /// - `min` is the minimum point (bottom-left)
    /// - `max` is the maximum point (top-right)
    ///
    /// Returns `None` for an empty cluster.
    pub fn centroid_and_bounds(&self, dataset: &Dataset) -> Option<(Point, Point, Point)> {
        if self.points.is_empty() {
            return None;
        }

        let mut min = Point([f64::INFINITY, f64::INFINITY]);
        let mut max = Point([f64::NEG_INFINITY, f64::NEG_INFINITY]);
        let mut center = Point([0.0, 0.0]);

        for &i in &self.points {
            let pt = dataset.point(i);

            for j in 0..2 {
                center.0[j] += pt.0[j];
                min.0[j] = min.0[j].min(pt.0[j]);
                max.0[j] = max.0[j].max(pt.0[j]);
            }
        }

        for j in 0..2 {
            center.0[j] /= self.points.len() as f64;
        }

        Some((center, min, max))
    }
}
