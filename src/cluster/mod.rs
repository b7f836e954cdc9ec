//! Package cluster implements density-based clustering of planar (lon, lat) points
pub mod dbscan;
pub mod distance;
pub mod extract;
pub mod label;
pub mod point;

#[cfg(test)]
mod distance_test;
#[cfg(test)]
mod test_data;

pub use dbscan::{Clustering, DbscanParams, cluster_points};
pub use point::{Dataset, Point, PointList};
// Lower-level scan API, exercised by the tests
#[allow(unused_imports)]
pub use dbscan::{db_scan, expand_cluster, region_query};
#[allow(unused_imports)]
pub use distance::distance;
#[allow(unused_imports)]
pub use extract::{extract_clusters, extract_partition};
#[allow(unused_imports)]
pub use label::{Label, LabelMap};
#[allow(unused_imports)]
pub use point::Cluster;
