use super::label::LabelMap;
use super::point::{Cluster, Dataset, PointList};

/// Groups labeled points by cluster ID
///
/// Returns one `Cluster` per ID in `0..cluster_count`, members in dataset
/// order. Noise and unvisited points are left out. Read-only, so calling it
/// again on the same labels gives the same result.
pub fn extract_clusters(labels: &LabelMap, cluster_count: usize) -> Vec<Cluster> {
    let mut clusters: Vec<Cluster> = (0..cluster_count)
        .map(|c| Cluster {
            c,
            points: Vec::new(),
        })
        .collect();

    for (i, label) in labels.iter().enumerate() {
        if let Some(c) = label.cluster_id() {
            // IDs at or above cluster_count belong to a caller-supplied labeling
            // from another run and are ignored.
            if let Some(cluster) = clusters.get_mut(c) {
                cluster.points.push(i);
            }
        }
    }

    clusters
}

/// Same as `extract_clusters`, resolved to coordinates for plotting
#[allow(dead_code)] // Part of public API, may be used by external code
pub fn extract_partition(
    dataset: &Dataset,
    labels: &LabelMap,
    cluster_count: usize,
) -> Vec<PointList> {
    extract_clusters(labels, cluster_count)
        .iter()
        .map(|cluster| cluster.coordinates(dataset))
        .collect()
}
