use super::extract::extract_clusters;
use super::label::{Label, LabelMap};
use super::point::{Cluster, Dataset};
use crate::error::{ClusterError, Result};

// Density-based scan, labels-first variant:
//
// DBSCAN(D, eps, MinPts)
//    C = 0
//    for each unvisited point P in dataset D
//       NeighborPts = regionQuery(P, eps)
//       if sizeof(NeighborPts) + 1 < MinPts
//          mark P as NOISE
//       else
//          expandCluster(NeighborPts, C, eps, MinPts)
//          if P is still unvisited
//             add P to cluster C
//          C = next cluster
//
// expandCluster(Pts, C, eps, MinPts)
//    for each point P' in Pts
//       if P' is unvisited or NOISE
//          add P' to cluster C
//          NeighborPts' = regionQuery(P', eps)
//          if sizeof(NeighborPts') + 1 >= MinPts
//             expandCluster(NeighborPts', C, eps, MinPts)
//
// regionQuery(P, eps)
//    return all unvisited points other than P within P's eps-neighbourhood
//
// Points already claimed (noise or cluster) are never returned by regionQuery,
// so a neighbourhood count only covers points nobody has looked at yet.
// P stays unvisited while its cluster grows so that it still counts towards
// the density of its neighbours.
// expandCluster is run with an explicit stack of seed-list cursors instead
// of recursion; it visits points in exactly the same order.

/// Validated DBScan parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DbscanParams {
    /// Neighbourhood radius, in coordinate units
    pub eps: f64,
    /// Minimum neighbourhood size, counting the point itself
    pub min_points: usize,
}

/// Result of a full clustering run
#[derive(Debug, Clone)]
pub struct Clustering {
    /// Final per-point labels
    pub labels: LabelMap,
    /// Found clusters, ordered by cluster ID
    pub clusters: Vec<Cluster>,
}

impl DbscanParams {
    /// # Errors
    ///
    /// `InvalidEpsilon` if `eps` is negative or not finite, `InvalidMinPoints`
    /// if `min_points` is zero.
    pub fn new(eps: f64, min_points: usize) -> Result<Self> {
        if !eps.is_finite() || eps < 0.0 {
            return Err(ClusterError::InvalidEpsilon(eps));
        }
        if min_points == 0 {
            return Err(ClusterError::InvalidMinPoints);
        }
        Ok(DbscanParams { eps, min_points })
    }

    fn is_dense(&self, neighbors: usize) -> bool {
        neighbors + 1 >= self.min_points
    }
}

impl Clustering {
    pub fn noise_count(&self) -> usize {
        self.labels.noise_count()
    }
}

/// Finds unvisited points within `eps` of point `p`
///
/// O(N) scan over the dataset. The point itself is never returned, and
/// neither is any point that is already noise or a cluster member.
/// Indices come back in ascending order.
pub fn region_query(dataset: &Dataset, labels: &LabelMap, p: usize, eps: f64) -> Vec<usize> {
    let center = dataset.point(p);
    let mut result = Vec::new();

    for (i, point) in dataset.iter() {
        if i == p || !labels.get(i).is_unvisited() {
            continue;
        }
        if point.dist(&center) <= eps {
            result.push(i);
        }
    }

    result
}

/// Grows cluster `c` from `seeds`
///
/// Each seed that is unvisited or noise joins the cluster; if its own
/// neighbourhood is dense enough, that neighbourhood is expanded next, before
/// the remaining seeds (depth-first). Points already in a cluster are skipped.
///
/// Memory is bounded by the number of pending seed lists, not by the call stack.
pub fn expand_cluster(
    dataset: &Dataset,
    labels: &mut LabelMap,
    seeds: Vec<usize>,
    c: usize,
    params: &DbscanParams,
) {
    let mut stack = vec![seeds.into_iter()];
    let mut added = 0;

    while let Some(frame) = stack.last_mut() {
        let Some(k) = frame.next() else {
            stack.pop();
            continue;
        };

        if !labels.assign(k, c) {
            continue;
        }
        added += 1;

        let neighbors = region_query(dataset, labels, k, params.eps);
        if params.is_dense(neighbors.len()) {
            stack.push(neighbors.into_iter());
        }
    }

    log::trace!("Cluster {}: expansion claimed {} points", c, added);
}

/// Labels every point of the dataset as noise or a cluster member
///
/// `labels` must cover the dataset; points that are already labeled are
/// skipped. Returns the number of clusters found, which is also the next
/// unused cluster ID.
pub fn db_scan(dataset: &Dataset, labels: &mut LabelMap, params: &DbscanParams) -> usize {
    let mut c = 0;

    for i in 0..dataset.len() {
        if labels.get(i) != Label::Unvisited {
            continue;
        }

        let neighbor_pts = region_query(dataset, labels, i, params.eps);
        if params.is_dense(neighbor_pts.len()) {
            log::debug!(
                "Cluster {} seeded at point {} with {} neighbours",
                c,
                i,
                neighbor_pts.len()
            );
            expand_cluster(dataset, labels, neighbor_pts, c, params);
            // No-op if expansion already reached the seed
            labels.assign(i, c);
            c += 1;
        } else {
            labels.mark_noise(i);
        }
    }

    log::info!(
        "DBScan (eps={}, minPoints={}): {} clusters, {} noise points out of {}",
        params.eps,
        params.min_points,
        c,
        labels.noise_count(),
        dataset.len()
    );

    c
}

/// Clusters a dataset from scratch and extracts the clusters
pub fn cluster_points(dataset: &Dataset, params: &DbscanParams) -> Clustering {
    let mut labels = LabelMap::new(dataset.len());
    let count = db_scan(dataset, &mut labels, params);
    let clusters = extract_clusters(&labels, count);

    Clustering { labels, clusters }
}
