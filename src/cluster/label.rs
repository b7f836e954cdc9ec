use bitvec::prelude::*;

use super::point::Dataset;
use crate::error::{ClusterError, Result};

/// Per-point clustering state
///
/// Transitions only move forward:
/// `Unvisited -> Noise`, `Unvisited -> Cluster(id)` and `Noise -> Cluster(id)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Label {
    #[default]
    Unvisited,
    Noise,
    Cluster(usize),
}

impl Label {
    pub fn is_unvisited(&self) -> bool {
        matches!(self, Label::Unvisited)
    }

    /// True if expansion may still claim this point for a cluster
    pub fn is_claimable(&self) -> bool {
        matches!(self, Label::Unvisited | Label::Noise)
    }

    pub fn cluster_id(&self) -> Option<usize> {
        match self {
            Label::Cluster(c) => Some(*c),
            _ => None,
        }
    }
}

/// LabelMap holds one label per dataset index
///
/// It is created once per scan and owned by the caller; scan functions borrow
/// it mutably for their whole run.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelMap {
    labels: Vec<Label>,
}

impl LabelMap {
    /// Creates a map with every point `Unvisited`
    pub fn new(len: usize) -> Self {
        LabelMap {
            labels: vec![Label::Unvisited; len],
        }
    }

    /// Resumes from an existing (possibly partial) labeling of `dataset`
    #[allow(dead_code)] // Part of public API, may be used by external code
    pub fn from_labels(dataset: &Dataset, labels: Vec<Label>) -> Result<Self> {
        if labels.len() != dataset.len() {
            return Err(ClusterError::LabelCountMismatch {
                expected: dataset.len(),
                found: labels.len(),
            });
        }
        Ok(LabelMap { labels })
    }

    #[allow(dead_code)] // Part of public API, may be used by external code
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[allow(dead_code)] // Part of public API, may be used by external code
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// # Panics
    ///
    /// Panics if `i` is out of range
    pub fn get(&self, i: usize) -> Label {
        self.labels[i]
    }

    pub fn iter(&self) -> impl Iterator<Item = Label> + '_ {
        self.labels.iter().copied()
    }

    /// Marks an unvisited point as noise
    ///
    /// Returns false (and leaves the label alone) if the point was already visited.
    pub fn mark_noise(&mut self, i: usize) -> bool {
        if !self.labels[i].is_unvisited() {
            return false;
        }
        self.labels[i] = Label::Noise;
        true
    }

    /// Claims an unvisited or noise point for cluster `c`
    ///
    /// Returns false (and leaves the label alone) if the point already belongs
    /// to a cluster.
    pub fn assign(&mut self, i: usize, c: usize) -> bool {
        if !self.labels[i].is_claimable() {
            return false;
        }
        self.labels[i] = Label::Cluster(c);
        true
    }

    /// True once no point is left `Unvisited`
    #[allow(dead_code)] // Part of public API, may be used by external code
    pub fn is_complete(&self) -> bool {
        !self.labels.iter().any(Label::is_unvisited)
    }

    /// One bit per point, set where the point is noise
    pub fn noise_mask(&self) -> BitVec {
        self.labels.iter().map(|l| *l == Label::Noise).collect()
    }

    pub fn noise_count(&self) -> usize {
        self.labels.iter().filter(|l| **l == Label::Noise).count()
    }
}
