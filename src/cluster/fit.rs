use super::label::Label;

/// Result of a completed DBSCAN run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbscanFit {
    labels: Vec<Label>,
    core: Vec<bool>,
    n_clusters: usize,
}

impl DbscanFit {
    pub(crate) fn new(labels: Vec<Label>, core: Vec<bool>, n_clusters: usize) -> Self {
        debug_assert_eq!(labels.len(), core.len());
        Self {
            labels,
            core,
            n_clusters,
        }
    }

    /// One label per input point, in input order.
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Consume the fit, returning the labels.
    pub fn into_labels(self) -> Vec<Label> {
        self.labels
    }

    /// Whether the point's neighborhood reached `min_pts`.
    ///
    /// # Panics
    ///
    /// Panics if `point_idx` is out of range.
    pub fn is_core(&self, point_idx: usize) -> bool {
        self.core[point_idx]
    }

    /// Core flags for all points.
    pub fn core_points(&self) -> &[bool] {
        &self.core
    }

    /// Number of clusters found. Ids run from 1 to this value.
    pub fn n_clusters(&self) -> usize {
        self.n_clusters
    }

    /// Number of points labeled noise.
    pub fn noise_count(&self) -> usize {
        self.labels.iter().filter(|l| l.is_noise()).count()
    }

    /// Cluster sizes; index `k - 1` holds the size of cluster `k`.
    pub fn cluster_sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0; self.n_clusters];
        for id in self.labels.iter().filter_map(|l| l.cluster_id()) {
            sizes[id - 1] += 1;
        }
        sizes
    }

    /// Indices of the points in cluster `id`, ascending.
    pub fn members(&self, id: usize) -> Vec<usize> {
        self.labels
            .iter()
            .enumerate()
            .filter(|(_, l)| l.cluster_id() == Some(id))
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Labels in the integer encoding: `-1` noise, `k >= 1` cluster.
    pub fn to_sentinels(&self) -> Vec<i64> {
        self.labels.iter().map(|l| l.to_sentinel()).collect()
    }

    /// Labels with noise as `None`.
    pub fn to_options(&self) -> Vec<Option<usize>> {
        self.labels.iter().map(|l| l.cluster_id()).collect()
    }
}
