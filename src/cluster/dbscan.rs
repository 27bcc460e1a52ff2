//! DBSCAN: Density-Based Spatial Clustering of Applications with Noise.
//!
//! # The Algorithm (Ester et al., 1996)
//!
//! DBSCAN groups points by neighborhood density. Unlike k-means, it:
//!
//! - Discovers clusters of arbitrary shape
//! - Automatically determines the number of clusters
//! - Identifies noise points (outliers)
//!
//! ## Core Concepts
//!
//! - **Epsilon (ε)**: Maximum distance (inclusive) between two points to be neighbors.
//! - **MinPts**: Minimum neighborhood size, the point itself included, for a point to be "core".
//! - **Core point**: Has at least MinPts points within ε.
//! - **Border point**: Within ε of a core point but not core itself.
//! - **Noise point**: Neither core nor border.
//!
//! ## Algorithm Steps
//!
//! 1. Scan points in input order. For each point P still undefined:
//!    - Find the neighborhood N of P
//!    - If |N| < MinPts, mark P as noise (may change later)
//!    - Else P is core: start cluster C+1, seed the queue with N \ {P}
//!
//! 2. Expansion: pop seeds Q in FIFO order:
//!    - Noise Q is absorbed into the cluster as a border point
//!    - Already labeled Q is skipped
//!    - Undefined Q joins the cluster; if Q is core, its neighbors are queued
//!
//! The queue never holds an index twice within one expansion. Every point's
//! neighborhood is computed exactly once per run.
//!
//! ## Complexity
//!
//! - **Time**: O(n²) distance evaluations (brute-force region queries).
//! - **Space**: O(n) for labels, core flags and the seed queue.
//!
//! ## Limitations
//!
//! - Struggles with varying densities
//! - ε is sensitive and dataset-dependent
//! - Border points reachable from two clusters go to whichever expands first
//!
//! ## References
//!
//! Ester et al. (1996). "A Density-Based Algorithm for Discovering Clusters
//! in Large Spatial Databases with Noise." KDD-96.

use tracing::{debug, trace};

use super::distance::{Distance, Euclidean};
use super::fit::DbscanFit;
use super::label::Label;
use super::region::region_query;
use super::traits::Clustering;
use crate::error::{Error, Result};

/// Noise marker in the `usize` labels returned by [`Clustering::fit_predict`].
pub const NOISE: usize = usize::MAX;

/// DBSCAN clustering algorithm.
#[derive(Debug, Clone, PartialEq)]
pub struct Dbscan {
    /// Epsilon: maximum distance for neighborhood.
    epsilon: f64,
    /// Minimum neighborhood size for core point classification.
    min_pts: usize,
}

impl Dbscan {
    /// Create a new DBSCAN clusterer.
    ///
    /// # Arguments
    ///
    /// * `epsilon` - Maximum distance between two points to be neighbors (inclusive).
    /// * `min_pts` - Minimum neighborhood size, the point itself included.
    ///
    /// Parameters are validated when clustering, not here.
    pub fn new(epsilon: f64, min_pts: usize) -> Self {
        Self { epsilon, min_pts }
    }

    /// Set epsilon (neighborhood radius).
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Set minimum points for core classification.
    pub fn with_min_pts(mut self, min_pts: usize) -> Self {
        self.min_pts = min_pts;
        self
    }

    /// Neighborhood radius.
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Minimum neighborhood size.
    pub fn min_pts(&self) -> usize {
        self.min_pts
    }

    fn validate(&self) -> Result<()> {
        // NaN fails this comparison too.
        if !(self.epsilon >= 0.0) {
            return Err(Error::InvalidParameter {
                name: "epsilon",
                message: "must be non-negative",
            });
        }

        if self.min_pts == 0 {
            return Err(Error::InvalidParameter {
                name: "min_pts",
                message: "must be at least 1",
            });
        }

        Ok(())
    }

    /// Start a stepwise run over `data`.
    ///
    /// Use this to bound the work done per call, e.g. to enforce a deadline.
    /// See [`DbscanRun`].
    pub fn run<'a, P, D>(&self, data: &'a [P], distance: &'a D) -> Result<DbscanRun<'a, P, D>>
    where
        D: Distance<P> + ?Sized,
    {
        self.validate()?;
        debug!(
            n = data.len(),
            epsilon = self.epsilon,
            min_pts = self.min_pts,
            "starting dbscan run"
        );
        Ok(DbscanRun::new(data, distance, self.epsilon, self.min_pts))
    }

    /// Cluster `data` to completion.
    pub fn fit<P, D>(&self, data: &[P], distance: &D) -> Result<DbscanFit>
    where
        D: Distance<P> + ?Sized,
    {
        Ok(self.run(data, distance)?.finish())
    }
}

impl Default for Dbscan {
    fn default() -> Self {
        Self::new(0.5, 5)
    }
}

/// Cluster `data` and return one label per point.
///
/// Shorthand for `Dbscan::new(eps, min_pts).fit(data, distance)`. The empty
/// dataset yields an empty vector.
///
/// ```rust
/// use denscan::cluster::{cluster, Euclidean, Label};
///
/// let data = vec![[1.0f64, 2.0], [2.0, 2.0], [2.0, 3.0], [8.0, 7.0], [8.0, 8.0], [25.0, 80.0]];
/// let labels = cluster(&data, &Euclidean, 3.0, 2).unwrap();
/// assert_eq!(labels[0], Label::Cluster(1));
/// assert_eq!(labels[3], Label::Cluster(2));
/// assert_eq!(labels[5], Label::Noise);
/// ```
pub fn cluster<P, D>(data: &[P], distance: &D, eps: f64, min_pts: usize) -> Result<Vec<Label>>
where
    D: Distance<P> + ?Sized,
{
    Ok(Dbscan::new(eps, min_pts).fit(data, distance)?.into_labels())
}

/// Outcome of one outer-scan iteration of a [`DbscanRun`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The point was already labeled by an earlier expansion.
    Skipped {
        /// Scanned point.
        point: usize,
    },
    /// The point is not dense; provisionally marked noise.
    Noise {
        /// Scanned point.
        point: usize,
    },
    /// The point is core and seeded a new cluster.
    Cluster {
        /// Seed point.
        point: usize,
        /// New cluster id.
        id: usize,
        /// Number of points in the cluster after expansion.
        size: usize,
    },
}

/// In-progress DBSCAN run.
///
/// Each [`step`](DbscanRun::step) performs one outer-scan iteration, including
/// the full expansion of any cluster it discovers. Stopping between steps
/// leaves unvisited points [`Label::Undefined`]; such partial labels are not a
/// valid clustering.
///
/// ```rust
/// use denscan::cluster::{Dbscan, Euclidean};
///
/// let data = vec![[0.0f64], [0.5], [9.0]];
/// let dbscan = Dbscan::new(1.0, 2);
/// let mut run = dbscan.run(&data, &Euclidean).unwrap();
/// run.step();
/// let fit = run.finish();
/// assert_eq!(fit.n_clusters(), 1);
/// ```
pub struct DbscanRun<'a, P, D: ?Sized> {
    data: &'a [P],
    distance: &'a D,
    epsilon: f64,
    min_pts: usize,
    labels: Vec<Label>,
    core: Vec<bool>,
    // Dedup set for the seed queue, scoped to one expansion.
    queued: Vec<bool>,
    cursor: usize,
    cluster_id: usize,
}

impl<'a, P, D> DbscanRun<'a, P, D>
where
    D: Distance<P> + ?Sized,
{
    fn new(data: &'a [P], distance: &'a D, epsilon: f64, min_pts: usize) -> Self {
        let n = data.len();
        Self {
            data,
            distance,
            epsilon,
            min_pts,
            labels: vec![Label::Undefined; n],
            core: vec![false; n],
            queued: vec![false; n],
            cursor: 0,
            cluster_id: 0,
        }
    }

    /// Labels so far. May contain [`Label::Undefined`] until complete.
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Number of clusters discovered so far.
    pub fn n_clusters(&self) -> usize {
        self.cluster_id
    }

    /// Whether the outer scan has visited every point.
    pub fn is_complete(&self) -> bool {
        self.cursor >= self.data.len()
    }

    /// Process the next point of the outer scan.
    ///
    /// Returns `None` once every point has been scanned.
    pub fn step(&mut self) -> Option<Step> {
        let point = self.cursor;
        if point >= self.data.len() {
            return None;
        }
        self.cursor += 1;

        if !self.labels[point].is_undefined() {
            return Some(Step::Skipped { point });
        }

        let neighbors = self.neighbors(point);
        if neighbors.len() < self.min_pts {
            // Not dense: noise for now, may become a border point later.
            self.labels[point] = Label::Noise;
            trace!(point, neighbors = neighbors.len(), "marked as noise");
            return Some(Step::Noise { point });
        }

        self.cluster_id += 1;
        let id = self.cluster_id;
        let size = self.expand_cluster(point, neighbors, id);
        debug!(id, seed = point, size, "discovered cluster");

        Some(Step::Cluster { point, id, size })
    }

    /// Run the remaining steps and return the completed fit.
    pub fn finish(mut self) -> DbscanFit {
        while self.step().is_some() {}

        let fit = DbscanFit::new(self.labels, self.core, self.cluster_id);
        debug!(
            clusters = fit.n_clusters(),
            noise = fit.noise_count(),
            "dbscan run complete"
        );
        fit
    }

    /// Abandon the run, returning the labels as they stand.
    pub fn into_partial(self) -> Vec<Label> {
        self.labels
    }

    /// Region query that also records whether the point is core.
    fn neighbors(&mut self, point: usize) -> Vec<usize> {
        let neighbors = region_query(self.data, self.distance, point, self.epsilon);
        self.core[point] = neighbors.len() >= self.min_pts;
        neighbors
    }

    /// Expand cluster `id` from core point `point`. Returns the cluster size.
    fn expand_cluster(&mut self, point: usize, neighbors: Vec<usize>, id: usize) -> usize {
        self.labels[point] = Label::Cluster(id);
        self.queued[point] = true;
        let mut size = 1;

        let mut seeds: Vec<usize> = Vec::with_capacity(neighbors.len());
        self.enqueue(&mut seeds, neighbors);

        // Index cursor: the queue grows while it is drained.
        let mut next = 0;
        while next < seeds.len() {
            let seed = seeds[next];
            next += 1;

            match self.labels[seed] {
                Label::Noise => {
                    // Border point: absorbed, but never expanded from.
                    self.labels[seed] = Label::Cluster(id);
                    size += 1;
                    trace!(point = seed, id, "absorbed noise point");
                    continue;
                }
                Label::Cluster(_) => continue,
                Label::Undefined => {}
            }

            self.labels[seed] = Label::Cluster(id);
            size += 1;

            let seed_neighbors = self.neighbors(seed);
            if seed_neighbors.len() >= self.min_pts {
                self.enqueue(&mut seeds, seed_neighbors);
            }
        }

        self.queued[point] = false;
        for &seed in &seeds {
            self.queued[seed] = false;
        }

        size
    }

    fn enqueue(&mut self, seeds: &mut Vec<usize>, neighbors: Vec<usize>) {
        for idx in neighbors {
            if !self.queued[idx] {
                self.queued[idx] = true;
                seeds.push(idx);
            }
        }
    }
}

impl<P, D> Iterator for DbscanRun<'_, P, D>
where
    D: Distance<P> + ?Sized,
{
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        self.step()
    }
}

fn check_dimensions(data: &[Vec<f32>]) -> Result<()> {
    if let Some(first) = data.first() {
        let expected = first.len();
        if let Some(row) = data.iter().find(|row| row.len() != expected) {
            return Err(Error::DimensionMismatch {
                expected,
                found: row.len(),
            });
        }
    }
    Ok(())
}

impl Clustering for Dbscan {
    /// Cluster dense vectors under Euclidean distance.
    ///
    /// Clusters are numbered `1..=C`; noise points get [`NOISE`].
    fn fit_predict(&self, data: &[Vec<f32>]) -> Result<Vec<usize>> {
        check_dimensions(data)?;
        let fit = self.fit(data, &Euclidean)?;
        Ok(fit
            .labels()
            .iter()
            .map(|l| l.cluster_id().unwrap_or(NOISE))
            .collect())
    }

    /// DBSCAN discovers clusters dynamically, so this returns 0.
    ///
    /// To get the actual number of clusters, use [`Dbscan::fit`].
    fn n_clusters(&self) -> usize {
        0 // Unknown until fit
    }
}

/// Extended DBSCAN interface with noise detection.
pub trait DbscanExt {
    /// Fit and predict, returning labels where noise is marked as `None`.
    fn fit_predict_with_noise(&self, data: &[Vec<f32>]) -> Result<Vec<Option<usize>>>;

    /// Check if a label represents noise.
    fn is_noise(label: usize) -> bool {
        label == NOISE
    }
}

impl DbscanExt for Dbscan {
    fn fit_predict_with_noise(&self, data: &[Vec<f32>]) -> Result<Vec<Option<usize>>> {
        check_dimensions(data)?;
        Ok(self.fit(data, &Euclidean)?.to_options())
    }
}
