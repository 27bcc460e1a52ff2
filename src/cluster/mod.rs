//! Density-based clustering.
//!
//! ## DBSCAN
//!
//! DBSCAN groups points that lie in dense regions and marks the rest as
//! noise. It needs no cluster count up front, finds clusters of arbitrary
//! shape, and works over any point type: the only thing it asks of the data
//! is a [`Distance`] between two points.
//!
//! **Parameters**:
//! - `eps`: neighborhood radius, inclusive (`distance(a, b) <= eps`)
//! - `min_pts`: neighborhood size (self included) needed for a core point
//!
//! **Labels**: every point ends as [`Label::Noise`] or [`Label::Cluster`],
//! with cluster ids numbered from 1 in discovery order.
//!
//! **When to use**: unknown number of clusters, non-convex shapes, outliers
//! present, and clusters of roughly similar density.
//!
//! ## Usage
//!
//! ```rust
//! use denscan::cluster::{cluster, Clustering, Dbscan, Euclidean, Label, NOISE};
//!
//! let data = vec![
//!     vec![0.0f64, 0.0],
//!     vec![0.1, 0.1],
//!     vec![10.0, 10.0],
//!     vec![10.1, 10.1],
//!     vec![50.0, 50.0],
//! ];
//!
//! // Generic entry point: any point type, any distance.
//! let labels = cluster(&data, &Euclidean, 0.5, 2).unwrap();
//! assert_eq!(labels[0], Label::Cluster(1));
//! assert_eq!(labels[2], Label::Cluster(2));
//! assert_eq!(labels[4], Label::Noise);
//!
//! // Dense `Vec<f32>` convenience, noise as `NOISE`.
//! let data: Vec<Vec<f32>> = vec![vec![0.0], vec![0.1], vec![9.0]];
//! let labels = Dbscan::new(0.5, 2).fit_predict(&data).unwrap();
//! assert_eq!(labels, vec![1, 1, NOISE]);
//! ```

mod dbscan;
mod distance;
mod fit;
mod label;
mod region;
mod traits;

pub use dbscan::{cluster, Dbscan, DbscanExt, DbscanRun, Step, NOISE};
pub use distance::{Distance, Euclidean};
pub use fit::DbscanFit;
pub use label::Label;
pub use region::region_query;
pub use traits::Clustering;
