//! Density clustering primitives.
//!
//! `denscan` is a small library for DBSCAN-style density clustering over
//! arbitrary points and caller-supplied distance functions.
//!
//! The primary public API is under [`cluster`], which provides:
//! - [`cluster()`](cluster::cluster): one-shot labeling of a dataset
//! - [`Dbscan`]: configurable clusterer returning a [`DbscanFit`] summary
//! - [`DbscanRun`]: stepwise run that can be stopped between outer-scan steps
//!
//! The library logs through `tracing` and never installs a subscriber.

#![forbid(unsafe_code)]

pub mod cluster;
pub mod error;

pub use cluster::{
    cluster, region_query, Clustering, Dbscan, DbscanExt, DbscanFit, DbscanRun, Distance,
    Euclidean, Label, Step, NOISE,
};
pub use error::{Error, Result};
