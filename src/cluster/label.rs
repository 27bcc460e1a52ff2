//! Per-point label states.

use std::fmt;

/// Label assigned to a point by DBSCAN.
///
/// A run starts with every point [`Label::Undefined`]. A completed run only
/// contains [`Label::Noise`] and [`Label::Cluster`]; `Undefined` surviving in
/// the output means the run was aborted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Label {
    /// Not visited yet.
    #[default]
    Undefined,
    /// Visited, but not dense and not (yet) reachable from a core point.
    ///
    /// Not terminal: a later cluster expansion may absorb the point.
    Noise,
    /// Member of cluster `k`, with `k >= 1` in discovery order.
    Cluster(usize),
}

impl Label {
    /// Sentinel used for [`Label::Noise`] in the integer encoding.
    pub const NOISE_SENTINEL: i64 = -1;
    /// Sentinel used for [`Label::Undefined`] in the integer encoding.
    pub const UNDEFINED_SENTINEL: i64 = 0;

    /// Returns `true` if the point has not been visited.
    #[inline]
    pub fn is_undefined(self) -> bool {
        matches!(self, Label::Undefined)
    }

    /// Returns `true` for noise points.
    #[inline]
    pub fn is_noise(self) -> bool {
        matches!(self, Label::Noise)
    }

    /// Cluster id, if the point belongs to a cluster.
    #[inline]
    pub fn cluster_id(self) -> Option<usize> {
        match self {
            Label::Cluster(id) => Some(id),
            _ => None,
        }
    }

    /// Encode as a plain integer: `-1` noise, `0` undefined, `k` cluster.
    pub fn to_sentinel(self) -> i64 {
        match self {
            Label::Undefined => Self::UNDEFINED_SENTINEL,
            Label::Noise => Self::NOISE_SENTINEL,
            Label::Cluster(id) => id as i64,
        }
    }

    /// Decode the integer encoding produced by [`Label::to_sentinel`].
    ///
    /// Returns `None` for values below `-1` and for ids that do not fit in `usize`.
    pub fn from_sentinel(value: i64) -> Option<Self> {
        match value {
            Self::NOISE_SENTINEL => Some(Label::Noise),
            Self::UNDEFINED_SENTINEL => Some(Label::Undefined),
            k if k > 0 => usize::try_from(k).ok().map(Label::Cluster),
            _ => None,
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Undefined => f.write_str("undefined"),
            Label::Noise => f.write_str("noise"),
            Label::Cluster(id) => write!(f, "cluster {id}"),
        }
    }
}
