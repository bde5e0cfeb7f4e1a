#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Incident priority scoring, heat-map assembly, and top-issues ranking.
//!
//! Takes a window of classified, geolocated complaints, groups them into
//! incident clusters, scores each cluster, and produces the ordered
//! records behind the authority dashboard's heat-map and top-issues
//! views. Stateless and synchronous: each call recomputes everything
//! from the complaints it is handed.

pub mod heatmap;
pub mod scoring;
pub mod summary;
pub mod top_issues;

mod pipeline;

use thiserror::Error;

/// Errors that can occur during analytics operations.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// A caller-supplied argument was malformed.
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// Description of what went wrong.
        message: String,
    },

    /// The clustering pass rejected its input.
    #[error("Clustering error: {0}")]
    Cluster(#[from] civic_mind_cluster::ClusterError),
}
