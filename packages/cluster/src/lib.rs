#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Density-based spatial clustering of complaints into incident groups.
//!
//! Groups complaints that refer to the same real-world incident by
//! geographic proximity (DBSCAN over latitude/longitude), producing
//! per-invocation cluster labels plus a noise set. Labels are opaque and
//! scoped to a single call; they must never be persisted as incident
//! identity.

use std::collections::VecDeque;

use civic_mind_complaint_models::Complaint;
use rstar::{RTree, primitives::GeomWithData};
use thiserror::Error;

/// Linear km-to-degree conversion factor (1 km is roughly 0.009 degrees).
///
/// This is a flat-earth approximation that holds near the service's
/// target latitude band. It is not geodesically exact: longitude degrees
/// shrink toward the poles, so deployments far from the equator should
/// swap the neighbor test for a haversine-based one. The clustering
/// contract is unaffected by that substitution.
pub const DEGREES_PER_KM: f64 = 0.009;

/// Errors raised by the clustering pass.
#[derive(Debug, Error)]
pub enum ClusterError {
    /// A caller-supplied argument was malformed.
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// Description of what went wrong.
        message: String,
    },
}

/// Cluster assignment for a single input complaint.
///
/// Label values are dense indices assigned in discovery order. They are
/// only meaningful within the invocation that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClusterLabel {
    /// Member of the incident cluster with the given label.
    Cluster(usize),
    /// Reachable from no core point; excluded from all groups.
    Noise,
}

impl ClusterLabel {
    /// Returns `true` for [`Self::Noise`].
    #[must_use]
    pub const fn is_noise(self) -> bool {
        matches!(self, Self::Noise)
    }
}

/// Result of one clustering invocation over an ordered complaint slice.
///
/// Holds one label per input index. Groups preserve the input order of
/// their members, which downstream consumers rely on for dominant-category
/// selection and tie-breaking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clustering {
    labels: Vec<ClusterLabel>,
    cluster_count: usize,
}

impl Clustering {
    /// One label per input complaint, in input order.
    #[must_use]
    pub fn labels(&self) -> &[ClusterLabel] {
        &self.labels
    }

    /// Number of non-noise clusters found.
    #[must_use]
    pub const fn cluster_count(&self) -> usize {
        self.cluster_count
    }

    /// Input indices of each non-noise cluster, in ascending label order.
    /// Members within a group keep their input order.
    #[must_use]
    pub fn groups(&self) -> Vec<Vec<usize>> {
        let mut groups = vec![Vec::new(); self.cluster_count];
        for (idx, label) in self.labels.iter().enumerate() {
            if let ClusterLabel::Cluster(cluster) = label {
                groups[*cluster].push(idx);
            }
        }
        groups
    }

    /// Input indices labeled as noise, in input order.
    #[must_use]
    pub fn noise(&self) -> Vec<usize> {
        self.labels
            .iter()
            .enumerate()
            .filter(|(_, label)| label.is_noise())
            .map(|(idx, _)| idx)
            .collect()
    }
}

/// Clusters complaints by geographic proximity.
///
/// Runs DBSCAN over the complaint coordinates with radius `eps_km`
/// (converted to degrees via [`DEGREES_PER_KM`]). A complaint is a core
/// point if at least `min_samples` complaints (itself included) lie within
/// the radius; core points within each other's neighborhoods share a
/// cluster, non-core points adjacent to a core point join as border
/// points, and everything else is noise.
///
/// If fewer than `min_samples` complaints are supplied, density clustering
/// is skipped and the whole input forms a single group. This degenerate
/// path can produce a group smaller than `min_samples`.
///
/// Deterministic for a fixed input order and fixed parameters.
///
/// # Errors
///
/// Returns [`ClusterError::InvalidInput`] if any coordinate is non-finite,
/// if `eps_km` is not a positive finite number, or if `min_samples` is
/// zero.
pub fn cluster_complaints(
    complaints: &[Complaint],
    eps_km: f64,
    min_samples: usize,
) -> Result<Clustering, ClusterError> {
    if !eps_km.is_finite() || eps_km <= 0.0 {
        return Err(ClusterError::InvalidInput {
            message: format!("eps_km must be positive and finite, got {eps_km}"),
        });
    }
    if min_samples == 0 {
        return Err(ClusterError::InvalidInput {
            message: "min_samples must be at least 1".to_string(),
        });
    }

    for complaint in complaints {
        let lat = complaint.location.latitude;
        let lon = complaint.location.longitude;
        if !lat.is_finite() || !lon.is_finite() {
            return Err(ClusterError::InvalidInput {
                message: format!(
                    "complaint {} has non-finite coordinates ({lat}, {lon})",
                    complaint.id
                ),
            });
        }
    }

    if complaints.is_empty() {
        return Ok(Clustering {
            labels: Vec::new(),
            cluster_count: 0,
        });
    }

    if complaints.len() < min_samples {
        log::debug!(
            "Only {} complaints for min_samples={min_samples}, returning single group",
            complaints.len()
        );
        return Ok(Clustering {
            labels: vec![ClusterLabel::Cluster(0); complaints.len()],
            cluster_count: 1,
        });
    }

    let eps_degrees = eps_km * DEGREES_PER_KM;
    let clustering = dbscan(complaints, eps_degrees, min_samples);
    log::debug!(
        "Clustered {} complaints into {} groups ({} noise)",
        complaints.len(),
        clustering.cluster_count,
        clustering.noise().len()
    );
    Ok(clustering)
}

/// An input point stored in the R-tree with its original index.
type IndexedPoint = GeomWithData<[f64; 2], usize>;

/// Classic DBSCAN over 2-D points with Euclidean distance in degrees.
///
/// Neighbor queries go through an R-tree; neighbor sets are sorted by
/// input index because the tree returns matches in tree order and label
/// assignment must be reproducible.
fn dbscan(complaints: &[Complaint], eps: f64, min_samples: usize) -> Clustering {
    let points: Vec<IndexedPoint> = complaints
        .iter()
        .enumerate()
        .map(|(idx, c)| IndexedPoint::new([c.location.latitude, c.location.longitude], idx))
        .collect();
    let tree = RTree::bulk_load(points);

    let eps_sq = eps * eps;
    let neighbors_of = |idx: usize| -> Vec<usize> {
        let complaint = &complaints[idx];
        let center = [complaint.location.latitude, complaint.location.longitude];
        let mut found: Vec<usize> = tree
            .locate_within_distance(center, eps_sq)
            .map(|point| point.data)
            .collect();
        found.sort_unstable();
        found
    };

    let mut labels: Vec<Option<ClusterLabel>> = vec![None; complaints.len()];
    let mut next_cluster = 0;

    for idx in 0..complaints.len() {
        if labels[idx].is_some() {
            continue;
        }

        let neighbors = neighbors_of(idx);
        if neighbors.len() < min_samples {
            labels[idx] = Some(ClusterLabel::Noise);
            continue;
        }

        // New core point: expand its cluster breadth-first.
        let cluster = next_cluster;
        next_cluster += 1;
        labels[idx] = Some(ClusterLabel::Cluster(cluster));

        let mut seeds: VecDeque<usize> = neighbors.into_iter().collect();
        while let Some(seed) = seeds.pop_front() {
            match labels[seed] {
                // Previously-noise points become border points.
                Some(ClusterLabel::Noise) => {
                    labels[seed] = Some(ClusterLabel::Cluster(cluster));
                }
                Some(ClusterLabel::Cluster(_)) => {}
                None => {
                    labels[seed] = Some(ClusterLabel::Cluster(cluster));
                    let seed_neighbors = neighbors_of(seed);
                    if seed_neighbors.len() >= min_samples {
                        seeds.extend(seed_neighbors);
                    }
                }
            }
        }
    }

    let labels = labels
        .into_iter()
        .map(|label| label.unwrap_or(ClusterLabel::Noise))
        .collect();

    Clustering {
        labels,
        cluster_count: next_cluster,
    }
}
