#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Severity tiers, engine parameters, and heat-map result types.
//!
//! Defines the input parameter structs and output records for the
//! incident clustering and priority scoring engine. Everything here is a
//! plain serializable value with no references back into storage.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Priority score at or above which a group is critical/red.
pub const CRITICAL_THRESHOLD: f64 = 8.0;

/// Priority score at or above which a group is warning/yellow.
pub const WARNING_THRESHOLD: f64 = 5.0;

/// Severity tier of an incident group, derived from its priority score.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SeverityTier {
    /// Below the warning threshold.
    Low,
    /// At or above the warning threshold.
    Warning,
    /// At or above the critical threshold.
    Critical,
}

impl SeverityTier {
    /// Derives the tier from a priority score. Boundary values resolve
    /// to the higher tier (8.0 is critical, 5.0 is warning).
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= CRITICAL_THRESHOLD {
            Self::Critical
        } else if score >= WARNING_THRESHOLD {
            Self::Warning
        } else {
            Self::Low
        }
    }

    /// Map display colour for this tier.
    #[must_use]
    pub const fn color(self) -> HeatColor {
        match self {
            Self::Low => HeatColor::Green,
            Self::Warning => HeatColor::Yellow,
            Self::Critical => HeatColor::Red,
        }
    }
}

/// Colour used to render a heat-map point.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum HeatColor {
    /// Low severity.
    Green,
    /// Warning severity.
    Yellow,
    /// Critical severity.
    Red,
}

/// Weights of the priority formula's three terms. Must sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringWeights {
    /// Weight of the normalized report frequency.
    pub frequency: f64,
    /// Weight of the mean urgency score.
    pub urgency: f64,
    /// Weight of the normalized incident age.
    pub duration: f64,
}

impl ScoringWeights {
    /// Returns `true` if the weights are finite and sum to 1.0.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        let sum = self.frequency + self.urgency + self.duration;
        sum.is_finite()
            && (sum - 1.0).abs() < 1e-9
            && self.frequency >= 0.0
            && self.urgency >= 0.0
            && self.duration >= 0.0
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            frequency: 0.5,
            urgency: 0.3,
            duration: 0.2,
        }
    }
}

/// Tunable parameters for one engine invocation. Parameters, not
/// globals: each call can carry its own set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineParams {
    /// Cluster radius in kilometres.
    pub eps_km: f64,
    /// Minimum complaints to form a cluster.
    pub min_samples: usize,
    /// Priority formula weights.
    pub weights: ScoringWeights,
    /// Age fed into the duration term, in hours. The upstream store does
    /// not track time-since-first-report per incident, so this is a fixed
    /// placeholder rather than a measured duration.
    pub age_hours: f64,
}

impl Default for EngineParams {
    fn default() -> Self {
        Self {
            eps_km: 1.0,
            min_samples: 2,
            weights: ScoringWeights::default(),
            age_hours: 24.0,
        }
    }
}

/// The complaint window a caller should fetch before invoking the
/// engine. The engine itself performs no I/O; this only documents the
/// fetch contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisWindow {
    /// How far back to look, in hours.
    pub hours: u32,
    /// Maximum number of complaints to fetch.
    pub limit: u32,
}

impl Default for AnalysisWindow {
    fn default() -> Self {
        Self {
            hours: 72,
            limit: 1000,
        }
    }
}

/// One incident cluster on the heat map.
///
/// Constructed fresh per request, never mutated after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapPoint {
    /// Centroid latitude (mean of member latitudes).
    pub latitude: f64,
    /// Centroid longitude (mean of member longitudes).
    pub longitude: f64,
    /// Number of complaints in the cluster.
    pub complaint_count: usize,
    /// Priority score in [0, 10].
    pub priority_score: f64,
    /// Severity tier derived from the score.
    pub intensity: SeverityTier,
    /// Map colour for the tier.
    pub color: HeatColor,
    /// Sorted distinct category display names present in the cluster.
    pub categories: Vec<String>,
    /// One-line human-readable description.
    pub summary: String,
}

/// One entry in the ranked top-issues list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopIssue {
    /// 1-based rank, contiguous with no gaps.
    pub rank: usize,
    /// Display name of the group's dominant category.
    pub category: String,
    /// Area name of the first complaint in the group, or a generic label.
    pub location: String,
    /// Number of complaints in the group.
    pub complaint_count: usize,
    /// Priority score in [0, 10].
    pub priority_score: f64,
    /// Severity tier derived from the score.
    pub urgency: SeverityTier,
}
