//! Shared cluster-then-score pipeline behind the heat-map and
//! top-issues views.

use civic_mind_analytics_models::{EngineParams, SeverityTier};
use civic_mind_cluster::cluster_complaints;
use civic_mind_complaint_models::Complaint;

use crate::{AnalyticsError, scoring};

/// One non-noise incident group with its derived statistics, ready for
/// projection into an output record.
pub struct ScoredGroup<'a> {
    /// Group members in input order.
    pub members: Vec<&'a Complaint>,
    /// Mean of member latitudes.
    pub centroid_lat: f64,
    /// Mean of member longitudes.
    pub centroid_lon: f64,
    /// Priority score rounded to one decimal place for presentation.
    pub priority_score: f64,
    /// Severity tier, derived from the unrounded score.
    pub tier: SeverityTier,
}

impl ScoredGroup<'_> {
    /// Smallest member id, used as the final ordering tie-breaker.
    fn min_id(&self) -> &str {
        self.members
            .iter()
            .map(|c| c.id.as_str())
            .min()
            .unwrap_or_default()
    }
}

/// Clusters the window, discards noise, scores each group, and returns
/// the groups in final output order: descending priority score, ties
/// broken by larger member count, then by smallest member id so the
/// order is total and reproducible.
///
/// # Errors
///
/// Returns [`AnalyticsError`] if clustering rejects the input or the
/// engine parameters are invalid.
pub fn scored_groups<'a>(
    complaints: &'a [Complaint],
    params: &EngineParams,
) -> Result<Vec<ScoredGroup<'a>>, AnalyticsError> {
    let clustering = cluster_complaints(complaints, params.eps_km, params.min_samples)?;

    let mut groups = Vec::with_capacity(clustering.cluster_count());
    for indices in clustering.groups() {
        let members: Vec<&Complaint> = indices.iter().map(|&idx| &complaints[idx]).collect();
        if members.is_empty() {
            continue;
        }

        #[allow(clippy::cast_precision_loss)]
        let count = members.len() as f64;
        let centroid_lat = members.iter().map(|c| c.location.latitude).sum::<f64>() / count;
        let centroid_lon = members.iter().map(|c| c.location.longitude).sum::<f64>() / count;
        let mean_urgency = members.iter().map(|c| c.urgency_or_zero()).sum::<f64>() / count;

        let score = scoring::priority_score(
            members.len(),
            mean_urgency,
            params.age_hours,
            &params.weights,
        )?;
        groups.push(ScoredGroup {
            members,
            centroid_lat,
            centroid_lon,
            priority_score: round_to_tenth(score),
            tier: SeverityTier::from_score(score),
        });
    }

    groups.sort_by(|a, b| {
        b.priority_score
            .total_cmp(&a.priority_score)
            .then_with(|| b.members.len().cmp(&a.members.len()))
            .then_with(|| a.min_id().cmp(b.min_id()))
    });

    log::debug!(
        "Scored {} incident groups from {} complaints",
        groups.len(),
        complaints.len()
    );
    Ok(groups)
}

/// Rounds to one decimal place for presentation, matching the API's
/// score formatting.
fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
