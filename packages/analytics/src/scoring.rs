//! Priority scoring for incident groups.
//!
//! Collapses a group's report frequency, mean urgency, and age into a
//! single bounded score via a weighted linear combination. Pure
//! computation with no side effects.

use civic_mind_analytics_models::ScoringWeights;

use crate::AnalyticsError;

/// Computes the priority score for an incident group.
///
/// Each term is normalized onto a 0-10 scale before weighting:
/// frequency is divided by 10 and capped at 10 (the cap corresponds to
/// 100 reports in one cluster and is effectively inert for realistic
/// windows, so the raw ratio dominates), mean urgency is already 0-10,
/// and age is converted from hours to days and capped at 10
/// days-equivalent. The weighted sum is clamped to [0, 10].
///
/// # Errors
///
/// Returns [`AnalyticsError::InvalidInput`] if `frequency` is zero,
/// `mean_urgency` is outside [0, 10], `age_hours` is negative or
/// non-finite, or the weights do not sum to 1.0.
pub fn priority_score(
    frequency: usize,
    mean_urgency: f64,
    age_hours: f64,
    weights: &ScoringWeights,
) -> Result<f64, AnalyticsError> {
    if frequency == 0 {
        return Err(AnalyticsError::InvalidInput {
            message: "frequency must be positive".to_string(),
        });
    }
    if !mean_urgency.is_finite() || !(0.0..=10.0).contains(&mean_urgency) {
        return Err(AnalyticsError::InvalidInput {
            message: format!("mean_urgency must be in [0, 10], got {mean_urgency}"),
        });
    }
    if !age_hours.is_finite() || age_hours < 0.0 {
        return Err(AnalyticsError::InvalidInput {
            message: format!("age_hours must be non-negative, got {age_hours}"),
        });
    }
    if !weights.is_valid() {
        return Err(AnalyticsError::InvalidInput {
            message: format!(
                "scoring weights must be non-negative and sum to 1.0, got {}/{}/{}",
                weights.frequency, weights.urgency, weights.duration
            ),
        });
    }

    #[allow(clippy::cast_precision_loss)]
    let normalized_frequency = (frequency as f64 / 10.0).min(10.0);
    let normalized_urgency = mean_urgency;
    let normalized_age = (age_hours / 24.0).min(10.0);

    let priority = normalized_frequency * weights.frequency
        + normalized_urgency * weights.urgency
        + normalized_age * weights.duration;

    Ok(priority.clamp(0.0, 10.0))
}
