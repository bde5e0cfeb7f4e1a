//! Bounded, ranked list of the most pressing incident groups.

use civic_mind_analytics_models::{EngineParams, TopIssue};
use civic_mind_complaint_models::Complaint;

use crate::{AnalyticsError, pipeline};

/// Fallback location label when the first complaint in a group carries
/// no area name.
const GENERIC_AREA_LABEL: &str = "Area";

/// Produces the top-N incident groups for a window of complaints.
///
/// Runs the same clustering and scoring pipeline as the heat map and
/// projects each group into a compact record: dominant category (first
/// member's), location label (first member's area name, or a generic
/// fallback), member count, priority score, and severity tier. Ranks
/// are 1-based and contiguous, assigned strictly after sorting; if
/// fewer than `limit` non-noise groups exist, exactly that many entries
/// come back.
///
/// # Errors
///
/// Returns [`AnalyticsError::InvalidInput`] if `limit` is zero, the
/// engine parameters are invalid, or any coordinate is non-finite.
pub fn top_issues(
    complaints: &[Complaint],
    params: &EngineParams,
    limit: usize,
) -> Result<Vec<TopIssue>, AnalyticsError> {
    if limit == 0 {
        return Err(AnalyticsError::InvalidInput {
            message: "limit must be at least 1".to_string(),
        });
    }

    let groups = pipeline::scored_groups(complaints, params)?;

    let issues = groups
        .iter()
        .take(limit)
        .enumerate()
        .map(|(idx, group)| {
            // Non-empty by the pipeline's group invariant.
            let first = group.members[0];
            TopIssue {
                rank: idx + 1,
                category: first
                    .category
                    .map_or("Unknown", |category| category.display_name())
                    .to_string(),
                location: first
                    .location
                    .area_name
                    .clone()
                    .unwrap_or_else(|| GENERIC_AREA_LABEL.to_string()),
                complaint_count: group.members.len(),
                priority_score: group.priority_score,
                urgency: group.tier,
            }
        })
        .collect();

    Ok(issues)
}
