//! Heat-map assembly: ordered, colour-coded map points per incident
//! cluster.

use std::collections::BTreeSet;

use civic_mind_analytics_models::{EngineParams, HeatmapPoint};
use civic_mind_complaint_models::Complaint;

use crate::{AnalyticsError, pipeline, summary};

/// Builds the heat-map view for a window of complaints.
///
/// Clusters the window, discards noise, and produces one
/// [`HeatmapPoint`] per incident group: centroid coordinates, member
/// count, priority score with severity tier and colour, the sorted set
/// of distinct category display names present in the group, and a
/// one-line summary. Points are ordered by descending priority score,
/// with ties broken by larger member count and then by smallest member
/// id.
///
/// The duration term of the score uses `params.age_hours`, a fixed
/// placeholder; the store does not track time since an incident's first
/// report. An empty window yields an empty sequence, not an error.
///
/// # Errors
///
/// Returns [`AnalyticsError::InvalidInput`] for non-finite coordinates
/// or invalid engine parameters.
pub fn build_heatmap(
    complaints: &[Complaint],
    params: &EngineParams,
) -> Result<Vec<HeatmapPoint>, AnalyticsError> {
    let groups = pipeline::scored_groups(complaints, params)?;

    let mut points = Vec::with_capacity(groups.len());
    for group in &groups {
        let categories: BTreeSet<&str> = group
            .members
            .iter()
            .filter_map(|c| c.category.map(|category| category.display_name()))
            .collect();

        points.push(HeatmapPoint {
            latitude: group.centroid_lat,
            longitude: group.centroid_lon,
            complaint_count: group.members.len(),
            priority_score: group.priority_score,
            intensity: group.tier,
            color: group.tier.color(),
            categories: categories.into_iter().map(str::to_string).collect(),
            summary: summary::summarize(&group.members)?,
        });
    }

    log::debug!(
        "Built heat map with {} points from {} complaints",
        points.len(),
        complaints.len()
    );
    Ok(points)
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use civic_mind_complaint_models::{Category, Location};

    use super::*;

    fn complaint(id: &str, lat: f64, lon: f64, category: Category, urgency: u8) -> Complaint {
        Complaint {
            id: id.to_string(),
            text: "test complaint".to_string(),
            category: Some(category),
            location: Location::new(lat, lon),
            urgency_score: Some(urgency),
            timestamp: Utc::now(),
        }
    }

    /// Four tight complaints with urgencies [9, 8, 7, 10] and twelve
    /// isolated ones that should fall out as noise.
    fn window_with_one_incident() -> Vec<Complaint> {
        let mut complaints = vec![
            complaint("t1", 12.9700, 77.5900, Category::Sanitation, 9),
            complaint("t2", 12.9705, 77.5905, Category::Sanitation, 8),
            complaint("t3", 12.9710, 77.5895, Category::Sanitation, 7),
            complaint("t4", 12.9702, 77.5910, Category::WaterSupply, 10),
        ];
        for i in 0..12i32 {
            let offset = 0.05 * f64::from(i + 1);
            complaints.push(complaint(
                &format!("iso{i}"),
                13.5 + offset,
                78.5 + offset,
                Category::Streetlights,
                3,
            ));
        }
        complaints
    }

    #[test]
    fn noise_is_dropped_and_stats_derive_from_members() {
        let complaints = window_with_one_incident();
        let points = build_heatmap(&complaints, &EngineParams::default()).unwrap();

        assert_eq!(points.len(), 1);
        let point = &points[0];
        assert_eq!(point.complaint_count, 4);
        // 4/10*0.5 + 8.5*0.3 + 1.0*0.2 = 2.95
        assert!((point.priority_score - 2.95).abs() < 0.051);
        assert_eq!(point.intensity, civic_mind_analytics_models::SeverityTier::Low);
        assert_eq!(point.color, civic_mind_analytics_models::HeatColor::Green);
        assert_eq!(point.categories, vec!["Sanitation", "Water Supply"]);
        assert!(point.summary.starts_with("4 reports of Sanitation"));
        assert!((point.latitude - 12.970_425).abs() < 1e-9);
        assert!((point.longitude - 77.590_25).abs() < 1e-9);
    }

    #[test]
    fn empty_window_yields_empty_map() {
        let points = build_heatmap(&[], &EngineParams::default()).unwrap();
        assert!(points.is_empty());
    }

    #[test]
    fn points_are_ordered_by_descending_priority() {
        let complaints = vec![
            // Low-urgency pair far from everything else.
            complaint("a1", 12.9000, 77.5000, Category::Streetlights, 2),
            complaint("a2", 12.9005, 77.5005, Category::Streetlights, 2),
            // High-urgency trio.
            complaint("b1", 13.1000, 77.7000, Category::Electricity, 10),
            complaint("b2", 13.1005, 77.7005, Category::Electricity, 9),
            complaint("b3", 13.1010, 77.7010, Category::Electricity, 10),
        ];

        let points = build_heatmap(&complaints, &EngineParams::default()).unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].complaint_count, 3);
        for pair in points.windows(2) {
            assert!(pair[0].priority_score >= pair[1].priority_score);
        }
    }

    #[test]
    fn equal_scores_tie_break_on_count_then_min_id() {
        // Two identical-shape clusters; the one containing "a1" must come
        // first even though it appears later in the input.
        let complaints = vec![
            complaint("b1", 13.1000, 77.7000, Category::Sanitation, 6),
            complaint("b2", 13.1005, 77.7005, Category::Sanitation, 6),
            complaint("a1", 12.9000, 77.5000, Category::Sanitation, 6),
            complaint("a2", 12.9005, 77.5005, Category::Sanitation, 6),
        ];
        let points = build_heatmap(&complaints, &EngineParams::default()).unwrap();
        assert_eq!(points.len(), 2);
        assert!((points[0].latitude - 12.900_25).abs() < 1e-9);
        assert!((points[1].latitude - 13.100_25).abs() < 1e-9);
    }

    #[test]
    fn equal_scores_tie_break_on_larger_count_first() {
        // Size-2 group at mean urgency 5.0 scores 1.8 exactly; the
        // size-3 group at mean urgency 14/3 scores 1.75 raw, which also
        // rounds to 1.8. Scores tie after rounding, so the larger group
        // must win even though its smallest id ("b1") sorts after "a1".
        let complaints = vec![
            complaint("a1", 12.9000, 77.5000, Category::Sanitation, 5),
            complaint("a2", 12.9005, 77.5005, Category::Sanitation, 5),
            complaint("b1", 13.1000, 77.7000, Category::Sanitation, 5),
            complaint("b2", 13.1005, 77.7005, Category::Sanitation, 5),
            complaint("b3", 13.1010, 77.7010, Category::Sanitation, 4),
        ];
        let points = build_heatmap(&complaints, &EngineParams::default()).unwrap();

        assert_eq!(points.len(), 2);
        assert!((points[0].priority_score - points[1].priority_score).abs() < f64::EPSILON);
        assert_eq!(points[0].complaint_count, 3);
        assert_eq!(points[1].complaint_count, 2);
    }

    #[test]
    fn deterministic_across_invocations() {
        let complaints = window_with_one_incident();
        let params = EngineParams::default();
        let first = build_heatmap(&complaints, &params).unwrap();
        let second = build_heatmap(&complaints, &params).unwrap();
        assert_eq!(first, second);
    }
}
