//! One-line textual summaries of incident groups.

use civic_mind_complaint_models::Complaint;

use crate::AnalyticsError;

/// Builds the one-line description of an incident group.
///
/// The category shown is the dominant category, defined as the category
/// of the group's first complaint in input order. Mixed-category groups
/// are not resolved by majority vote; this first-element rule is a
/// deliberate simplification kept for output compatibility. Absent
/// urgency scores count as 0 in the average.
///
/// # Errors
///
/// Returns [`AnalyticsError::InvalidInput`] when called on an empty
/// group, which is a programming error in the caller.
pub fn summarize(members: &[&Complaint]) -> Result<String, AnalyticsError> {
    let Some(first) = members.first() else {
        return Err(AnalyticsError::InvalidInput {
            message: "cannot summarize an empty group".to_string(),
        });
    };

    let category = first
        .category
        .map_or("Unknown", |category| category.display_name());
    let count = members.len();
    #[allow(clippy::cast_precision_loss)]
    let avg_urgency =
        members.iter().map(|c| c.urgency_or_zero()).sum::<f64>() / count as f64;

    Ok(format!(
        "{count} reports of {category} in this area (Avg urgency: {avg_urgency:.1}/10)"
    ))
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use civic_mind_complaint_models::{Category, Location};

    use super::*;

    fn complaint(id: &str, category: Option<Category>, urgency: Option<u8>) -> Complaint {
        Complaint {
            id: id.to_string(),
            text: "test complaint".to_string(),
            category,
            location: Location::new(12.97, 77.59),
            urgency_score: urgency,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn formats_count_category_and_average() {
        let complaints = vec![
            complaint("a", Some(Category::Sanitation), Some(9)),
            complaint("b", Some(Category::Sanitation), Some(8)),
            complaint("c", Some(Category::Sanitation), Some(7)),
            complaint("d", Some(Category::Sanitation), Some(10)),
        ];
        let members: Vec<&Complaint> = complaints.iter().collect();
        assert_eq!(
            summarize(&members).unwrap(),
            "4 reports of Sanitation in this area (Avg urgency: 8.5/10)"
        );
    }

    #[test]
    fn mixed_categories_use_first_member() {
        let complaints = vec![
            complaint("a", Some(Category::WaterSupply), Some(5)),
            complaint("b", Some(Category::Electricity), Some(5)),
        ];
        let members: Vec<&Complaint> = complaints.iter().collect();
        let text = summarize(&members).unwrap();
        assert!(text.starts_with("2 reports of Water Supply"));
    }

    #[test]
    fn missing_category_reads_unknown() {
        let complaints = vec![complaint("a", None, Some(4))];
        let members: Vec<&Complaint> = complaints.iter().collect();
        assert_eq!(
            summarize(&members).unwrap(),
            "1 reports of Unknown in this area (Avg urgency: 4.0/10)"
        );
    }

    #[test]
    fn missing_urgency_counts_as_zero() {
        let complaints = vec![
            complaint("a", Some(Category::Streetlights), Some(6)),
            complaint("b", Some(Category::Streetlights), None),
        ];
        let members: Vec<&Complaint> = complaints.iter().collect();
        assert_eq!(
            summarize(&members).unwrap(),
            "2 reports of Streetlights in this area (Avg urgency: 3.0/10)"
        );
    }

    #[test]
    fn rejects_empty_group() {
        let result = summarize(&[]);
        assert!(matches!(result, Err(AnalyticsError::InvalidInput { .. })));
    }
}
