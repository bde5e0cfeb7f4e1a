#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Citizen complaint data model and category taxonomy.
//!
//! This crate defines the canonical complaint record and the closed
//! civic-issue category set used across the entire civic-mind system.
//! Classification happens upstream; by the time a complaint reaches the
//! clustering and scoring engine it is expected to carry a category,
//! coordinates, and a timestamp.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Civic issue categories that citizen complaints are classified into.
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
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    /// Drinking water supply issues (pipes, tankers, contamination)
    WaterSupply,
    /// Garbage, drainage, and street cleaning issues
    Sanitation,
    /// Road surface damage and potholes
    RoadsPotholes,
    /// Broken or missing street lighting
    Streetlights,
    /// Power cuts, transformers, exposed wiring
    Electricity,
}

impl Category {
    /// Human-readable display name shown in summaries and map tooltips.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::WaterSupply => "Water Supply",
            Self::Sanitation => "Sanitation",
            Self::RoadsPotholes => "Roads/Potholes",
            Self::Streetlights => "Streetlights",
            Self::Electricity => "Electricity",
        }
    }

    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::WaterSupply,
            Self::Sanitation,
            Self::RoadsPotholes,
            Self::Streetlights,
            Self::Electricity,
        ]
    }
}

/// Coarse urgency bands derived from the 1-10 urgency score.
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
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum UrgencyLevel {
    /// Scores 0-3: routine maintenance requests
    Low,
    /// Scores 4-6: should be addressed soon
    Medium,
    /// Scores 7-8: active disruption to residents
    High,
    /// Scores 9-10: safety hazard, immediate attention
    Critical,
}

impl UrgencyLevel {
    /// Maps a 0-10 urgency score onto a band. Scores above 10 saturate
    /// at [`Self::Critical`].
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        match score {
            0..=3 => Self::Low,
            4..=6 => Self::Medium,
            7..=8 => Self::High,
            _ => Self::Critical,
        }
    }
}

/// Geographic location attached to a complaint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
    /// Administrative ward, when known.
    pub ward: Option<String>,
    /// Neighborhood or locality name, when known.
    pub area_name: Option<String>,
}

impl Location {
    /// Creates a location from bare coordinates with no ward or area name.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            ward: None,
            area_name: None,
        }
    }
}

/// A single geotagged citizen complaint.
///
/// Identity is by `id`; two complaints never share one. The engine treats
/// these records as immutable input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Complaint {
    /// Storage-assigned identifier.
    pub id: String,
    /// Raw complaint text as submitted.
    pub text: String,
    /// Classified category, absent when classification has not run or
    /// produced no match.
    pub category: Option<Category>,
    /// Where the problem was reported.
    pub location: Location,
    /// Urgency on a 1-10 scale, absent when not yet scored.
    pub urgency_score: Option<u8>,
    /// When the complaint was submitted.
    pub timestamp: DateTime<Utc>,
}

impl Complaint {
    /// Urgency score as a float, treating an absent score as 0.
    #[must_use]
    pub fn urgency_or_zero(&self) -> f64 {
        f64::from(self.urgency_score.unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_are_human_readable() {
        assert_eq!(Category::WaterSupply.display_name(), "Water Supply");
        assert_eq!(Category::RoadsPotholes.display_name(), "Roads/Potholes");
    }

    #[test]
    fn category_serializes_screaming_snake() {
        let json = serde_json::to_string(&Category::RoadsPotholes).unwrap();
        assert_eq!(json, "\"ROADS_POTHOLES\"");
    }

    #[test]
    fn urgency_bands_cover_full_range() {
        assert_eq!(UrgencyLevel::from_score(0), UrgencyLevel::Low);
        assert_eq!(UrgencyLevel::from_score(5), UrgencyLevel::Medium);
        assert_eq!(UrgencyLevel::from_score(8), UrgencyLevel::High);
        assert_eq!(UrgencyLevel::from_score(10), UrgencyLevel::Critical);
        assert_eq!(UrgencyLevel::from_score(200), UrgencyLevel::Critical);
    }

    #[test]
    fn missing_urgency_counts_as_zero() {
        let complaint = Complaint {
            id: "c1".to_string(),
            text: "streetlight out".to_string(),
            category: Some(Category::Streetlights),
            location: Location::new(12.97, 77.59),
            urgency_score: None,
            timestamp: Utc::now(),
        };
        assert!((complaint.urgency_or_zero() - 0.0).abs() < f64::EPSILON);
    }
}
