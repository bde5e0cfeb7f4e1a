#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Keyword-table complaint classification and urgency estimation.
//!
//! Lightweight rule-based text classification that runs at ingestion
//! time, before complaints reach the clustering and scoring engine. The
//! engine itself never classifies text; it consumes already-classified
//! complaints. Swapping in a model-backed classifier only requires
//! another [`ClassificationStrategy`] implementation.

use civic_mind_complaint_models::Category;

/// Assigns a category and urgency score to raw complaint text.
///
/// Implementations must be deterministic for a fixed input so that
/// re-ingesting the same complaint reproduces the same classification.
pub trait ClassificationStrategy {
    /// Classifies text into a category with a confidence in [0, 1].
    fn classify(&self, text: &str) -> (Category, f64);

    /// Estimates an urgency score in 1..=10 from the text.
    fn urgency(&self, text: &str) -> u8;
}

/// Sentiment label attached to a complaint's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentiment {
    /// At least one severity marker found.
    Negative,
    /// No severity markers found.
    Neutral,
}

/// Per-category keyword tables, in classification priority order.
const CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::WaterSupply,
        &[
            "water",
            "pipe",
            "supply",
            "tank",
            "tanker",
            "low pressure",
            "contaminated",
        ],
    ),
    (
        Category::Sanitation,
        &[
            "garbage",
            "waste",
            "trash",
            "overflowing",
            "smell",
            "foul",
            "drain",
            "sweeping",
        ],
    ),
    (
        Category::RoadsPotholes,
        &[
            "pothole",
            "road",
            "broken",
            "accident",
            "uneven",
            "repair",
            "pavement",
        ],
    ),
    (
        Category::Streetlights,
        &[
            "streetlight",
            "light",
            "dark",
            "flicker",
            "lamp",
            "bulb",
            "illumination",
        ],
    ),
    (
        Category::Electricity,
        &[
            "electric",
            "power",
            "cut",
            "transformer",
            "wire",
            "sparking",
            "line",
        ],
    ),
];

/// Markers that indicate a severe or hazardous situation.
const NEGATIVE_MARKERS: &[&str] = &[
    "critical",
    "danger",
    "urgent",
    "emergency",
    "accident",
    "dark",
    "overflowing",
    "foul",
    "no water",
    "power cut",
    "not working",
];

/// Keywords with the urgency score they imply.
const URGENCY_KEYWORDS: &[(&str, u8)] = &[
    ("critical", 10),
    ("dangerous", 9),
    ("emergency", 9),
    ("urgent", 8),
    ("broken", 7),
    ("flooding", 9),
    ("fire", 10),
    ("leak", 8),
    ("overflowing", 8),
    ("not working", 6),
    ("blocked", 7),
    ("days", 5),
    ("weeks", 4),
];

/// Rule-based classifier backed by static keyword tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordClassifier;

impl KeywordClassifier {
    /// Creates a classifier. The tables are compiled in; there is
    /// nothing to configure.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Detects severity markers and estimates a negativity score in
    /// roughly [0.5, 0.95]. Hits beyond three add nothing.
    #[must_use]
    pub fn analyze_sentiment(text: &str) -> (Sentiment, f64) {
        let lower = text.to_lowercase();
        let hits = NEGATIVE_MARKERS
            .iter()
            .filter(|marker| lower.contains(*marker))
            .count();
        #[allow(clippy::cast_precision_loss)]
        let score = 0.15f64.mul_add(hits.min(3) as f64, 0.5);
        let label = if hits > 0 {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        };
        (label, score)
    }

    /// Collapses runs of whitespace and trims the ends.
    #[must_use]
    pub fn clean_text(text: &str) -> String {
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

impl ClassificationStrategy for KeywordClassifier {
    /// Picks the category with the most keyword hits. When no keyword
    /// matches at all, returns [`Category::Sanitation`] with a flat 0.5
    /// confidence as the explicit default for unclassifiable text.
    fn classify(&self, text: &str) -> (Category, f64) {
        let lower = text.to_lowercase();

        let mut best = (Category::Sanitation, 0usize);
        for (category, keywords) in CATEGORY_KEYWORDS {
            let hits = keywords.iter().filter(|kw| lower.contains(*kw)).count();
            if hits > best.1 {
                best = (*category, hits);
            }
        }

        let (category, hits) = best;
        #[allow(clippy::cast_precision_loss)]
        let confidence = if hits > 0 {
            (hits as f64 / 3.0).min(1.0)
        } else {
            0.5
        };
        log::trace!("Classified complaint text as {category} ({hits} keyword hits)");
        (category, confidence)
    }

    /// Takes the highest score among matched urgency keywords (floor 1)
    /// and adds a +2 boost when sentiment is strongly negative, capped
    /// at 10.
    fn urgency(&self, text: &str) -> u8 {
        let lower = text.to_lowercase();
        let mut max_score = 1;
        for (keyword, score) in URGENCY_KEYWORDS {
            if lower.contains(keyword) {
                max_score = max_score.max(*score);
            }
        }

        let (_, sentiment_score) = Self::analyze_sentiment(text);
        if sentiment_score > 0.8 {
            max_score = (max_score + 2).min(10);
        }
        max_score
    }
}
