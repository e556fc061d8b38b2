use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One synthetic review analysis for a product URL.
///
/// Records are produced by [`crate::generator::analyze`] and never mutated
/// afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRecord {
    pub identifier: String,
    pub product_name: String,
    pub product_category: ProductCategory,
    pub source_url: String,
    pub rating: f64,
    pub review_count: u32,
    pub monthly_mentions: u32,
    pub sentiment: SentimentBreakdown,
    pub highlights: Vec<String>,
    pub pain_points: Vec<String>,
    pub opportunities: Vec<String>,
    pub key_takeaway: String,
    pub created_at: DateTime<Utc>,
    pub feature_scores: Vec<FeatureScore>,
}

impl AnalysisRecord {
    /// Positive share minus negative share, in percentage points.
    pub fn net_sentiment(&self) -> i32 {
        self.sentiment.positive as i32 - self.sentiment.negative as i32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentBreakdown {
    pub positive: u32,
    pub neutral: u32,
    pub negative: u32,
}

impl SentimentBreakdown {
    pub fn total(&self) -> u32 {
        self.positive + self.neutral + self.negative
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureScore {
    pub label: String,
    pub score: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductCategory {
    #[serde(rename = "Smart Home")]
    SmartHome,
    #[serde(rename = "Kitchen & Home")]
    KitchenAndHome,
    #[serde(rename = "Health & Wellness")]
    HealthAndWellness,
    #[serde(rename = "Workstation")]
    Workstation,
    #[serde(rename = "Gaming & Entertainment")]
    GamingAndEntertainment,
    #[serde(rename = "Audio & Music")]
    AudioAndMusic,
    #[serde(rename = "Travel Gear")]
    TravelGear,
    #[serde(rename = "Personal Care")]
    PersonalCare,
}

impl ProductCategory {
    /// All categories in seed-index order.
    pub const ALL: [ProductCategory; 8] = [
        ProductCategory::SmartHome,
        ProductCategory::KitchenAndHome,
        ProductCategory::HealthAndWellness,
        ProductCategory::Workstation,
        ProductCategory::GamingAndEntertainment,
        ProductCategory::AudioAndMusic,
        ProductCategory::TravelGear,
        ProductCategory::PersonalCare,
    ];
}

impl std::fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductCategory::SmartHome => write!(f, "Smart Home"),
            ProductCategory::KitchenAndHome => write!(f, "Kitchen & Home"),
            ProductCategory::HealthAndWellness => write!(f, "Health & Wellness"),
            ProductCategory::Workstation => write!(f, "Workstation"),
            ProductCategory::GamingAndEntertainment => write!(f, "Gaming & Entertainment"),
            ProductCategory::AudioAndMusic => write!(f, "Audio & Music"),
            ProductCategory::TravelGear => write!(f, "Travel Gear"),
            ProductCategory::PersonalCare => write!(f, "Personal Care"),
        }
    }
}

/// Counts returned by the remote sentiment endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentCounts {
    pub positive: u32,
    pub negative: u32,
    pub neutral: u32,
}

impl std::fmt::Display for SentimentCounts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "positive {}, negative {}, neutral {}",
            self.positive, self.negative, self.neutral
        )
    }
}
