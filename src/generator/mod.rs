//! Deterministic mock review analysis.
//!
//! Every number and every piece of copy in an [`AnalysisRecord`] is derived
//! from a 32-bit seed computed over the product identifier and name, so the
//! same URL always yields the same record (apart from `created_at`).
//!
//! - [`extract`] pulls the identifier and product name out of the URL.
//! - [`seed`] hashes them into the seed.
//! - [`pools`] holds the fixed copy and the rotation used to pick from it.

pub mod extract;
pub mod pools;
pub mod seed;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::models::{AnalysisRecord, FeatureScore, ProductCategory, SentimentBreakdown};
use extract::{extract_identifier, extract_product_name};
use pools::{
    pick, FEATURE_LABELS, HIGHLIGHTS, OPPORTUNITIES, PAIN_POINTS,
    TAKEAWAY_OVERWHELMINGLY_POSITIVE, TAKEAWAY_SPLIT, TAKEAWAY_TRENDING_POSITIVE,
};
use seed::seed_for;

const MIN_NEUTRAL: i32 = 12;
const MIN_POSITIVE: i32 = 38;
const MIN_RATING: f64 = 2.8;
const MAX_RATING: f64 = 4.9;
const MAX_FEATURE_SCORE: f64 = 4.9;

/// Analyze `url`, stamping the record with the current time.
pub fn analyze(url: &str) -> AnalysisRecord {
    analyze_at(url, Utc::now())
}

/// Analyze `url` with an explicit creation time.
///
/// Total over any input string: extraction failures fall back to fixed
/// values instead of erroring.
pub fn analyze_at(url: &str, created_at: DateTime<Utc>) -> AnalysisRecord {
    let identifier = extract_identifier(url);
    let product_name = extract_product_name(url);
    let seed = seed_for(&identifier, &product_name);

    debug!(%identifier, %product_name, seed, "derived analysis seed");

    let sentiment = sentiment_split(seed);
    let net = sentiment.positive as i32 - sentiment.negative as i32;

    AnalysisRecord {
        identifier,
        product_name,
        product_category: category(seed),
        source_url: url.to_string(),
        rating: rating(net),
        review_count: (420 + (seed % 12) * 160).max(220),
        monthly_mentions: 60 + (seed >> 3) % 200,
        sentiment,
        highlights: pick(&HIGHLIGHTS, u64::from(seed)),
        pain_points: pick(&PAIN_POINTS, u64::from(seed) + 7),
        opportunities: pick(&OPPORTUNITIES, u64::from(seed) + 13),
        key_takeaway: key_takeaway(net).to_string(),
        created_at,
        feature_scores: feature_scores(seed),
    }
}

/// Split 100 percentage points into positive / neutral / negative.
fn sentiment_split(seed: u32) -> SentimentBreakdown {
    let mut positive = 55 + (seed % 26) as i32;
    let negative = 8 + ((seed >> 2) % 16) as i32;
    let mut neutral = 100 - positive - negative;

    if neutral < MIN_NEUTRAL {
        let adjustment = MIN_NEUTRAL - neutral;
        neutral += adjustment;
        positive = (positive - adjustment).max(MIN_POSITIVE);
    }

    let total = positive + negative + neutral;
    if total != 100 {
        positive += 100 - total;
    }

    let split = SentimentBreakdown {
        positive: positive as u32,
        neutral: neutral as u32,
        negative: negative as u32,
    };
    debug_assert_eq!(split.total(), 100);
    split
}

fn rating(net: i32) -> f64 {
    round_tenth((3.45 + f64::from(net) / 45.0).clamp(MIN_RATING, MAX_RATING))
}

fn category(seed: u32) -> ProductCategory {
    ProductCategory::ALL[(seed as usize) % ProductCategory::ALL.len()]
}

fn feature_scores(seed: u32) -> Vec<FeatureScore> {
    FEATURE_LABELS
        .iter()
        .enumerate()
        .map(|(index, label)| {
            let step = (seed >> (index + 1)) % 18;
            let raw = 3.1 + f64::from(step) / 10.0;
            FeatureScore {
                label: label.to_string(),
                score: round_tenth(raw.min(MAX_FEATURE_SCORE)),
            }
        })
        .collect()
}

fn key_takeaway(net: i32) -> &'static str {
    if net > 20 {
        TAKEAWAY_OVERWHELMINGLY_POSITIVE
    } else if net > 5 {
        TAKEAWAY_TRENDING_POSITIVE
    } else {
        TAKEAWAY_SPLIT
    }
}

/// Round a non-negative value to one decimal, half-up on its exact binary
/// expansion: `3.45 + 1.4` is stored as `4.8499..` and becomes `4.8`, while
/// the exact tie `4.25` becomes `4.3`.
fn round_tenth(value: f64) -> f64 {
    let exact = format!("{:.60}", value);
    let Some(dot) = exact.find('.') else {
        return value;
    };
    let (tenths, rest) = exact.split_at(dot + 2);
    let Ok(truncated) = tenths.parse::<f64>() else {
        return value;
    };

    let rounded = if rest.as_bytes().first().is_some_and(|d| *d >= b'5') {
        truncated + 0.1
    } else {
        truncated
    };
    format!("{:.1}", rounded).parse().unwrap_or(rounded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const SAMPLE_URL: &str = "https://www.amazon.com/dp/B0C1X9Z8JD";

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    fn random_url(rng: &mut StdRng) -> String {
        const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789-_%/?=.";
        let len = rng.gen_range(0..60);
        let tail: String = (0..len)
            .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
            .collect();
        match rng.gen_range(0..3) {
            0 => format!("https://www.amazon.com/{}", tail),
            1 => format!("https://amzn.to/{}", tail),
            _ => tail,
        }
    }

    #[test]
    fn test_sample_url() {
        let a = analyze(SAMPLE_URL);
        let b = analyze(SAMPLE_URL);
        assert_eq!(a.identifier, "B0C1X9Z8JD");
        assert_eq!(a.rating, b.rating);
        assert_eq!(a.sentiment.total(), 100);
        assert_eq!(a.feature_scores.len(), 5);
        assert_eq!(a.source_url, SAMPLE_URL);
    }

    #[test]
    fn test_deterministic_apart_from_timestamp() {
        let urls = [
            SAMPLE_URL,
            "https://www.amazon.com/Echo-Pop/dp/B0BZD2ZL8L",
            "https://amzn.to/3xYz",
            "not a url",
        ];
        for url in urls {
            assert_eq!(analyze_at(url, fixed_time()), analyze_at(url, fixed_time()));
        }
    }

    #[test]
    fn test_invariants_over_random_inputs() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..10_000 {
            let url = random_url(&mut rng);
            let record = analyze_at(&url, fixed_time());
            let s = record.sentiment;

            assert_eq!(s.total(), 100, "sentiment total for {url}");
            assert!(s.neutral >= 12, "neutral for {url}");
            assert!(s.positive >= 38, "positive for {url}");
            assert!((2.8..=4.9).contains(&record.rating), "rating for {url}");
            assert!(record.review_count >= 220);
            assert!(record.monthly_mentions >= 60);
            assert!(
                record.identifier.len() == 10
                    && record
                        .identifier
                        .chars()
                        .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()),
                "identifier {} for {url}",
                record.identifier
            );
            assert_eq!(record.feature_scores.len(), 5);
            for feature in &record.feature_scores {
                assert!((3.1..=4.9).contains(&feature.score));
            }
            assert_eq!(record.highlights.len(), 3);
            assert_eq!(record.pain_points.len(), 3);
            assert_eq!(record.opportunities.len(), 3);
        }
    }

    #[test]
    fn test_sentiment_split_raises_neutral() {
        // positive 80, negative 14 leaves 6 neutral before adjustment
        let s = sentiment_split(25);
        assert_eq!(s.positive, 74);
        assert_eq!(s.neutral, 12);
        assert_eq!(s.negative, 14);
    }

    #[test]
    fn test_sentiment_split_without_adjustment() {
        let s = sentiment_split(0);
        assert_eq!(s.positive, 55);
        assert_eq!(s.negative, 8);
        assert_eq!(s.neutral, 37);
    }

    #[test]
    fn test_rating_clamped_and_rounded() {
        assert_eq!(rating(72), 4.9);
        assert_eq!(rating(-100), 2.8);
        assert_eq!(rating(0), 3.5);
        assert_eq!(rating(10), 3.7);
        assert_eq!(rating(30), 4.1);
        assert_eq!(rating(27), 4.0);
        assert_eq!(rating(63), 4.8);
        // exact ties round up
        assert_eq!(rating(36), 4.3);
        assert_eq!(rating(-9), 3.3);
    }

    #[test]
    fn test_round_tenth_uses_exact_value() {
        assert_eq!(round_tenth(3.45 + 1.4), 4.8);
        assert_eq!(round_tenth(3.45), 3.5);
        assert_eq!(round_tenth(3.1 + 0.3), 3.4);
        assert_eq!(round_tenth(4.25), 4.3);
        assert_eq!(round_tenth(4.9), 4.9);
    }

    #[test]
    fn test_punctuation_only_listing() {
        let record = analyze("https://www.amazon.com/!!!!!");
        assert_eq!(record.product_name, "!!!!!");
        assert_eq!(record.identifier, "XXXXXXXXXX");
        assert_eq!(record.sentiment.total(), 100);
    }

    #[test]
    fn test_key_takeaway_thresholds() {
        assert_eq!(key_takeaway(21), TAKEAWAY_OVERWHELMINGLY_POSITIVE);
        assert_eq!(key_takeaway(20), TAKEAWAY_TRENDING_POSITIVE);
        assert_eq!(key_takeaway(6), TAKEAWAY_TRENDING_POSITIVE);
        assert_eq!(key_takeaway(5), TAKEAWAY_SPLIT);
        assert_eq!(key_takeaway(-10), TAKEAWAY_SPLIT);
    }

    #[test]
    fn test_feature_scores_follow_seed_bits() {
        let scores = feature_scores(0);
        assert!(scores.iter().all(|f| f.score == 3.1));
        assert_eq!(scores[0].label, "Build quality");
        assert_eq!(scores[4].label, "Customer support");

        // seed >> 1 == 17 gives the top step
        let scores = feature_scores(34);
        assert_eq!(scores[0].score, 4.8);
    }

    #[test]
    fn test_category_indexed_by_seed() {
        assert_eq!(category(0), ProductCategory::SmartHome);
        assert_eq!(category(7), ProductCategory::PersonalCare);
        assert_eq!(category(9), ProductCategory::KitchenAndHome);
    }
}
