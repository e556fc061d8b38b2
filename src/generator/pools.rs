//! Fixed narrative copy and the seed-driven rotation that picks from it.

pub const HIGHLIGHTS: [&str; 7] = [
    "Setup takes under ten minutes with the guided onboarding wizard.",
    "Customers praise the premium build and matte finish that resists fingerprints.",
    "AI-powered summaries help teams brief stakeholders without combing through every review.",
    "Shoppers repeatedly mention the impressive battery endurance under heavy workloads.",
    "Bundles well with Amazon Replenish subscriptions for recurring accessories.",
    "Voice control integrations feel more intuitive compared to previous generation models.",
    "Packaging upgrades cut down on returns caused by in-transit damage.",
];

pub const PAIN_POINTS: [&str; 6] = [
    "Advanced automation templates require a brief learning curve for non-technical users.",
    "Replacement filters are pricier than comparable listings in the category.",
    "Mobile app notifications sometimes lag behind live review arrivals.",
    "Voice assistant occasionally misfires in noisier environments.",
    "Documented compatibility gaps with certain third-party accessories.",
    "Does not include a protective sleeve in-box, which several buyers expected.",
];

pub const OPPORTUNITIES: [&str; 5] = [
    "Highlight the quick-start video in the gallery to accelerate onboarding confidence.",
    "Bundle a discounted accessory kit to address recurring compatibility requests.",
    "Launch a proactive email flow targeting durability improvements and care tips.",
    "Surface social proof quotes that emphasize reliability under daily use.",
    "Expand customer support availability around peak shopping windows.",
];

pub const FEATURE_LABELS: [&str; 5] = [
    "Build quality",
    "Value for money",
    "Ease of setup",
    "Durability",
    "Customer support",
];

pub const TAKEAWAY_OVERWHELMINGLY_POSITIVE: &str = "Reviewers are overwhelmingly positive; lean into premium positioning while reinforcing supply confidence.";
pub const TAKEAWAY_TRENDING_POSITIVE: &str = "Sentiment trends upward with a few consistent friction points; address them in PDP messaging.";
pub const TAKEAWAY_SPLIT: &str = "Shoppers are split; reduce confusion with clearer expectations and guided comparisons.";

/// Number of items taken from each rotated pool.
pub const PICK_COUNT: usize = 3;

/// Rotation offset for a pool of `len` items; always in `[0, len)`.
///
/// `len` must be non-zero.
pub fn rotation_offset(seed: u64, len: usize) -> usize {
    (seed % len as u64) as usize
}

/// Rotate `items` left by the seed-derived offset.
pub fn rotate_pool<T: Clone>(items: &[T], seed: u64) -> Vec<T> {
    if items.is_empty() {
        return Vec::new();
    }
    let offset = rotation_offset(seed, items.len());
    let mut rotated = items.to_vec();
    rotated.rotate_left(offset);
    rotated
}

/// Rotate `pool` by `seed` and take the first [`PICK_COUNT`] entries.
pub fn pick(pool: &[&str], seed: u64) -> Vec<String> {
    rotate_pool(pool, seed)
        .into_iter()
        .take(PICK_COUNT)
        .map(str::to_string)
        .collect()
}
