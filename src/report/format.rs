//! Presentation helpers shared by the renderers. Nothing here is stored on a
//! record; values are recomputed at render time.

use crate::models::SentimentBreakdown;

/// Format an integer with `,` thousands separators (`12345` → `12,345`).
pub fn format_number(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Five-glyph star row. A half star is shown when the fractional part of
/// the rating lies in `[0.4, 0.85)`.
pub fn star_row(rating: f64) -> String {
    let full = rating.floor().clamp(0.0, 5.0) as usize;
    let fraction = rating - rating.floor();
    let has_half = (0.4..0.85).contains(&fraction);

    (1..=5)
        .map(|index| {
            if index <= full {
                '★'
            } else if index == full + 1 && has_half {
                '⯪'
            } else {
                '☆'
            }
        })
        .collect()
}

/// Signed net sentiment with one decimal, e.g. `+12.0 pts`.
pub fn net_sentiment_label(net: i32) -> String {
    let sign = if net >= 0 { "+" } else { "" };
    format!("{}{:.1} pts", sign, f64::from(net))
}

pub fn dominant_tilt(sentiment: &SentimentBreakdown) -> &'static str {
    if sentiment.positive > sentiment.negative {
        "Positive tilt"
    } else {
        "Critical tilt"
    }
}

/// Confidence percentage shown next to the rating, capped at 98.
pub fn rating_confidence(rating: f64) -> u32 {
    let confidence = 74.0 + (rating * 4.0).round();
    confidence.min(98.0) as u32
}

/// Horizontal bar of `width` cells filled in proportion to `value / max`.
pub fn bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return " ".repeat(width);
    }
    let filled = ((value / max).clamp(0.0, 1.0) * width as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
