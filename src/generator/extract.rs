use std::sync::LazyLock;

use regex::Regex;
use reqwest::Url;

/// Product label used when no usable path segment exists.
pub const FALLBACK_PRODUCT_NAME: &str = "Amazon Listing";

/// Identifier used when neither the URL nor the product name yields one.
pub const SENTINEL_IDENTIFIER: &str = "UNKNOWNASIN";

const IDENTIFIER_LEN: usize = 10;

static IDENTIFIER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i:dp/|gp/product/|product/|asin=)([A-Za-z0-9]{10})")
        .expect("identifier pattern is valid")
});

static SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-_]+").expect("separator pattern is valid"));

/// Extract the 10-character product identifier from a URL.
///
/// Tried in order:
/// 1. a token following `dp/`, `gp/product/`, `product/` or `ASIN=`
/// 2. the last path segment that is exactly 10 alphanumerics
/// 3. the cleaned product name, padded with `X` to 10 characters (a name
///    with no ASCII alphanumerics becomes `XXXXXXXXXX`)
/// 4. [`SENTINEL_IDENTIFIER`] if the padded result is empty
pub fn extract_identifier(url: &str) -> String {
    if let Some(id) = marketplace_identifier(url) {
        return id;
    }
    if let Some(id) = trailing_segment_identifier(url) {
        return id;
    }
    identifier_from_name(&extract_product_name(url))
}

/// Extract a human-readable product name from the URL path.
///
/// Never fails: malformed URLs, undecodable segments and paths without a
/// candidate segment all resolve to [`FALLBACK_PRODUCT_NAME`].
pub fn extract_product_name(url: &str) -> String {
    product_name_candidate(url).unwrap_or_else(|| FALLBACK_PRODUCT_NAME.to_string())
}

fn marketplace_identifier(url: &str) -> Option<String> {
    IDENTIFIER_PATTERN
        .captures(url)
        .map(|caps| caps[1].to_ascii_uppercase())
}

fn trailing_segment_identifier(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let segments: Vec<&str> = parsed.path_segments()?.collect();
    segments
        .into_iter()
        .rev()
        .find(|s| s.len() == IDENTIFIER_LEN && s.chars().all(|c| c.is_ascii_alphanumeric()))
        .map(|s| s.to_ascii_uppercase())
}

fn identifier_from_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_uppercase())
        .collect();

    let mut id: String = cleaned.chars().take(IDENTIFIER_LEN).collect();
    while id.len() < IDENTIFIER_LEN {
        id.push('X');
    }

    if id.is_empty() {
        SENTINEL_IDENTIFIER.to_string()
    } else {
        id
    }
}

fn product_name_candidate(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let segment = parsed
        .path_segments()?
        .filter(|s| !s.is_empty())
        .find(|s| s.len() > 4 && !is_path_keyword(s))?;

    let spaced = SEPARATORS.replace_all(segment, " ");
    let decoded = urlencoding::decode(&spaced).ok()?;

    let name = to_title_case(&decoded);
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

/// Route words that never name a product (`dp`, `product`, `ref=...`).
fn is_path_keyword(segment: &str) -> bool {
    segment.starts_with("dp")
        || segment.eq_ignore_ascii_case("product")
        || segment.starts_with("ref=")
}

fn to_title_case(value: &str) -> String {
    value
        .split(' ')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
