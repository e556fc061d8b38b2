use scraper::{Html, Selector};

/// Class/id fragments that mark an element as user-generated text.
const KEYWORDS: [&str; 5] = ["comment", "review", "user", "message", "post"];

/// Texts at or below this many characters are treated as chrome, not comments.
const MIN_COMMENT_CHARS: usize = 20;

/// Collect comment-like text from an HTML page.
///
/// Every `div`, `p`, `li` and `span` whose lowercased `class` and `id`
/// mention one of [`KEYWORDS`] contributes its text, whitespace-collapsed,
/// when it is longer than [`MIN_COMMENT_CHARS`]. Nested matches each
/// contribute, so a review container and its body paragraph both appear.
pub fn scrape_comments(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let Ok(selector) = Selector::parse("div, p, li, span") else {
        return Vec::new();
    };

    document
        .select(&selector)
        .filter(|element| {
            let value = element.value();
            let marker = format!(
                "{} {}",
                value.attr("class").unwrap_or(""),
                value.id().unwrap_or("")
            )
            .to_lowercase();
            KEYWORDS.iter().any(|kw| marker.contains(kw))
        })
        .map(|element| collapse_whitespace(&element.text().collect::<Vec<_>>().join(" ")))
        .filter(|text| text.chars().count() > MIN_COMMENT_CHARS)
        .collect()
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
