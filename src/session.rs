//! Explicit analysis state: the current record, the last validation error,
//! and a bounded most-recent history.
//!
//! State changes go through [`Session::submit`], which consumes the old
//! session and returns the next one.

use tracing::debug;

use crate::config::MarketplaceConfig;
use crate::errors::ValidationError;
use crate::generator;
use crate::models::AnalysisRecord;
use crate::validate::validate_url;

/// URL analyzed when a run is started without input.
pub const SAMPLE_URL: &str = "https://www.amazon.com/dp/B0C1X9Z8JD";

/// Built-in example listings, as `(label, url)`.
pub const EXAMPLE_URLS: [(&str, &str); 3] = [
    ("Echo Pop", "https://www.amazon.com/dp/B0BZD2ZL8L"),
    ("Kindle Scribe", "https://www.amazon.com/dp/B09BS26B8T"),
    ("Cosori Air Fryer", "https://www.amazon.com/dp/B07R6MKJZH"),
];

/// Most-recent-first list of records with unique identifiers.
#[derive(Debug, Clone, PartialEq)]
pub struct History {
    capacity: usize,
    entries: Vec<AnalysisRecord>,
}

impl History {
    /// A capacity of zero is treated as one.
    pub fn new(capacity: usize) -> Self {
        History {
            capacity: capacity.max(1),
            entries: Vec::new(),
        }
    }

    /// Insert `record` at the front, dropping any older entry with the same
    /// identifier and anything past capacity.
    pub fn push(&mut self, record: AnalysisRecord) {
        self.entries.retain(|r| r.identifier != record.identifier);
        self.entries.insert(0, record);
        self.entries.truncate(self.capacity);
    }

    pub fn entries(&self) -> &[AnalysisRecord] {
        &self.entries
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Display label for a history position.
pub fn history_label(index: usize) -> String {
    if index == 0 {
        "Current".to_string()
    } else {
        format!("History {}", index)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub current: Option<AnalysisRecord>,
    pub history: History,
    pub error: Option<String>,
}

impl Session {
    pub fn new(capacity: usize) -> Self {
        Session {
            current: None,
            history: History::new(capacity),
            error: None,
        }
    }

    /// Start a session already showing the analysis of `url`.
    ///
    /// The seed URL bypasses validation.
    pub fn seeded(url: &str, capacity: usize) -> Self {
        let record = generator::analyze(url);
        let mut history = History::new(capacity);
        history.push(record.clone());
        Session {
            current: Some(record),
            history,
            error: None,
        }
    }

    /// Validate and analyze `input`.
    ///
    /// On rejection only `error` changes; on success the new record becomes
    /// current, enters the history, and the error is cleared.
    pub fn submit(mut self, input: &str, marketplace: &MarketplaceConfig) -> Self {
        match validate_url(input, marketplace) {
            Ok(_) => {
                let record = generator::analyze(input.trim());
                debug!(identifier = %record.identifier, "analysis recorded");
                self.history.push(record.clone());
                self.current = Some(record);
                self.error = None;
            }
            Err(err) => {
                match &err {
                    ValidationError::NotMarketplace { input } => {
                        debug!(%input, "rejected non-marketplace input")
                    }
                    ValidationError::Empty => debug!("rejected empty input"),
                }
                self.error = Some(err.to_string());
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use chrono::Utc;

    fn record(url: &str) -> AnalysisRecord {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        generator::analyze_at(url, at)
    }

    fn ids(history: &History) -> Vec<&str> {
        history.entries().iter().map(|r| r.identifier.as_str()).collect()
    }

    #[test]
    fn test_history_newest_first_and_bounded() {
        let mut history = History::new(5);
        for n in 0..7 {
            history.push(record(&format!("https://www.amazon.com/dp/B00000000{}", n)));
        }
        assert_eq!(history.len(), 5);
        assert_eq!(
            ids(&history),
            vec!["B000000006", "B000000005", "B000000004", "B000000003", "B000000002"]
        );
    }

    #[test]
    fn test_history_moves_duplicate_to_front() {
        let mut history = History::new(5);
        history.push(record("https://www.amazon.com/dp/B0C1X9Z8JD"));
        history.push(record("https://www.amazon.com/dp/B0BZD2ZL8L"));
        history.push(record("https://www.amazon.com/Scribe/dp/B0C1X9Z8JD"));
        assert_eq!(ids(&history), vec!["B0C1X9Z8JD", "B0BZD2ZL8L"]);
        assert_eq!(
            history.entries()[0].source_url,
            "https://www.amazon.com/Scribe/dp/B0C1X9Z8JD"
        );
    }

    #[test]
    fn test_zero_capacity_keeps_one() {
        let mut history = History::new(0);
        history.push(record("https://www.amazon.com/dp/B0C1X9Z8JD"));
        history.push(record("https://www.amazon.com/dp/B0BZD2ZL8L"));
        assert_eq!(history.capacity(), 1);
        assert_eq!(ids(&history), vec!["B0BZD2ZL8L"]);
    }

    #[test]
    fn test_submit_success_updates_state() {
        let m = MarketplaceConfig::default();
        let session = Session::new(5)
            .submit("  https://www.amazon.com/dp/B0C1X9Z8JD  ", &m);
        let current = session.current.as_ref().unwrap();
        assert_eq!(current.identifier, "B0C1X9Z8JD");
        assert_eq!(current.source_url, "https://www.amazon.com/dp/B0C1X9Z8JD");
        assert_eq!(session.history.len(), 1);
        assert!(session.error.is_none());
    }

    #[test]
    fn test_submit_rejection_keeps_prior_state() {
        let m = MarketplaceConfig::default();
        let before = Session::new(5).submit("https://www.amazon.com/dp/B0C1X9Z8JD", &m);
        let after = before.clone().submit("https://example.com/page", &m);

        assert_eq!(after.current, before.current);
        assert_eq!(after.history, before.history);
        assert_eq!(
            after.error.as_deref(),
            Some("Enter a valid product detail page URL.")
        );

        let after = after.submit("", &m);
        assert_eq!(after.error.as_deref(), Some("Paste a product URL to analyze."));
        assert_eq!(after.history, before.history);
    }

    #[test]
    fn test_success_clears_error() {
        let m = MarketplaceConfig::default();
        let session = Session::new(5)
            .submit("not a url", &m)
            .submit("https://amzn.to/3xYz", &m);
        assert!(session.error.is_none());
        assert!(session.current.is_some());
    }

    #[test]
    fn test_examples_are_valid_marketplace_urls() {
        let m = MarketplaceConfig::default();
        for (_, url) in EXAMPLE_URLS {
            assert!(crate::validate::is_marketplace_url(url, &m));
        }
        assert!(crate::validate::is_marketplace_url(SAMPLE_URL, &m));
    }

    #[test]
    fn test_seeded_session() {
        let session = Session::seeded(SAMPLE_URL, 5);
        assert_eq!(session.history.len(), 1);
        assert_eq!(
            session.current.as_ref().map(|r| r.identifier.as_str()),
            Some("B0C1X9Z8JD")
        );
    }

    #[test]
    fn test_history_labels() {
        assert_eq!(history_label(0), "Current");
        assert_eq!(history_label(3), "History 3");
    }
}
