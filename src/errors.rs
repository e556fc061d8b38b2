use thiserror::Error;

/// Why an input was not accepted for analysis.
///
/// The display strings are shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Paste a product URL to analyze.")]
    Empty,
    #[error("Enter a valid product detail page URL.")]
    NotMarketplace { input: String },
}

/// Failures talking to the remote sentiment endpoint.
#[derive(Debug, Error)]
pub enum SentimentError {
    #[error("invalid sentiment endpoint '{0}'")]
    InvalidEndpoint(String),
    #[error("sentiment endpoint returned {0}")]
    Status(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}
