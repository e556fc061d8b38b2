use std::time::Duration;

use reqwest::{Client, Url};
use serde::Serialize;
use tracing::info;

use crate::errors::SentimentError;
use crate::models::SentimentCounts;

#[derive(Debug, Serialize)]
struct SentimentRequest<'a> {
    comments: &'a [String],
}

/// HTTP client for an external `POST /sentiment` service.
pub struct SentimentClient {
    client: Client,
    endpoint: Url,
}

impl SentimentClient {
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, SentimentError> {
        let endpoint = Url::parse(endpoint)
            .ok()
            .filter(|url| matches!(url.scheme(), "http" | "https"))
            .ok_or_else(|| SentimentError::InvalidEndpoint(endpoint.to_string()))?;

        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Post `comments` and return the per-label counts.
    pub async fn classify(&self, comments: &[String]) -> Result<SentimentCounts, SentimentError> {
        info!(endpoint = %self.endpoint, comments = comments.len(), "requesting sentiment");

        let response = self
            .client
            .post(self.endpoint.clone())
            .header("User-Agent", concat!("review-radar/", env!("CARGO_PKG_VERSION")))
            .json(&SentimentRequest { comments })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SentimentError::Status(status));
        }

        Ok(response.json().await?)
    }
}
