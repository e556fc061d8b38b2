use reqwest::Url;

use crate::config::MarketplaceConfig;
use crate::errors::ValidationError;

/// Check that `input` is an absolute URL on a supported marketplace host.
///
/// Input is trimmed first. The host must contain one of the configured
/// fragments (by default `amazon.` or the `amzn.to` short-link domain).
pub fn validate_url(input: &str, marketplace: &MarketplaceConfig) -> Result<Url, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty);
    }

    let rejected = || ValidationError::NotMarketplace {
        input: trimmed.to_string(),
    };

    let parsed = Url::parse(trimmed).map_err(|_| rejected())?;
    let host = parsed.host_str().ok_or_else(|| rejected())?;

    if marketplace
        .host_fragments
        .iter()
        .any(|fragment| host.contains(fragment.as_str()))
    {
        Ok(parsed)
    } else {
        Err(rejected())
    }
}

/// Predicate form of [`validate_url`].
pub fn is_marketplace_url(input: &str, marketplace: &MarketplaceConfig) -> bool {
    validate_url(input, marketplace).is_ok()
}
