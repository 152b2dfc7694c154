//! Figma API client with 429 retry and backoff.
//!
//! The transport is a collaborator of the compiler core: rate limits and
//! network failures surface here and are never raised from the pipeline.

use anyhow::Result;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client, Response, StatusCode};
use std::time::Duration;
use tokio::time::sleep;

const FIGMA_API_BASE: &str = "https://api.figma.com/v1";

const MAX_RETRIES: u32 = 5;
const BASE_DELAY_MS: u64 = 1000;
const MAX_DELAY_MS: u64 = 120_000;

/// HTTP client bound to a Figma access token.
pub struct FigmaClient {
    client: Client,
}

impl FigmaClient {
    /// Create a new client with the given access token.
    pub fn new(token: String) -> Result<Self> {
        let mut headers = HeaderMap::new();
        // Figma uses X-Figma-Token, not Bearer auth
        headers.insert("X-Figma-Token", HeaderValue::from_str(&token)?);

        let client = Client::builder()
            .default_headers(headers)
            .user_agent("figx/0.1.0")
            .build()?;

        Ok(Self { client })
    }

    pub fn base_url(&self) -> &str {
        FIGMA_API_BASE
    }

    /// Check the token by calling /me.
    pub async fn validate_token(&self) -> Result<bool> {
        let url = format!("{}/me", FIGMA_API_BASE);
        let response = self.get_with_retry(&url).await?;
        Ok(response.status().is_success())
    }

    /// GET a URL and parse the JSON response, retrying on HTTP 429.
    pub async fn get_json<T>(&self, url: &str) -> Result<T>
    where
        T: for<'de> serde::Deserialize<'de>,
    {
        let response = self.get_with_retry(url).await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            anyhow::bail!("Figma API error {}: {}", status, error_text);
        }

        let result = response.json().await?;
        Ok(result)
    }

    /// Execute a GET with exponential backoff on rate limiting.
    async fn get_with_retry(&self, url: &str) -> Result<Response> {
        let mut attempt = 0;
        loop {
            let response = self.client.get(url).send().await?;

            if response.status() != StatusCode::TOO_MANY_REQUESTS {
                return Ok(response);
            }
            if attempt >= MAX_RETRIES {
                anyhow::bail!(
                    "rate limit exceeded after {} retries; wait before trying again",
                    MAX_RETRIES
                );
            }

            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok());
            let delay = backoff_delay(retry_after, attempt);
            eprintln!(
                "Rate limited. Waiting {:?} before retry ({}/{})...",
                delay,
                attempt + 1,
                MAX_RETRIES
            );
            sleep(delay).await;
            attempt += 1;
        }
    }
}

/// Delay before the next retry: the server's Retry-After when present,
/// otherwise exponential backoff with jitter to avoid thundering herds.
fn backoff_delay(retry_after: Option<u64>, attempt: u32) -> Duration {
    if let Some(seconds) = retry_after {
        return Duration::from_secs(seconds);
    }
    let exp_delay = BASE_DELAY_MS.saturating_mul(2u64.pow(attempt));
    let capped = exp_delay.min(MAX_DELAY_MS);
    let jitter = (rand::random::<f64>() * 0.25 * capped as f64) as u64;
    Duration::from_millis(capped + jitter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backoff_doubles_per_attempt() {
        let d0 = backoff_delay(None, 0);
        assert!(d0.as_millis() >= 1000 && d0.as_millis() <= 1250);

        let d1 = backoff_delay(None, 1);
        assert!(d1.as_millis() >= 2000 && d1.as_millis() <= 2500);

        let d2 = backoff_delay(None, 2);
        assert!(d2.as_millis() >= 4000 && d2.as_millis() <= 5000);
    }

    #[test]
    fn backoff_respects_cap() {
        let d = backoff_delay(None, 30);
        assert!(d.as_millis() <= (MAX_DELAY_MS + MAX_DELAY_MS / 4) as u128);
    }

    #[test]
    fn retry_after_overrides_backoff() {
        assert_eq!(backoff_delay(Some(30), 0), Duration::from_secs(30));
    }
}
