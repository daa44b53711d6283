use std::time::Duration;

use axum::async_trait;

const SHORTEN_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Shortens long URLs for display in chat.
#[async_trait]
pub trait LinkShortener: Send + Sync {
    /// Returns a shortened form of `url`, or `url` itself when shortening is
    /// not possible. Never fails; any transport problem is absorbed here.
    async fn shorten(&self, url: &str) -> String;
}

/// Shortener backed by a git.io-style redirect service: POST the long URL as
/// a form field, read the short form from the redirect `Location` header.
pub struct HttpShortener {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpShortener {
    pub fn new(endpoint: String) -> anyhow::Result<Self> {
        // Redirects must not be followed, the Location header is the result.
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .timeout(SHORTEN_REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { client, endpoint })
    }

    async fn try_shorten(&self, url: &str) -> anyhow::Result<Option<String>> {
        let response = self
            .client
            .post(&self.endpoint)
            .form(&[("url", url)])
            .send()
            .await?;
        let location = response
            .headers()
            .get(reqwest::header::LOCATION)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string());
        Ok(location)
    }
}

#[async_trait]
impl LinkShortener for HttpShortener {
    async fn shorten(&self, url: &str) -> String {
        match self.try_shorten(url).await {
            Ok(Some(shortened)) => shortened,
            Ok(None) => {
                tracing::debug!("Shortener returned no Location header for {url}");
                url.to_string()
            }
            Err(error) => {
                tracing::debug!("Shortening {url} failed: {error:?}");
                url.to_string()
            }
        }
    }
}
