//! HTTP transport with bounded retry.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::ClientError;

/// Fetches raw response bodies for the client.
///
/// This is the seam between the loader and the network: the loader only
/// ever asks for "the body behind this URL" and all header, timeout and
/// retry concerns live behind this trait. Tests substitute their own
/// implementation.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Fetches the body at `url`, retrying per the configured policy.
    ///
    /// # Errors
    ///
    /// - `ClientError::Transport` when the single configured attempt fails
    /// - `ClientError::ExhaustedRetries` when every attempt of a retry
    ///   budget failed, wrapping the last failure
    async fn fetch(&self, url: &str) -> Result<String, ClientError>;
}

/// `reqwest`-backed transport.
///
/// The inner client is built once per `ClientConfig`: per-attempt timeout,
/// caller-supplied static headers, and the `X-API-Key` header when an API
/// key credential is configured. Any non-success HTTP status counts as a
/// retryable failure.
pub struct HttpTransport {
    client: reqwest::Client,
    max_retries: u32,
    retry_delay: Duration,
    exponential_backoff: bool,
}

impl HttpTransport {
    /// Builds a transport from the client configuration.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let mut headers = HeaderMap::new();

        for (name, value) in config.headers() {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| ClientError::invalid_config(format!("header '{}': {}", name, e)))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| ClientError::invalid_config(format!("header '{}': {}", name, e)))?;
            headers.insert(name, value);
        }

        if let Some(key) = config.api_key() {
            let value = HeaderValue::from_str(key)
                .map_err(|e| ClientError::invalid_config(format!("api key: {}", e)))?;
            headers.insert(HeaderName::from_static("x-api-key"), value);
        }

        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .default_headers(headers)
            .build()
            .map_err(|e| ClientError::invalid_config(e.to_string()))?;

        Ok(Self {
            client,
            max_retries: config.max_retries(),
            retry_delay: config.retry_delay(),
            exponential_backoff: config.exponential_backoff(),
        })
    }

    /// Delay before retry number `attempt + 1` (0-based failed attempt).
    fn backoff_delay(&self, attempt: u32) -> Duration {
        if self.exponential_backoff {
            self.retry_delay
                .saturating_mul(2u32.saturating_pow(attempt))
        } else {
            self.retry_delay
        }
    }

    async fn attempt(&self, url: &str) -> Result<String, ClientError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ClientError::transport(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::status(url, status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| ClientError::transport(url, e))
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn fetch(&self, url: &str) -> Result<String, ClientError> {
        let mut attempt = 0;

        loop {
            match self.attempt(url).await {
                Ok(body) => {
                    debug!("GET {} ok on attempt {}", url, attempt + 1);
                    return Ok(body);
                },
                Err(err) if attempt < self.max_retries => {
                    let delay = self.backoff_delay(attempt);
                    warn!(
                        "GET {} failed (attempt {}/{}): {}; retrying in {:?}",
                        url,
                        attempt + 1,
                        self.max_retries + 1,
                        err,
                        delay
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                },
                Err(err) => {
                    // A zero retry budget surfaces the bare failure
                    return Err(if self.max_retries == 0 {
                        err
                    } else {
                        ClientError::exhausted(self.max_retries + 1, err)
                    });
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transport(max_retries: u32, delay_ms: u64, exponential: bool) -> HttpTransport {
        let config = ClientConfig::builder()
            .endpoint("http://localhost")
            .application("myapp")
            .max_retries(max_retries)
            .retry_delay_ms(delay_ms)
            .exponential_backoff(exponential)
            .build()
            .unwrap();
        HttpTransport::new(&config).unwrap()
    }

    #[test]
    fn test_exponential_backoff_doubles() {
        let t = transport(5, 100, true);

        assert_eq!(t.backoff_delay(0), Duration::from_millis(100));
        assert_eq!(t.backoff_delay(1), Duration::from_millis(200));
        assert_eq!(t.backoff_delay(2), Duration::from_millis(400));
        assert_eq!(t.backoff_delay(3), Duration::from_millis(800));
    }

    #[test]
    fn test_fixed_delay_is_constant() {
        let t = transport(5, 100, false);

        assert_eq!(t.backoff_delay(0), Duration::from_millis(100));
        assert_eq!(t.backoff_delay(4), Duration::from_millis(100));
    }

    #[test]
    fn test_rejects_invalid_header() {
        let config = ClientConfig::builder()
            .endpoint("http://localhost")
            .application("myapp")
            .header("bad header name", "value")
            .build()
            .unwrap();

        assert!(matches!(
            HttpTransport::new(&config),
            Err(ClientError::InvalidConfig(_))
        ));
    }
}
