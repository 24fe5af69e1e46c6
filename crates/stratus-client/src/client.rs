//! The config client: per-application fetch, aggregation, health.

use std::sync::Arc;

use futures::future;
use stratus_core::merge::aggregate_responses;
use stratus_core::{Application, ConfigResponse, MergedConfig};
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::format::TextFormat;
use crate::transport::{HttpTransport, Transport};

/// Client for a Spring Cloud Config compatible server.
///
/// Each [`load`](Self::load) call is one self-contained operation: it
/// fetches every configured application, merges the responses and returns
/// an independently-owned [`MergedConfig`]. Nothing is cached or shared
/// between calls.
///
/// # Example
///
/// ```no_run
/// use stratus_client::{ClientConfig, ConfigClient};
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ClientConfig::builder()
///     .endpoint("http://localhost:8888")
///     .application("myapp")
///     .profile("prod")
///     .build()?;
///
/// let client = ConfigClient::new(config)?;
/// let merged = client.load().await?;
///
/// println!("port = {:?}", merged.get_i64("server.port"));
/// # Ok(())
/// # }
/// ```
pub struct ConfigClient {
    config: ClientConfig,
    transport: Arc<dyn Transport>,
}

impl ConfigClient {
    /// Creates a client with the default HTTP transport.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let transport = Arc::new(HttpTransport::new(&config)?);
        Ok(Self { config, transport })
    }

    /// Creates a client with a custom transport.
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self { config, transport }
    }

    /// Returns the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetches and merges configuration for every configured application.
    ///
    /// All per-application requests are dispatched concurrently and merged
    /// only once every one of them has succeeded. Any single failure fails
    /// the whole call; partial results are never returned.
    ///
    /// # Errors
    ///
    /// - `ClientError::NoApplicationsConfigured` for an empty application list
    /// - `ClientError::Transport` / `ClientError::ExhaustedRetries` when a
    ///   fetch fails past its retry budget
    /// - `ClientError::Decode` when a response body is not a config payload
    pub async fn load(&self) -> Result<MergedConfig, ClientError> {
        let applications = self.config.applications();
        if applications.is_empty() {
            return Err(ClientError::NoApplicationsConfigured);
        }

        debug!(
            "loading configuration for {} application(s) from {}",
            applications.len(),
            self.config.endpoint()
        );

        let fetches = applications.iter().map(|application| {
            let url = self.config_url(application);
            async move {
                let body = self.transport.fetch(&url).await?;
                serde_json::from_str::<ConfigResponse>(&body)
                    .map_err(|e| ClientError::decode(url, e))
            }
        });

        let responses = future::try_join_all(fetches).await?;

        let aggregate =
            aggregate_responses(responses).ok_or(ClientError::NoApplicationsConfigured)?;

        Ok(MergedConfig::from_response(aggregate))
    }

    /// Fetches the first configured application's configuration rendered
    /// as raw text in the given format. The body is passed through
    /// unparsed.
    pub async fn load_raw(&self, format: TextFormat) -> Result<String, ClientError> {
        let application = self
            .config
            .applications()
            .first()
            .ok_or(ClientError::NoApplicationsConfigured)?;
        let profiles = self.config.effective_profiles();
        let profile = profiles.first().copied().unwrap_or("default");

        let url = format!(
            "{}/{}-{}.{}",
            self.config.endpoint(),
            application,
            profile,
            format.extension()
        );

        self.transport.fetch(&url).await
    }

    /// Probes the server's health endpoint.
    ///
    /// Returns `true` on any HTTP success status and `false` on any
    /// failure; transport errors are never propagated from here.
    pub async fn health(&self) -> bool {
        let url = format!("{}/actuator/health", self.config.endpoint());

        match self.transport.fetch(&url).await {
            Ok(_) => true,
            Err(err) => {
                debug!("health check failed: {}", err);
                false
            },
        }
    }

    /// Builds the config request URL for one application:
    /// `{endpoint}/{application}/{profile1,profile2}/{label}`.
    fn config_url(&self, application: &Application) -> String {
        let profiles = self.config.effective_profiles().join(",");
        let label = urlencoding::encode(self.config.label().as_str());

        format!(
            "{}/{}/{}/{}",
            self.config.endpoint(),
            application,
            profiles,
            label
        )
    }
}
