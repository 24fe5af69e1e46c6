//! Client configuration.

use std::time::Duration;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use stratus_core::{Application, Label, Profile};

/// Configuration for a [`ConfigClient`](crate::ConfigClient).
///
/// Built once at construction time and immutable afterwards; there is no
/// runtime mutation surface and no shared defaults singleton. Each client
/// owns its own config.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    /// Config server base URL. Trailing slashes are stripped.
    endpoint: String,

    /// Applications to fetch, in priority order: the *last* entry wins
    /// over earlier ones when the merged views are built.
    applications: Vec<Application>,

    /// Active profiles. Empty means `["default"]`.
    #[serde(default)]
    profiles: Vec<Profile>,

    /// Branch/tag label to request.
    #[serde(default = "default_label")]
    label: Label,

    /// Per-attempt request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    timeout_ms: u64,

    /// Maximum number of retries after a failed attempt.
    #[serde(default = "default_max_retries")]
    max_retries: u32,

    /// Base delay between attempts in milliseconds.
    #[serde(default = "default_retry_delay_ms")]
    retry_delay_ms: u64,

    /// Whether the retry delay doubles after each failed attempt.
    #[serde(default = "default_true")]
    exponential_backoff: bool,

    /// Static headers attached to every request.
    #[serde(default)]
    headers: IndexMap<String, String>,

    /// API key credential; sent as `X-API-Key` when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    api_key: Option<String>,
}

fn default_label() -> Label {
    Label::main()
}

fn default_timeout_ms() -> u64 {
    5000
}

fn default_max_retries() -> u32 {
    3
}

fn default_retry_delay_ms() -> u64 {
    1000
}

fn default_true() -> bool {
    true
}

impl ClientConfig {
    /// Creates a new builder for ClientConfig.
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Returns the endpoint URL without trailing slashes.
    pub fn endpoint(&self) -> &str {
        self.endpoint.trim_end_matches('/')
    }

    /// Returns the configured applications in priority order (last wins).
    pub fn applications(&self) -> &[Application] {
        &self.applications
    }

    /// Returns the configured profiles as given.
    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    /// Returns the effective profiles (defaults to `["default"]` if empty).
    pub fn effective_profiles(&self) -> Vec<&str> {
        if self.profiles.is_empty() {
            vec!["default"]
        } else {
            self.profiles.iter().map(|p| p.as_str()).collect()
        }
    }

    /// Returns the label to request.
    pub fn label(&self) -> &Label {
        &self.label
    }

    /// Returns the per-attempt timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Returns the maximum retry count.
    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// Returns the base delay between attempts.
    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }

    /// Returns whether exponential backoff is enabled.
    pub fn exponential_backoff(&self) -> bool {
        self.exponential_backoff
    }

    /// Returns the static request headers.
    pub fn headers(&self) -> &IndexMap<String, String> {
        &self.headers
    }

    /// Returns the API key credential, if configured.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }
}

/// Builder for ClientConfig.
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    endpoint: Option<String>,
    applications: Vec<Application>,
    profiles: Vec<Profile>,
    label: Option<Label>,
    timeout_ms: Option<u64>,
    max_retries: Option<u32>,
    retry_delay_ms: Option<u64>,
    exponential_backoff: Option<bool>,
    headers: IndexMap<String, String>,
    api_key: Option<String>,
}

impl ClientConfigBuilder {
    /// Sets the config server endpoint URL.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Adds an application. Later additions take merge priority over
    /// earlier ones.
    pub fn application(mut self, application: impl Into<Application>) -> Self {
        self.applications.push(application.into());
        self
    }

    /// Sets the applications, replacing any previously added.
    pub fn applications(mut self, applications: Vec<impl Into<Application>>) -> Self {
        self.applications = applications.into_iter().map(Into::into).collect();
        self
    }

    /// Adds an active profile.
    pub fn profile(mut self, profile: impl Into<Profile>) -> Self {
        self.profiles.push(profile.into());
        self
    }

    /// Sets the profiles, replacing any previously added.
    pub fn profiles(mut self, profiles: Vec<impl Into<Profile>>) -> Self {
        self.profiles = profiles.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the label (branch/tag).
    pub fn label(mut self, label: impl Into<Label>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the per-attempt timeout in milliseconds.
    pub fn timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = Some(timeout_ms);
        self
    }

    /// Sets the maximum retry count.
    pub fn max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = Some(max_retries);
        self
    }

    /// Sets the base delay between attempts in milliseconds.
    pub fn retry_delay_ms(mut self, retry_delay_ms: u64) -> Self {
        self.retry_delay_ms = Some(retry_delay_ms);
        self
    }

    /// Enables or disables exponential backoff.
    pub fn exponential_backoff(mut self, enabled: bool) -> Self {
        self.exponential_backoff = Some(enabled);
        self
    }

    /// Adds a static header sent with every request.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Sets the API key credential (sent as `X-API-Key`).
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is missing or no application was
    /// configured.
    pub fn build(self) -> Result<ClientConfig, &'static str> {
        let endpoint = self.endpoint.ok_or("endpoint is required")?;
        if self.applications.is_empty() {
            return Err("at least one application is required");
        }

        Ok(ClientConfig {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            applications: self.applications,
            profiles: self.profiles,
            label: self.label.unwrap_or_else(default_label),
            timeout_ms: self.timeout_ms.unwrap_or_else(default_timeout_ms),
            max_retries: self.max_retries.unwrap_or_else(default_max_retries),
            retry_delay_ms: self.retry_delay_ms.unwrap_or_else(default_retry_delay_ms),
            exponential_backoff: self.exponential_backoff.unwrap_or(true),
            headers: self.headers,
            api_key: self.api_key,
        })
    }
}
