//! Stratus Client - HTTP client for Spring Cloud Config compatible servers
//!
//! Fetches named, profiled, labeled property sets over HTTP, merges them
//! by priority and exposes a typed accessor over the merged result.
//!
//! ```no_run
//! use stratus_client::{ClientConfig, ConfigClient};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ClientConfig::builder()
//!     .endpoint("http://localhost:8888")
//!     .application("myapp")
//!     .build()?;
//!
//! let merged = ConfigClient::new(config)?.load().await?;
//! assert!(merged.has("server.port"));
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod format;
pub mod transport;

pub use client::ConfigClient;
pub use config::{ClientConfig, ClientConfigBuilder};
pub use error::ClientError;
pub use format::TextFormat;
pub use transport::{HttpTransport, Transport};

// Re-export the core types callers interact with
pub use stratus_core::{ConfigMap, ConfigValue, MergedConfig, PropertySource};
