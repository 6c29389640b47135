//! # flex-plugins-api
//!
//! Rust toolkit for the Flex Plugins API: resolve plugin references, compose
//! new plugin configurations from an existing one, and release them.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use flex_plugins_api::{
//!     BaseConfiguration, CreateConfigurationOption, PluginServiceClient, Toolkit,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), flex_plugins_api::Error> {
//!     let client = PluginServiceClient::from_env()?;
//!     let toolkit = Toolkit::from_client(&client);
//!
//!     let option = CreateConfigurationOption::new("Weekly rollout")
//!         .add_plugin("plugin-sample@latest")
//!         .from_configuration(BaseConfiguration::Active);
//!     let created = toolkit.create_configuration(option).await?;
//!
//!     for plugin in &created.plugins {
//!         println!("{}@{} -> {}", plugin.name, plugin.version, plugin.url);
//!     }
//!     toolkit.release(&created.sid).await?;
//!     Ok(())
//! }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod client;
pub mod paging;
pub mod toolkit;
pub mod types;

pub use client::{
    ClientConfig, ConfigurationStore, ConfigurationsClient, ConfiguredPluginListing,
    ConfiguredPluginsClient, PluginDirectory, PluginServiceClient, PluginsClient, Realm,
    ReleaseDirectory, ReleasesClient, VersionDirectory, VersionsClient,
};
pub use paging::{Page, Pagination, PaginationMeta};
pub use toolkit::{
    BaseConfiguration, CreateConfigurationOption, CreatedConfiguration, InstalledPlugin,
    LoadedBase, PluginReference, ReleaseSummary, ResolvedPlugin, Toolkit, VersionSpec,
};
pub use types::{
    ACTIVE_PHASE, Configuration, ConfiguredPlugin, NewConfiguration, Plugin, PluginEntry,
    PluginVersion, Release,
};

/// Error type for flex-plugins-api operations.
///
/// Errors reported by the API are passed through unchanged; nothing in this
/// crate retries or recovers from them.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Plugin reference is not of the form `name@version`.
    #[error("Plugin argument '{reference}' must be of the format pluginName@version")]
    Format { reference: String },

    /// Requested resource does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// API rejected the request payload.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// API returned an error response.
    #[error("API error (HTTP {status}): {message}", status = status.map(|s| s.to_string()).unwrap_or_else(|| "unknown".into()))]
    Api {
        message: String,
        status: Option<u16>,
        code: Option<u32>,
    },

    /// Network connectivity or request failed.
    #[error("Network request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// JSON serialization or deserialization failed.
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Response did not have the expected shape.
    #[error("Parse error: {0}")]
    Parse(String),

    /// URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Invalid or missing configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Error category for unified error handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Caller supplied malformed input (references, configuration)
    Input,
    /// Plugin, version, configuration or release does not exist
    Missing,
    /// API rejected the request
    Remote,
    /// Network failure before a response was received
    Transport,
    /// Unexpected response shapes and encoding failures
    Internal,
}

impl Error {
    pub fn format(reference: impl Into<String>) -> Self {
        Error::Format {
            reference: reference.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::Format { .. } | Error::Config(_) | Error::Url(_) => ErrorCategory::Input,
            Error::NotFound(_) => ErrorCategory::Missing,
            Error::Validation(_) | Error::Api { .. } => ErrorCategory::Remote,
            Error::Network(_) => ErrorCategory::Transport,
            Error::Json(_) | Error::Parse(_) => ErrorCategory::Internal,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.category() == ErrorCategory::Missing
    }

    pub fn is_input_error(&self) -> bool {
        self.category() == ErrorCategory::Input
    }

    pub fn is_remote_error(&self) -> bool {
        self.category() == ErrorCategory::Remote
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::NotFound(_) => Some(404),
            Error::Validation(_) => Some(400),
            Error::Api { status, .. } => *status,
            Error::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
