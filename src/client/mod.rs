//! HTTP client for the Flex Plugins API.

pub mod config;
pub mod configurations;
pub mod configured_plugins;
pub mod error;
pub mod plugins;
pub mod releases;
pub mod traits;
pub mod versions;

pub use config::{ClientConfig, DEFAULT_TIMEOUT, Realm};
pub use configurations::ConfigurationsClient;
pub use configured_plugins::ConfiguredPluginsClient;
pub use error::ErrorResponse;
pub use plugins::PluginsClient;
pub use releases::ReleasesClient;
pub use traits::{
    ConfigurationStore, ConfiguredPluginListing, PluginDirectory, ReleaseDirectory,
    VersionDirectory,
};
pub use versions::VersionsClient;

use std::sync::Arc;

use reqwest::header::{CONTENT_TYPE, USER_AGENT};
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use url::{Url, form_urlencoded};

use crate::paging::{Page, Pagination, RawPageMeta, list_url};
use crate::{Error, Result};

const CLIENT_USER_AGENT: &str = concat!("flex-plugins-api-rs/", env!("CARGO_PKG_VERSION"));

/// Authenticated client for the Plugins API.
///
/// Cheap to clone; the resource clients returned by [`plugins`](Self::plugins),
/// [`versions`](Self::versions) and friends each hold their own clone.
#[derive(Clone)]
pub struct PluginServiceClient {
    inner: Arc<Inner>,
}

struct Inner {
    config: ClientConfig,
    base_url: Url,
    http: reqwest::Client,
}

impl PluginServiceClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(Error::Network)?;
        Self::with_http(config, http)
    }

    pub fn with_http(config: ClientConfig, http: reqwest::Client) -> Result<Self> {
        config.validate()?;
        let base_url = Url::parse(&config.effective_base_url())?;
        if base_url.cannot_be_a_base() {
            return Err(Error::Config(format!("invalid base URL: {}", base_url)));
        }

        Ok(Self {
            inner: Arc::new(Inner {
                config,
                base_url,
                http,
            }),
        })
    }

    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    pub fn plugins(&self) -> PluginsClient {
        PluginsClient::new(self.clone())
    }

    pub fn versions(&self) -> VersionsClient {
        VersionsClient::new(self.clone())
    }

    pub fn configurations(&self) -> ConfigurationsClient {
        ConfigurationsClient::new(self.clone())
    }

    pub fn configured_plugins(&self) -> ConfiguredPluginsClient {
        ConfiguredPluginsClient::new(self.clone())
    }

    pub fn releases(&self) -> ReleasesClient {
        ReleasesClient::new(self.clone())
    }

    /// Resolves path segments against the base URL, percent-encoding each one.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.inner.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::Config(format!("invalid base URL: {}", self.inner.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: reqwest::Method, url: &str) -> reqwest::RequestBuilder {
        let config = &self.inner.config;
        self.inner
            .http
            .request(method, url)
            .basic_auth(&config.account_sid, Some(config.auth_token.expose_secret()))
            .header(USER_AGENT, CLIENT_USER_AGENT)
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        tracing::debug!(%url, "GET");
        let response = self
            .request(reqwest::Method::GET, url)
            .send()
            .await
            .map_err(Error::Network)?;
        handle_response(response).await
    }

    pub(crate) async fn post_form<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, String)],
    ) -> Result<T> {
        let body: String = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(params.iter().map(|(k, v)| (*k, v.as_str())))
            .finish();

        tracing::debug!(%url, "POST");
        let response = self
            .request(reqwest::Method::POST, url)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await
            .map_err(Error::Network)?;
        handle_response(response).await
    }

    /// Fetches one page of a listing whose items live under `key`.
    pub(crate) async fn list<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        key: &str,
        pagination: Option<&Pagination>,
    ) -> Result<Page<T>> {
        let endpoint = self.endpoint(segments)?;
        let url = list_url(endpoint.as_str(), pagination);
        let mut body: serde_json::Value = self.get(&url).await?;

        let items = match body.get_mut(key) {
            Some(value) => serde_json::from_value(value.take())?,
            None => return Err(Error::Parse(format!("list response has no '{}' field", key))),
        };
        let meta: RawPageMeta = match body.get_mut("meta") {
            Some(value) if !value.is_null() => serde_json::from_value(value.take())?,
            _ => RawPageMeta::default(),
        };

        Ok(Page::new(items, meta.into()))
    }
}

async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();
    let body = response.text().await.map_err(Error::Network)?;

    if !status.is_success() {
        tracing::debug!(status = status.as_u16(), "Request rejected");
        return Err(ErrorResponse::from_body(&body).into_error(status.as_u16()));
    }

    Ok(serde_json::from_str(&body)?)
}

impl std::fmt::Debug for PluginServiceClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginServiceClient")
            .field("account_sid", &self.inner.config.account_sid)
            .field("base_url", &self.inner.base_url.as_str())
            .finish()
    }
}
