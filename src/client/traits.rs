//! Remote collections the toolkit depends on.
//!
//! [`PluginServiceClient`](super::PluginServiceClient) implements every trait
//! here over HTTP; tests substitute in-memory fakes.

use async_trait::async_trait;

use crate::Result;
use crate::paging::{Page, Pagination};
use crate::types::{
    Configuration, ConfiguredPlugin, NewConfiguration, Plugin, PluginVersion, Release,
};

#[async_trait]
pub trait PluginDirectory: Send + Sync {
    /// Fetches a plugin by sid or unique name. Fails with
    /// [`Error::NotFound`](crate::Error::NotFound) when absent.
    async fn get(&self, id: &str) -> Result<Plugin>;
}

#[async_trait]
pub trait VersionDirectory: Send + Sync {
    /// Fetches a version of `plugin_id` by version sid or version string.
    async fn get(&self, plugin_id: &str, version_id: &str) -> Result<PluginVersion>;

    /// Fetches the most recently published version of `plugin_id`.
    async fn latest(&self, plugin_id: &str) -> Result<PluginVersion>;
}

#[async_trait]
pub trait ConfigurationStore: Send + Sync {
    async fn create(&self, request: &NewConfiguration) -> Result<Configuration>;
}

#[async_trait]
pub trait ConfiguredPluginListing: Send + Sync {
    async fn list(
        &self,
        configuration_sid: &str,
        pagination: Option<Pagination>,
    ) -> Result<Page<ConfiguredPlugin>>;
}

#[async_trait]
pub trait ReleaseDirectory: Send + Sync {
    /// The currently active release, or `None` when nothing was ever released.
    async fn active(&self) -> Result<Option<Release>>;

    /// Activates `configuration_sid`.
    async fn create(&self, configuration_sid: &str) -> Result<Release>;
}
