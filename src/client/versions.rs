//! Plugin versions collection.

use async_trait::async_trait;

use super::PluginServiceClient;
use super::traits::VersionDirectory;
use crate::paging::{Page, Pagination};
use crate::types::PluginVersion;
use crate::{Error, Result};

const PLUGINS: &str = "Plugins";
const VERSIONS: &str = "Versions";

#[derive(Debug, Clone)]
pub struct VersionsClient {
    client: PluginServiceClient,
}

impl VersionsClient {
    pub fn new(client: PluginServiceClient) -> Self {
        Self { client }
    }

    /// `version_id` is either a version sid or a version string such as `1.0.0`.
    pub async fn get(&self, plugin_id: &str, version_id: &str) -> Result<PluginVersion> {
        let url = self
            .client
            .endpoint(&[PLUGINS, plugin_id, VERSIONS, version_id])?;
        self.client.get(url.as_str()).await
    }

    /// Versions are listed newest first, so the latest is the head of a
    /// single-item page.
    pub async fn latest(&self, plugin_id: &str) -> Result<PluginVersion> {
        let page = self
            .list(plugin_id, Some(Pagination::new().page_size(1)))
            .await?;
        page.items.into_iter().next().ok_or_else(|| {
            Error::NotFound(format!("plugin {} has no published versions", plugin_id))
        })
    }

    pub async fn list(
        &self,
        plugin_id: &str,
        pagination: Option<Pagination>,
    ) -> Result<Page<PluginVersion>> {
        self.client
            .list(
                &[PLUGINS, plugin_id, VERSIONS],
                "plugin_versions",
                pagination.as_ref(),
            )
            .await
    }
}

#[async_trait]
impl VersionDirectory for VersionsClient {
    async fn get(&self, plugin_id: &str, version_id: &str) -> Result<PluginVersion> {
        VersionsClient::get(self, plugin_id, version_id).await
    }

    async fn latest(&self, plugin_id: &str) -> Result<PluginVersion> {
        VersionsClient::latest(self, plugin_id).await
    }
}
