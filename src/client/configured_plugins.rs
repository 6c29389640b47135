//! Plugins of a configuration.

use async_trait::async_trait;

use super::PluginServiceClient;
use super::traits::ConfiguredPluginListing;
use crate::Result;
use crate::paging::{Page, Pagination};
use crate::types::ConfiguredPlugin;

const CONFIGURATIONS: &str = "Configurations";
const PLUGINS: &str = "Plugins";

#[derive(Debug, Clone)]
pub struct ConfiguredPluginsClient {
    client: PluginServiceClient,
}

impl ConfiguredPluginsClient {
    pub fn new(client: PluginServiceClient) -> Self {
        Self { client }
    }

    pub async fn list(
        &self,
        configuration_sid: &str,
        pagination: Option<Pagination>,
    ) -> Result<Page<ConfiguredPlugin>> {
        self.client
            .list(
                &[CONFIGURATIONS, configuration_sid, PLUGINS],
                "plugins",
                pagination.as_ref(),
            )
            .await
    }

    pub async fn get(&self, configuration_sid: &str, plugin_id: &str) -> Result<ConfiguredPlugin> {
        let url = self
            .client
            .endpoint(&[CONFIGURATIONS, configuration_sid, PLUGINS, plugin_id])?;
        self.client.get(url.as_str()).await
    }
}

#[async_trait]
impl ConfiguredPluginListing for ConfiguredPluginsClient {
    async fn list(
        &self,
        configuration_sid: &str,
        pagination: Option<Pagination>,
    ) -> Result<Page<ConfiguredPlugin>> {
        ConfiguredPluginsClient::list(self, configuration_sid, pagination).await
    }
}
