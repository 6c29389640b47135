//! Plugins collection.

use async_trait::async_trait;

use super::PluginServiceClient;
use super::traits::PluginDirectory;
use crate::Result;
use crate::paging::{Page, Pagination};
use crate::types::Plugin;

const PLUGINS: &str = "Plugins";

#[derive(Debug, Clone)]
pub struct PluginsClient {
    client: PluginServiceClient,
}

impl PluginsClient {
    pub fn new(client: PluginServiceClient) -> Self {
        Self { client }
    }

    pub async fn get(&self, id: &str) -> Result<Plugin> {
        let url = self.client.endpoint(&[PLUGINS, id])?;
        self.client.get(url.as_str()).await
    }

    pub async fn list(&self, pagination: Option<Pagination>) -> Result<Page<Plugin>> {
        self.client
            .list(&[PLUGINS], "plugins", pagination.as_ref())
            .await
    }
}

#[async_trait]
impl PluginDirectory for PluginsClient {
    async fn get(&self, id: &str) -> Result<Plugin> {
        PluginsClient::get(self, id).await
    }
}
