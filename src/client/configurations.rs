//! Configurations collection.

use async_trait::async_trait;

use super::PluginServiceClient;
use super::traits::ConfigurationStore;
use crate::Result;
use crate::paging::{Page, Pagination};
use crate::types::{Configuration, NewConfiguration};

const CONFIGURATIONS: &str = "Configurations";

#[derive(Debug, Clone)]
pub struct ConfigurationsClient {
    client: PluginServiceClient,
}

impl ConfigurationsClient {
    pub fn new(client: PluginServiceClient) -> Self {
        Self { client }
    }

    pub async fn create(&self, request: &NewConfiguration) -> Result<Configuration> {
        let url = self.client.endpoint(&[CONFIGURATIONS])?;
        let params = form_params(request)?;
        let configuration: Configuration = self.client.post_form(url.as_str(), &params).await?;

        tracing::info!(
            sid = %configuration.sid,
            name = %configuration.name,
            plugins = request.plugins.len(),
            "Configuration created"
        );
        Ok(configuration)
    }

    pub async fn get(&self, sid: &str) -> Result<Configuration> {
        let url = self.client.endpoint(&[CONFIGURATIONS, sid])?;
        self.client.get(url.as_str()).await
    }

    pub async fn list(&self, pagination: Option<Pagination>) -> Result<Page<Configuration>> {
        self.client
            .list(&[CONFIGURATIONS], "configurations", pagination.as_ref())
            .await
    }
}

/// Form body of a create call: `Name`, optional `Description`, and one
/// `Plugins` parameter per entry holding the entry as a JSON object.
fn form_params(request: &NewConfiguration) -> Result<Vec<(&'static str, String)>> {
    let mut params = vec![("Name", request.name.clone())];
    if let Some(ref description) = request.description {
        params.push(("Description", description.clone()));
    }
    for entry in &request.plugins {
        params.push(("Plugins", serde_json::to_string(entry)?));
    }
    Ok(params)
}

#[async_trait]
impl ConfigurationStore for ConfigurationsClient {
    async fn create(&self, request: &NewConfiguration) -> Result<Configuration> {
        ConfigurationsClient::create(self, request).await
    }
}
