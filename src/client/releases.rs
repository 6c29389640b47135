//! Releases collection.

use async_trait::async_trait;

use super::PluginServiceClient;
use super::traits::ReleaseDirectory;
use crate::paging::{Page, Pagination};
use crate::types::Release;
use crate::{Error, Result};

const RELEASES: &str = "Releases";
const ACTIVE: &str = "Active";

#[derive(Debug, Clone)]
pub struct ReleasesClient {
    client: PluginServiceClient,
}

impl ReleasesClient {
    pub fn new(client: PluginServiceClient) -> Self {
        Self { client }
    }

    /// The API answers 404 when no release was ever created.
    pub async fn active(&self) -> Result<Option<Release>> {
        let url = self.client.endpoint(&[RELEASES, ACTIVE])?;
        match self.client.get(url.as_str()).await {
            Ok(release) => Ok(Some(release)),
            Err(Error::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub async fn create(&self, configuration_sid: &str) -> Result<Release> {
        let url = self.client.endpoint(&[RELEASES])?;
        let params = [("ConfigurationId", configuration_sid.to_string())];
        let release: Release = self.client.post_form(url.as_str(), &params).await?;

        tracing::info!(
            sid = %release.sid,
            configuration_sid = %release.configuration_sid,
            "Release created"
        );
        Ok(release)
    }

    pub async fn get(&self, sid: &str) -> Result<Release> {
        let url = self.client.endpoint(&[RELEASES, sid])?;
        self.client.get(url.as_str()).await
    }

    pub async fn list(&self, pagination: Option<Pagination>) -> Result<Page<Release>> {
        self.client
            .list(&[RELEASES], "releases", pagination.as_ref())
            .await
    }
}

#[async_trait]
impl ReleaseDirectory for ReleasesClient {
    async fn active(&self) -> Result<Option<Release>> {
        ReleasesClient::active(self).await
    }

    async fn create(&self, configuration_sid: &str) -> Result<Release> {
        ReleasesClient::create(self, configuration_sid).await
    }
}
