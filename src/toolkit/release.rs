use serde::Serialize;

use super::Toolkit;
use crate::Result;

/// Outcome of [`Toolkit::release`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseSummary {
    pub release_sid: String,
    pub configuration_sid: String,
    /// Configuration sid the release was requested for.
    pub version: String,
    pub date_created: String,
}

impl Toolkit {
    /// Activates the configuration `version` by creating a release for it.
    pub async fn release(&self, version: &str) -> Result<ReleaseSummary> {
        let release = self.releases.create(version).await?;

        Ok(ReleaseSummary {
            release_sid: release.sid,
            configuration_sid: release.configuration_sid,
            version: version.to_string(),
            date_created: release.date_created,
        })
    }
}
