//! Scripts built on the Plugins API: plugin reference resolution, base
//! configuration loading, configuration composition and release.
//!
//! [`Toolkit`] holds one handle per remote collection. Build it from a
//! [`PluginServiceClient`] for real use, or from any type implementing the
//! collaborator traits.

pub mod base;
pub mod create_configuration;
pub mod reference;
pub mod release;
pub(crate) mod testing;

pub use base::{BaseConfiguration, LoadedBase, list_configured_plugins, load_base};
pub use create_configuration::{
    CreateConfigurationOption, CreatedConfiguration, InstalledPlugin, MergedPlugin, merge_plugins,
};
pub use reference::{PluginReference, ResolvedPlugin, VersionSpec, resolve, resolve_all};
pub use release::ReleaseSummary;

use std::sync::Arc;

use crate::Result;
use crate::client::{
    ConfigurationStore, ConfiguredPluginListing, PluginDirectory, PluginServiceClient,
    ReleaseDirectory, VersionDirectory,
};

#[derive(Clone)]
pub struct Toolkit {
    plugins: Arc<dyn PluginDirectory>,
    versions: Arc<dyn VersionDirectory>,
    configurations: Arc<dyn ConfigurationStore>,
    listing: Arc<dyn ConfiguredPluginListing>,
    releases: Arc<dyn ReleaseDirectory>,
}

impl Toolkit {
    pub fn new(
        plugins: Arc<dyn PluginDirectory>,
        versions: Arc<dyn VersionDirectory>,
        configurations: Arc<dyn ConfigurationStore>,
        listing: Arc<dyn ConfiguredPluginListing>,
        releases: Arc<dyn ReleaseDirectory>,
    ) -> Self {
        Self {
            plugins,
            versions,
            configurations,
            listing,
            releases,
        }
    }

    pub fn from_client(client: &PluginServiceClient) -> Self {
        Self::new(
            Arc::new(client.plugins()),
            Arc::new(client.versions()),
            Arc::new(client.configurations()),
            Arc::new(client.configured_plugins()),
            Arc::new(client.releases()),
        )
    }

    /// Uses one value for every collection.
    pub fn from_backend<B>(backend: Arc<B>) -> Self
    where
        B: PluginDirectory
            + VersionDirectory
            + ConfigurationStore
            + ConfiguredPluginListing
            + ReleaseDirectory
            + 'static,
    {
        Self::new(
            backend.clone(),
            backend.clone(),
            backend.clone(),
            backend.clone(),
            backend,
        )
    }

    /// Parses every reference, then resolves them one after another.
    pub async fn resolve_references<S: AsRef<str>>(
        &self,
        references: &[S],
    ) -> Result<Vec<ResolvedPlugin>> {
        resolve_all(&*self.plugins, &*self.versions, references).await
    }

    pub async fn load_base(&self, base: &BaseConfiguration) -> Result<LoadedBase> {
        load_base(&*self.releases, &*self.listing, base).await
    }
}

impl std::fmt::Debug for Toolkit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Toolkit").finish_non_exhaustive()
    }
}
