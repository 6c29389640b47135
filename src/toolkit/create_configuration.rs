//! Composition of a new configuration from a base and a set of additions.

use serde::Serialize;

use super::Toolkit;
use super::base::{BaseConfiguration, list_configured_plugins};
use super::reference::{ResolvedPlugin, resolve_all};
use crate::Result;
use crate::types::{ConfiguredPlugin, NewConfiguration, PluginEntry};

/// Options for [`Toolkit::create_configuration`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateConfigurationOption {
    pub name: String,
    pub description: Option<String>,
    /// `name@version` or `name@latest` references.
    pub add_plugins: Vec<String>,
    pub from_configuration: BaseConfiguration,
}

impl CreateConfigurationOption {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn add_plugin(mut self, reference: impl Into<String>) -> Self {
        self.add_plugins.push(reference.into());
        self
    }

    pub fn add_plugins<I, S>(mut self, references: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_plugins
            .extend(references.into_iter().map(Into::into));
        self
    }

    pub fn from_configuration(mut self, base: impl Into<BaseConfiguration>) -> Self {
        self.from_configuration = base.into();
        self
    }
}

/// One plugin of a merged configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedPlugin {
    pub unique_name: String,
    pub plugin_version_sid: String,
}

impl From<&ResolvedPlugin> for MergedPlugin {
    fn from(resolved: &ResolvedPlugin) -> Self {
        Self {
            unique_name: resolved.plugin.unique_name.clone(),
            plugin_version_sid: resolved.version.sid.clone(),
        }
    }
}

impl From<&ConfiguredPlugin> for MergedPlugin {
    fn from(entry: &ConfiguredPlugin) -> Self {
        Self {
            unique_name: entry.unique_name.clone(),
            plugin_version_sid: entry.plugin_version_sid.clone(),
        }
    }
}

/// Additions in request order, then base entries whose unique name is not
/// among the additions, in base order.
///
/// A name added twice keeps the position of its first occurrence and the
/// version of its last. A name listed twice in the base keeps its first entry.
pub fn merge_plugins(additions: &[ResolvedPlugin], base: &[ConfiguredPlugin]) -> Vec<MergedPlugin> {
    let mut merged: Vec<MergedPlugin> = Vec::with_capacity(additions.len() + base.len());

    for addition in additions.iter().map(MergedPlugin::from) {
        match merged
            .iter_mut()
            .find(|m| m.unique_name == addition.unique_name)
        {
            Some(existing) => *existing = addition,
            None => merged.push(addition),
        }
    }

    for entry in base {
        if !merged.iter().any(|m| m.unique_name == entry.unique_name) {
            merged.push(MergedPlugin::from(entry));
        }
    }
    merged
}

/// A plugin of a freshly created configuration, with catalog metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstalledPlugin {
    pub plugin_sid: String,
    pub plugin_version_sid: String,
    pub name: String,
    pub version: String,
    pub url: String,
    pub phase: u32,
    pub friendly_name: String,
    pub description: String,
    pub changelog: String,
    pub is_private: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedConfiguration {
    pub sid: String,
    pub name: String,
    pub description: String,
    pub date_created: String,
    pub plugins: Vec<InstalledPlugin>,
}

impl Toolkit {
    /// Creates a configuration holding the base's plugins with `add_plugins`
    /// replacing same-named entries, then reads it back.
    ///
    /// Every call is awaited in order. A failure after the configuration was
    /// created is returned as is; the configuration stays in place.
    pub async fn create_configuration(
        &self,
        option: CreateConfigurationOption,
    ) -> Result<CreatedConfiguration> {
        let additions = resolve_all(
            &*self.plugins,
            &*self.versions,
            option.add_plugins.as_slice(),
        )
        .await?;
        let base = self.load_base(&option.from_configuration).await?;

        let merged = merge_plugins(&additions, &base.entries);
        tracing::debug!(
            base = ?base.sid,
            additions = additions.len(),
            plugins = merged.len(),
            "Merged plugin set"
        );

        let mut request = NewConfiguration::new(&option.name).with_plugins(
            merged
                .iter()
                .map(|m| PluginEntry::active(&m.plugin_version_sid))
                .collect(),
        );
        if let Some(description) = option.description {
            request = request.with_description(description);
        }
        let configuration = self.configurations.create(&request).await?;

        let entries = list_configured_plugins(&*self.listing, &configuration.sid).await?;
        let mut plugins = Vec::with_capacity(entries.len());
        for entry in entries {
            plugins.push(self.install(entry).await?);
        }

        Ok(CreatedConfiguration {
            sid: configuration.sid,
            name: configuration.name,
            description: configuration.description,
            date_created: configuration.date_created,
            plugins,
        })
    }

    async fn install(&self, entry: ConfiguredPlugin) -> Result<InstalledPlugin> {
        let plugin = self.plugins.get(&entry.plugin_sid).await?;
        let version = self
            .versions
            .get(&entry.plugin_sid, &entry.plugin_version_sid)
            .await?;

        Ok(InstalledPlugin {
            plugin_sid: entry.plugin_sid,
            plugin_version_sid: entry.plugin_version_sid,
            name: entry.unique_name,
            version: entry.version,
            url: entry.plugin_url,
            phase: entry.phase,
            friendly_name: plugin.friendly_name,
            description: plugin.description,
            changelog: version.changelog,
            is_private: entry.private,
        })
    }
}
