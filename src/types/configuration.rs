//! Configuration resources and the create request payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{null_as_empty, parse_timestamp};

/// Phase written for every plugin this crate adds to a configuration.
pub const ACTIVE_PHASE: u32 = 3;

/// An immutable, named bundle of plugin versions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    pub sid: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub account_sid: String,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub date_created: String,
}

impl Configuration {
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.date_created)
    }
}

/// A plugin version as a member of exactly one [`Configuration`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfiguredPlugin {
    pub plugin_sid: String,
    pub plugin_version_sid: String,
    pub configuration_sid: String,
    pub unique_name: String,
    pub version: String,
    pub plugin_url: String,
    pub phase: u32,
    #[serde(default)]
    pub private: bool,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub date_created: String,
}

/// One member of a configuration create request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginEntry {
    pub plugin_version: String,
    pub phase: u32,
}

impl PluginEntry {
    pub fn active(plugin_version: impl Into<String>) -> Self {
        Self {
            plugin_version: plugin_version.into(),
            phase: ACTIVE_PHASE,
        }
    }
}

/// Payload of a configuration create call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewConfiguration {
    pub name: String,
    pub description: Option<String>,
    pub plugins: Vec<PluginEntry>,
}

impl NewConfiguration {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            plugins: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_plugins(mut self, plugins: Vec<PluginEntry>) -> Self {
        self.plugins = plugins;
        self
    }

    pub fn with_plugin(mut self, plugin: PluginEntry) -> Self {
        self.plugins.push(plugin);
        self
    }
}
