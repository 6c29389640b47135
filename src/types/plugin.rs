//! Plugin and plugin version resources.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{null_as_empty, parse_timestamp};

/// A published plugin. Created by the publishing flow and read-only here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plugin {
    pub sid: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub account_sid: String,
    pub unique_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub friendly_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub date_created: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub date_updated: String,
}

impl Plugin {
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.date_created)
    }
}

/// An immutable version of a [`Plugin`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginVersion {
    pub sid: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub account_sid: String,
    pub plugin_sid: String,
    pub version: String,
    pub plugin_url: String,
    #[serde(default)]
    pub private: bool,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub changelog: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub date_created: String,
}

impl PluginVersion {
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.date_created)
    }
}
