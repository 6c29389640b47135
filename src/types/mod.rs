//! Resource types of the Plugins API.

mod configuration;
mod plugin;
mod release;

pub use configuration::{
    ACTIVE_PHASE, Configuration, ConfiguredPlugin, NewConfiguration, PluginEntry,
};
pub use plugin::{Plugin, PluginVersion};
pub use release::Release;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

/// Decodes a string field the API may send as `null` into an empty string.
pub(crate) fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Parses an RFC 3339 timestamp as returned by the API. Empty or malformed
/// values yield `None`.
pub(crate) fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    if value.is_empty() {
        return None;
    }
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}
