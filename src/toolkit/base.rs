//! Selection and loading of the base configuration.

use std::fmt;

use crate::Result;
use crate::client::{ConfiguredPluginListing, ReleaseDirectory};
use crate::paging::{self, Pagination};
use crate::types::ConfiguredPlugin;

const ACTIVE: &str = "active";

/// Configuration a new configuration is derived from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum BaseConfiguration {
    /// Start from an empty plugin set.
    #[default]
    None,
    /// Start from the configuration of the active release, if any.
    Active,
    /// Start from the configuration with this sid.
    Explicit(String),
}

impl BaseConfiguration {
    /// `"active"` selects the active release; anything else is a sid.
    pub fn parse(value: &str) -> Self {
        if value == ACTIVE {
            BaseConfiguration::Active
        } else {
            BaseConfiguration::Explicit(value.to_string())
        }
    }
}

impl From<Option<&str>> for BaseConfiguration {
    fn from(value: Option<&str>) -> Self {
        value.map(Self::parse).unwrap_or_default()
    }
}

impl From<&str> for BaseConfiguration {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl fmt::Display for BaseConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BaseConfiguration::None => f.write_str("none"),
            BaseConfiguration::Active => f.write_str(ACTIVE),
            BaseConfiguration::Explicit(sid) => f.write_str(sid),
        }
    }
}

/// Base configuration sid and its plugins in listing order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadedBase {
    pub sid: Option<String>,
    pub entries: Vec<ConfiguredPlugin>,
}

impl LoadedBase {
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Lists every plugin of a configuration, following page tokens to the end.
pub async fn list_configured_plugins(
    listing: &dyn ConfiguredPluginListing,
    configuration_sid: &str,
) -> Result<Vec<ConfiguredPlugin>> {
    paging::drain(move |token: Option<String>| {
        listing.list(configuration_sid, token.map(Pagination::after))
    })
    .await
}

pub async fn load_base(
    releases: &dyn ReleaseDirectory,
    listing: &dyn ConfiguredPluginListing,
    base: &BaseConfiguration,
) -> Result<LoadedBase> {
    let sid = match base {
        BaseConfiguration::None => return Ok(LoadedBase::empty()),
        BaseConfiguration::Explicit(sid) => sid.clone(),
        BaseConfiguration::Active => match releases.active().await? {
            Some(release) => release.configuration_sid,
            None => {
                tracing::warn!("No active release found, starting from an empty configuration");
                return Ok(LoadedBase::empty());
            }
        },
    };

    let entries = list_configured_plugins(listing, &sid).await?;
    tracing::debug!(base = %sid, plugins = entries.len(), "Loaded base configuration");

    Ok(LoadedBase {
        sid: Some(sid),
        entries,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toolkit::testing::fakes::{Call, FakeBackend, configured};

    #[test]
    fn test_parse_base() {
        assert_eq!(BaseConfiguration::parse("active"), BaseConfiguration::Active);
        assert_eq!(
            BaseConfiguration::parse("FJ123"),
            BaseConfiguration::Explicit("FJ123".into())
        );
        assert_eq!(BaseConfiguration::from(None), BaseConfiguration::None);
        assert_eq!(BaseConfiguration::from("active"), BaseConfiguration::Active);
    }

    #[tokio::test]
    async fn test_none_makes_no_calls() {
        let backend = FakeBackend::with_catalog();
        let loaded = load_base(&backend, &backend, &BaseConfiguration::None)
            .await
            .unwrap();

        assert_eq!(loaded, LoadedBase::empty());
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_explicit_lists_configuration() {
        let backend = FakeBackend::with_catalog();
        backend.set_listing("FJ2", vec![vec![configured("FJ2", 2)]]);

        let loaded = load_base(&backend, &backend, &BaseConfiguration::Explicit("FJ2".into()))
            .await
            .unwrap();

        assert_eq!(loaded.sid.as_deref(), Some("FJ2"));
        assert_eq!(loaded.entries.len(), 1);
        assert_eq!(backend.calls(), vec![Call::ListPlugins("FJ2".into(), None)]);
    }

    #[tokio::test]
    async fn test_active_uses_release_configuration() {
        let backend = FakeBackend::with_catalog();
        backend.set_active_release(Some("FJ2"));
        backend.set_listing("FJ2", vec![vec![configured("FJ2", 2)]]);

        let loaded = load_base(&backend, &backend, &BaseConfiguration::Active)
            .await
            .unwrap();

        assert_eq!(loaded.sid.as_deref(), Some("FJ2"));
        assert_eq!(
            backend.calls(),
            vec![Call::ActiveRelease, Call::ListPlugins("FJ2".into(), None)]
        );
    }

    #[tokio::test]
    async fn test_active_without_release_is_empty() {
        let backend = FakeBackend::with_catalog();

        let loaded = load_base(&backend, &backend, &BaseConfiguration::Active)
            .await
            .unwrap();

        assert_eq!(loaded, LoadedBase::empty());
        assert_eq!(backend.calls(), vec![Call::ActiveRelease]);
    }

    #[tokio::test]
    async fn test_listing_keeps_page_order() {
        let backend = FakeBackend::with_catalog();
        backend.set_listing(
            "FJ9",
            vec![
                vec![configured("FJ9", 2), configured("FJ9", 1)],
                vec![configured("FJ9", 3)],
            ],
        );

        let entries = list_configured_plugins(&backend, "FJ9").await.unwrap();

        let names: Vec<_> = entries.iter().map(|e| e.unique_name.as_str()).collect();
        assert_eq!(names, vec!["plugin2", "plugin1", "plugin3"]);
        assert_eq!(
            backend.calls(),
            vec![
                Call::ListPlugins("FJ9".into(), None),
                Call::ListPlugins("FJ9".into(), Some("FJ9-page-1".into())),
            ]
        );
    }
}
