//! Test utilities for toolkit module.

#[cfg(test)]
pub mod fakes {
    use std::collections::{HashMap, HashSet};
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::client::{
        ConfigurationStore, ConfiguredPluginListing, PluginDirectory, ReleaseDirectory,
        VersionDirectory,
    };
    use crate::paging::{Page, Pagination, PaginationMeta};
    use crate::types::{
        Configuration, ConfiguredPlugin, NewConfiguration, Plugin, PluginVersion, Release,
    };
    use crate::{Error, Result};

    pub const CREATED_SID: &str = "FJ00000000000000000000000000000001";
    pub const CREATED_AT: &str = "2020-01-10T20:00:00Z";

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Call {
        GetPlugin(String),
        GetVersion(String, String),
        LatestVersion(String),
        CreateConfiguration(NewConfiguration),
        ListPlugins(String, Option<String>),
        ActiveRelease,
        CreateRelease(String),
    }

    pub fn plugin(n: u32) -> Plugin {
        Plugin {
            sid: format!("FP{:032}", n),
            account_sid: format!("AC{:032}", 0),
            unique_name: format!("plugin{}", n),
            friendly_name: format!("Plugin {}", n),
            description: format!("description of plugin {}", n),
            date_created: CREATED_AT.into(),
            date_updated: CREATED_AT.into(),
        }
    }

    pub fn version(n: u32, version: &str, sid: u32) -> PluginVersion {
        PluginVersion {
            sid: format!("FV{:032}", sid),
            account_sid: format!("AC{:032}", 0),
            plugin_sid: format!("FP{:032}", n),
            version: version.into(),
            plugin_url: format!("https://assets.example.com/plugin{}/{}/bundle.js", n, version),
            private: n % 2 == 1,
            changelog: format!("changes in {}", version),
            date_created: CREATED_AT.into(),
        }
    }

    /// Entry for `pluginN` at its `N.0.0` version inside `configuration_sid`.
    pub fn configured(configuration_sid: &str, n: u32) -> ConfiguredPlugin {
        entry_for(configuration_sid, &plugin(n), &version(n, &format!("{}.0.0", n), n))
    }

    fn entry_for(
        configuration_sid: &str,
        plugin: &Plugin,
        version: &PluginVersion,
    ) -> ConfiguredPlugin {
        ConfiguredPlugin {
            plugin_sid: plugin.sid.clone(),
            plugin_version_sid: version.sid.clone(),
            configuration_sid: configuration_sid.into(),
            unique_name: plugin.unique_name.clone(),
            version: version.version.clone(),
            plugin_url: version.plugin_url.clone(),
            phase: 3,
            private: version.private,
            date_created: CREATED_AT.into(),
        }
    }

    /// In-memory stand-in for every remote collection, recording each call.
    #[derive(Default)]
    pub struct FakeBackend {
        calls: Mutex<Vec<Call>>,
        plugins: Mutex<Vec<Plugin>>,
        versions: Mutex<Vec<PluginVersion>>,
        latest: Mutex<HashMap<String, String>>,
        listings: Mutex<HashMap<String, Vec<Vec<ConfiguredPlugin>>>>,
        active_release: Mutex<Option<Release>>,
        create_error: Mutex<Option<String>>,
        missing: Mutex<HashSet<String>>,
    }

    impl FakeBackend {
        /// Catalog of plugin1..plugin3 at `N.0.0`, plus plugin1 `1.1.0`
        /// which is its latest version.
        pub fn with_catalog() -> Self {
            let backend = Self::default();
            for n in 1..=3 {
                backend.add_plugin(plugin(n));
                backend.add_version(version(n, &format!("{}.0.0", n), n));
            }
            backend.add_version(version(1, "1.1.0", 11));
            backend
                .latest
                .lock()
                .unwrap()
                .insert(plugin(1).sid, format!("FV{:032}", 11));
            backend
        }

        pub fn add_plugin(&self, plugin: Plugin) {
            self.plugins.lock().unwrap().push(plugin);
        }

        pub fn add_version(&self, version: PluginVersion) {
            let mut latest = self.latest.lock().unwrap();
            latest
                .entry(version.plugin_sid.clone())
                .or_insert_with(|| version.sid.clone());
            self.versions.lock().unwrap().push(version);
        }

        /// Pages of a configuration's plugin listing.
        pub fn set_listing(&self, configuration_sid: &str, pages: Vec<Vec<ConfiguredPlugin>>) {
            self.listings
                .lock()
                .unwrap()
                .insert(configuration_sid.into(), pages);
        }

        pub fn set_active_release(&self, configuration_sid: Option<&str>) {
            *self.active_release.lock().unwrap() = configuration_sid.map(|sid| Release {
                sid: format!("FK{:032}", 0),
                account_sid: format!("AC{:032}", 0),
                configuration_sid: sid.into(),
                date_created: CREATED_AT.into(),
            });
        }

        pub fn fail_create(&self, message: &str) {
            *self.create_error.lock().unwrap() = Some(message.into());
        }

        /// Makes lookups of `id` (plugin, version or configuration sid) fail
        /// with NotFound.
        pub fn make_missing(&self, id: &str) {
            self.missing.lock().unwrap().insert(id.into());
        }

        pub fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }

        pub fn created(&self) -> Vec<NewConfiguration> {
            self.calls()
                .into_iter()
                .filter_map(|c| match c {
                    Call::CreateConfiguration(request) => Some(request),
                    _ => None,
                })
                .collect()
        }

        fn record(&self, call: Call) {
            self.calls.lock().unwrap().push(call);
        }

        fn is_missing(&self, id: &str) -> bool {
            self.missing.lock().unwrap().contains(id)
        }

        fn find_plugin(&self, id: &str) -> Option<Plugin> {
            if self.is_missing(id) {
                return None;
            }
            self.plugins
                .lock()
                .unwrap()
                .iter()
                .find(|p| p.sid == id || p.unique_name == id)
                .cloned()
        }

        fn find_version(&self, plugin_id: &str, version_id: &str) -> Option<PluginVersion> {
            if self.is_missing(version_id) {
                return None;
            }
            let plugin = self.find_plugin(plugin_id)?;
            self.versions
                .lock()
                .unwrap()
                .iter()
                .find(|v| {
                    v.plugin_sid == plugin.sid && (v.sid == version_id || v.version == version_id)
                })
                .cloned()
        }
    }

    #[async_trait]
    impl PluginDirectory for FakeBackend {
        async fn get(&self, id: &str) -> Result<Plugin> {
            self.record(Call::GetPlugin(id.into()));
            self.find_plugin(id)
                .ok_or_else(|| Error::NotFound(format!("plugin {}", id)))
        }
    }

    #[async_trait]
    impl VersionDirectory for FakeBackend {
        async fn get(&self, plugin_id: &str, version_id: &str) -> Result<PluginVersion> {
            self.record(Call::GetVersion(plugin_id.into(), version_id.into()));
            self.find_version(plugin_id, version_id)
                .ok_or_else(|| Error::NotFound(format!("version {} of {}", version_id, plugin_id)))
        }

        async fn latest(&self, plugin_id: &str) -> Result<PluginVersion> {
            self.record(Call::LatestVersion(plugin_id.into()));
            let latest = self.find_plugin(plugin_id).and_then(|plugin| {
                let sid = self.latest.lock().unwrap().get(&plugin.sid).cloned()?;
                self.find_version(&plugin.sid, &sid)
            });
            latest.ok_or_else(|| Error::NotFound(format!("latest version of {}", plugin_id)))
        }
    }

    #[async_trait]
    impl ConfigurationStore for FakeBackend {
        async fn create(&self, request: &NewConfiguration) -> Result<Configuration> {
            self.record(Call::CreateConfiguration(request.clone()));
            if let Some(message) = self.create_error.lock().unwrap().clone() {
                return Err(Error::Validation(message));
            }

            if !self.listings.lock().unwrap().contains_key(CREATED_SID) {
                let versions = self.versions.lock().unwrap().clone();
                let plugins = self.plugins.lock().unwrap().clone();
                let entries = request
                    .plugins
                    .iter()
                    .filter_map(|entry| {
                        let version = versions.iter().find(|v| v.sid == entry.plugin_version)?;
                        let plugin = plugins.iter().find(|p| p.sid == version.plugin_sid)?;
                        Some(entry_for(CREATED_SID, plugin, version))
                    })
                    .collect();
                self.set_listing(CREATED_SID, vec![entries]);
            }

            Ok(Configuration {
                sid: CREATED_SID.into(),
                account_sid: format!("AC{:032}", 0),
                name: request.name.clone(),
                description: request.description.clone().unwrap_or_default(),
                date_created: CREATED_AT.into(),
            })
        }
    }

    #[async_trait]
    impl ConfiguredPluginListing for FakeBackend {
        async fn list(
            &self,
            configuration_sid: &str,
            pagination: Option<Pagination>,
        ) -> Result<Page<ConfiguredPlugin>> {
            let token = pagination.and_then(|p| p.page_token);
            self.record(Call::ListPlugins(configuration_sid.into(), token.clone()));

            if self.is_missing(configuration_sid) {
                return Err(Error::NotFound(format!("configuration {}", configuration_sid)));
            }
            let listings = self.listings.lock().unwrap();
            let pages = listings
                .get(configuration_sid)
                .ok_or_else(|| Error::NotFound(format!("configuration {}", configuration_sid)))?;

            let index = match token {
                None => 0,
                Some(ref token) => token
                    .rsplit('-')
                    .next()
                    .and_then(|i| i.parse::<usize>().ok())
                    .ok_or_else(|| Error::Validation(format!("bad page token {}", token)))?,
            };
            let items = pages.get(index).cloned().unwrap_or_default();
            let next_token = (index + 1 < pages.len())
                .then(|| format!("{}-page-{}", configuration_sid, index + 1));

            Ok(Page::new(
                items,
                PaginationMeta {
                    next_token,
                    previous_token: None,
                },
            ))
        }
    }

    #[async_trait]
    impl ReleaseDirectory for FakeBackend {
        async fn active(&self) -> Result<Option<Release>> {
            self.record(Call::ActiveRelease);
            Ok(self.active_release.lock().unwrap().clone())
        }

        async fn create(&self, configuration_sid: &str) -> Result<Release> {
            self.record(Call::CreateRelease(configuration_sid.into()));
            Ok(Release {
                sid: format!("FK{:032}", 1),
                account_sid: format!("AC{:032}", 0),
                configuration_sid: configuration_sid.into(),
                date_created: CREATED_AT.into(),
            })
        }
    }
}
