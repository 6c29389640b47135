//! `name@version` plugin references and their resolution.

use std::fmt;
use std::str::FromStr;

use crate::client::{PluginDirectory, VersionDirectory};
use crate::types::{Plugin, PluginVersion};
use crate::{Error, Result};

const SEPARATOR: char = '@';
const LATEST: &str = "latest";

/// Version half of a plugin reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum VersionSpec {
    /// Most recently published version.
    Latest,
    /// Version string such as `1.0.0`, or a version sid.
    Exact(String),
}

impl fmt::Display for VersionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionSpec::Latest => f.write_str(LATEST),
            VersionSpec::Exact(version) => f.write_str(version),
        }
    }
}

/// A parsed `name@version` or `name@latest` reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PluginReference {
    pub name: String,
    pub version: VersionSpec,
}

impl PluginReference {
    /// Parses a reference. The version is everything after the first `@`.
    pub fn parse(reference: &str) -> Result<Self> {
        let (name, version) = reference
            .split_once(SEPARATOR)
            .ok_or_else(|| Error::format(reference))?;
        if name.is_empty() || version.is_empty() {
            return Err(Error::format(reference));
        }

        let version = if version == LATEST {
            VersionSpec::Latest
        } else {
            VersionSpec::Exact(version.to_string())
        };
        Ok(Self {
            name: name.to_string(),
            version,
        })
    }

    /// Parses a whole batch, failing on the first malformed reference.
    pub fn parse_all<S: AsRef<str>>(references: &[S]) -> Result<Vec<Self>> {
        references.iter().map(|r| Self::parse(r.as_ref())).collect()
    }
}

impl FromStr for PluginReference {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for PluginReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.name, SEPARATOR, self.version)
    }
}

/// A reference resolved against the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPlugin {
    pub plugin: Plugin,
    pub version: PluginVersion,
}

impl ResolvedPlugin {
    pub fn unique_name(&self) -> &str {
        &self.plugin.unique_name
    }
}

/// Resolves the plugin by unique name, then the version. Both lookups are
/// keyed by the unique name from the reference, not by the resolved sid.
pub async fn resolve(
    plugins: &dyn PluginDirectory,
    versions: &dyn VersionDirectory,
    reference: &PluginReference,
) -> Result<ResolvedPlugin> {
    let plugin = plugins.get(&reference.name).await?;
    let version = match reference.version {
        VersionSpec::Latest => versions.latest(&reference.name).await?,
        VersionSpec::Exact(ref version) => versions.get(&reference.name, version).await?,
    };

    tracing::debug!(
        reference = %reference,
        plugin_sid = %plugin.sid,
        version_sid = %version.sid,
        "Resolved plugin reference"
    );
    Ok(ResolvedPlugin { plugin, version })
}

/// Resolves references in order. Every reference is parsed before the first
/// lookup, and the first failure aborts the batch.
pub async fn resolve_all<S: AsRef<str>>(
    plugins: &dyn PluginDirectory,
    versions: &dyn VersionDirectory,
    references: &[S],
) -> Result<Vec<ResolvedPlugin>> {
    let references = PluginReference::parse_all(references)?;

    let mut resolved = Vec::with_capacity(references.len());
    for reference in &references {
        resolved.push(resolve(plugins, versions, reference).await?);
    }
    Ok(resolved)
}
