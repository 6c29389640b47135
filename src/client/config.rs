//! Client configuration.

use std::env;
use std::time::Duration;

use secrecy::SecretString;

use crate::{Error, Result};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const ACCOUNT_SID_ENV: &str = "TWILIO_ACCOUNT_SID";
const AUTH_TOKEN_ENV: &str = "TWILIO_AUTH_TOKEN";
const REALM_ENV: &str = "TWILIO_REALM";
const BASE_URL_ENV: &str = "FLEX_PLUGINS_BASE_URL";

/// Deployment realm of the Plugins API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Realm {
    #[default]
    Prod,
    Stage,
    Dev,
}

impl Realm {
    /// Parses a realm name. Anything other than `stage` or `dev` is prod.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "stage" => Realm::Stage,
            "dev" => Realm::Dev,
            _ => Realm::Prod,
        }
    }

    pub fn from_env() -> Self {
        env::var(REALM_ENV)
            .map(|v| Self::parse(&v))
            .unwrap_or_default()
    }

    /// Host suffix: empty for prod, `.stage` or `.dev` otherwise.
    pub fn suffix(&self) -> &'static str {
        match self {
            Realm::Prod => "",
            Realm::Stage => ".stage",
            Realm::Dev => ".dev",
        }
    }

    pub fn base_url(&self) -> String {
        format!("https://flex-api{}.twilio.com/v1/PluginService/", self.suffix())
    }
}

/// Credentials and endpoint settings for [`PluginServiceClient`](super::PluginServiceClient).
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Account sid, sent as the basic auth username.
    pub account_sid: String,
    /// Auth token, sent as the basic auth password.
    pub auth_token: SecretString,
    pub realm: Realm,
    /// Overrides the realm-derived base URL.
    pub base_url: Option<String>,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(account_sid: impl Into<String>, auth_token: impl Into<String>) -> Self {
        Self {
            account_sid: account_sid.into(),
            auth_token: SecretString::from(auth_token.into()),
            realm: Realm::default(),
            base_url: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Create from environment variables.
    pub fn from_env() -> Result<Self> {
        let account_sid = required_env(ACCOUNT_SID_ENV)?;
        let auth_token = required_env(AUTH_TOKEN_ENV)?;

        let mut config = Self::new(account_sid, auth_token).realm(Realm::from_env());
        config.base_url = env::var(BASE_URL_ENV).ok().filter(|v| !v.is_empty());
        Ok(config)
    }

    pub fn realm(mut self, realm: Realm) -> Self {
        self.realm = realm;
        self
    }

    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Base URL with a guaranteed trailing slash.
    pub fn effective_base_url(&self) -> String {
        let mut url = self
            .base_url
            .clone()
            .unwrap_or_else(|| self.realm.base_url());
        if !url.ends_with('/') {
            url.push('/');
        }
        url
    }

    pub fn validate(&self) -> Result<()> {
        if self.account_sid.trim().is_empty() {
            return Err(Error::Config("account sid must not be empty".into()));
        }
        if self.timeout.is_zero() {
            return Err(Error::Config("timeout must be greater than zero".into()));
        }
        Ok(())
    }
}

fn required_env(key: &str) -> Result<String> {
    env::var(key)
        .ok()
        .filter(|v| !v.is_empty())
        .ok_or_else(|| Error::Config(format!("{} is not set", key)))
}
