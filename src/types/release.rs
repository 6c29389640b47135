//! Release resource.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{null_as_empty, parse_timestamp};

/// Activation record pointing at one configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    pub sid: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub account_sid: String,
    pub configuration_sid: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub date_created: String,
}

impl Release {
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.date_created)
    }
}
