//! Error body returned by the Plugins API on non-2xx responses.

use serde::Deserialize;

use crate::Error;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub code: Option<u32>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub more_info: Option<String>,
    #[serde(default)]
    pub status: Option<u16>,
}

impl ErrorResponse {
    /// Parses an error body, tolerating empty or non-JSON payloads.
    pub fn from_body(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_else(|_| Self {
            message: Some(body.trim().to_string()).filter(|m| !m.is_empty()),
            ..Default::default()
        })
    }

    pub fn into_error(self, status: u16) -> Error {
        let message = self
            .message
            .unwrap_or_else(|| format!("request failed with status {}", status));
        match status {
            404 => Error::NotFound(message),
            400 => Error::Validation(message),
            _ => Error::Api {
                message,
                status: Some(status),
                code: self.code,
            },
        }
    }
}
