//! Error types for the timeline client
//!
//! - `ClientError`: everything that can go wrong between a user action and the
//!   API response. Each variant maps to the status text shown to the user.

use thiserror::Error;

/// Text shown when the request never reached the server.
pub const CONNECTION_ERROR_TEXT: &str =
    "Could not reach the server. Check that the API is running.";

/// Errors raised while talking to the timeline API
#[derive(Debug, Error)]
pub enum ClientError {
    /// Local input problem, never sent over the network
    #[error("Validation error: {0}")]
    Validation(String),

    /// Non-2xx response, with the body's `error` field when present
    #[error("API error: {status} - {}", .message.as_deref().unwrap_or("no message"))]
    Api { status: u16, message: Option<String> },

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// 2xx response whose body did not match the expected shape
    #[error("Deserialization error: {0}")]
    Decode(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// User-facing status text for this failure.
    pub fn status_text(&self) -> String {
        match self {
            ClientError::Validation(msg) => msg.clone(),
            ClientError::Api {
                message: Some(msg), ..
            } if !msg.trim().is_empty() => format!("Failed: {}", msg),
            ClientError::Api { status, .. } => {
                format!("Failed: Request failed (HTTP {})", status)
            }
            ClientError::Transport(_) => CONNECTION_ERROR_TEXT.to_string(),
            ClientError::Decode(_) => "Failed: unexpected response from server".to_string(),
            ClientError::Config(msg) => format!("Failed: {}", msg),
        }
    }

    /// True when the request was sent and the server answered.
    pub fn reached_server(&self) -> bool {
        matches!(self, ClientError::Api { .. } | ClientError::Decode(_))
    }
}
