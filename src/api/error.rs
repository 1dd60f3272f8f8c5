//! Failure taxonomy for remote post operations.

use std::time::Duration;
use thiserror::Error;

use crate::post::PostId;

/// Longest server body excerpt carried in a [`ApiError::Server`] message.
const MAX_BODY_EXCERPT: usize = 200;

/// Errors that can occur while talking to the posts API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Transport-level failure (DNS, refused connection, reset).
    #[error("Network error: {message}")]
    Network { message: String },

    /// The call did not complete within the configured timeout.
    #[error("Request timed out after {after:?}")]
    Timeout { after: Duration },

    /// Server answered with a non-success status.
    #[error("Server error {status}: {message}")]
    Server { status: u16, message: String },

    /// The post does not exist (locally or on the server).
    #[error("Post '{id}' not found")]
    NotFound { id: PostId },

    /// Response body could not be decoded.
    #[error("Invalid response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn network(message: impl Into<String>) -> Self {
        ApiError::Network {
            message: message.into(),
        }
    }

    /// Build a server error, trimming the body to a readable excerpt.
    pub fn server(status: u16, body: &str) -> Self {
        let body = body.trim();
        let message = if body.is_empty() {
            "no response body".to_string()
        } else if body.chars().count() > MAX_BODY_EXCERPT {
            let excerpt: String = body.chars().take(MAX_BODY_EXCERPT).collect();
            format!("{}...", excerpt)
        } else {
            body.to_string()
        };
        ApiError::Server { status, message }
    }

    /// Short category string, used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Network { .. } => "network",
            ApiError::Timeout { .. } => "timeout",
            ApiError::Server { .. } => "server",
            ApiError::NotFound { .. } => "not_found",
            ApiError::Decode(_) => "decode",
        }
    }

    /// Message shown to the user once the failure is absorbed by the store.
    pub fn user_message(&self) -> String {
        self.to_string()
    }

    /// Classify a transport error. `timeout` is the budget the client was
    /// built with, since reqwest does not report it.
    pub fn from_reqwest(err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            ApiError::Timeout { after: timeout }
        } else if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            ApiError::server(status.as_u16(), &err.to_string())
        } else {
            ApiError::network(err.to_string())
        }
    }
}
