//! Application error types.
//!
//! Per-patch anomalies are logged and contained; these errors cover the
//! externally visible failure modes (fetch, parse, cache build, delivery).

use thiserror::Error;

/// Application-level errors surfaced by the fetch and report paths.
#[derive(Debug, Error)]
pub enum AppError {
    /// Gerrit API request failed.
    #[error("Gerrit API error: {message}")]
    GerritApi {
        message: String,
        status_code: Option<u16>,
        endpoint: Option<String>,
    },

    /// Network request failed.
    #[error("Network error: {message}")]
    Network { message: String },

    /// Configuration file missing or malformed.
    #[error("Config error: {message}")]
    Config { message: String },

    /// Snapshot file could not be written.
    #[error("Snapshot error: {message}")]
    Snapshot { message: String },

    /// Report build failed to populate the cache.
    #[error("Report build error: {message}")]
    ReportBuild { message: String },

    /// Push notification delivery failed.
    #[error("Notification error: {message}")]
    Notification { message: String },

    /// Internal application error.
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl AppError {
    /// Create a Gerrit API error.
    pub fn gerrit_api(message: impl Into<String>) -> Self {
        Self::GerritApi {
            message: message.into(),
            status_code: None,
            endpoint: None,
        }
    }

    /// Create a Gerrit API error with status code and endpoint.
    pub fn gerrit_api_full(
        message: impl Into<String>,
        status_code: u16,
        endpoint: impl Into<String>,
    ) -> Self {
        Self::GerritApi {
            message: message.into(),
            status_code: Some(status_code),
            endpoint: Some(endpoint.into()),
        }
    }

    /// Create a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Create a config error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a snapshot error.
    pub fn snapshot(message: impl Into<String>) -> Self {
        Self::Snapshot {
            message: message.into(),
        }
    }

    /// Create a report build error.
    pub fn report_build(message: impl Into<String>) -> Self {
        Self::ReportBuild {
            message: message.into(),
        }
    }

    /// Create a notification error.
    pub fn notification(message: impl Into<String>) -> Self {
        Self::Notification {
            message: message.into(),
        }
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

// Conversions from common error types

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::network("Request timed out")
        } else if err.is_connect() {
            Self::network("Failed to connect to server")
        } else if err.is_status() {
            Self::gerrit_api(format!("HTTP error: {}", err))
        } else {
            Self::network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::internal(format!("JSON error: {}", err))
    }
}
