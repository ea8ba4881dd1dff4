//! Application configuration.
//!
//! Loaded from a TOML file; every field has a default so a missing file or
//! a partial file still yields a runnable configuration.

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Reserved account name whose votes never count as human review.
pub const DEFAULT_AUTOMATION_VOTER: &str = "jenkins";

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Port the dashboard listens on.
    pub port: u16,

    /// Base URL of the Gerrit instance (e.g. `https://review.example.org`).
    pub gerrit_url_base: String,

    /// Path prefix of the query endpoint, up to the query itself.
    pub gerrit_url_prefix: String,

    /// Query-string suffix requesting label and account details.
    pub gerrit_url_suffix: String,

    /// The query selecting patches for the dashboard.
    pub open_query: String,

    /// Directory for dated snapshot files of each fetched batch.
    pub data_dir: PathBuf,

    /// TTL for both the raw-data cache and the rendered report, seconds.
    pub cache_ttl_secs: u64,

    /// Outbound request timeout, seconds.
    pub fetch_timeout_secs: u64,

    /// Account excluded from the human reviewer list.
    pub automation_voter: String,

    /// Webhook receiving the summary table; None disables notifications.
    pub notify_url: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            gerrit_url_base: "http://localhost:8080".into(),
            gerrit_url_prefix: "/changes/?q=".into(),
            gerrit_url_suffix: "&o=LABELS&o=DETAILED_ACCOUNTS".into(),
            open_query: "is:open".into(),
            data_dir: PathBuf::from("data"),
            cache_ttl_secs: 600,
            fetch_timeout_secs: 30,
            automation_voter: DEFAULT_AUTOMATION_VOTER.into(),
            notify_url: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from `path`, or from `config.toml` in the
    /// working directory when no path is given. A missing default file
    /// yields the built-in defaults; an explicitly named file must exist.
    pub fn load(path: Option<&Path>) -> Result<Self, AppError> {
        let (path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (PathBuf::from("config.toml"), false),
        };

        if !path.exists() {
            if required {
                return Err(AppError::config(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(&path).map_err(|e| {
            AppError::config(format!("failed to read {}: {}", path.display(), e))
        })?;
        toml::from_str(&raw)
            .map_err(|e| AppError::config(format!("failed to parse {}: {}", path.display(), e)))
    }
}
