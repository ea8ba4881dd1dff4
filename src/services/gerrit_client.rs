//! Gerrit REST client.
//!
//! Fetches the open-patch batch from the query endpoint, strips the XSSI
//! prefix Gerrit puts in front of its JSON, keeps a TTL'd copy of the
//! parsed batch, and mirrors every fresh batch to a dated snapshot file
//! for history. Snapshot failures are logged and never block the report.

use crate::config::AppConfig;
use crate::error::AppError;
use crate::models::Patch;
use chrono::Utc;
use reqwest::Client;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

/// Magic prefix line Gerrit prepends to JSON responses.
const XSSI_PREFIX: &str = ")]}'";

/// Strip Gerrit's XSSI magic prefix line, if present.
pub fn strip_xssi_prefix(raw: &str) -> &str {
    match raw.split_once('\n') {
        Some((first, rest)) if first.trim_end_matches('\r') == XSSI_PREFIX => rest,
        _ => raw,
    }
}

struct DataEntry {
    fetched: Instant,
    batch: Arc<Vec<Patch>>,
}

/// Client for the Gerrit changes query endpoint.
pub struct GerritClient {
    client: Client,
    url_base: String,
    url_prefix: String,
    url_suffix: String,
    open_query: String,
    data_dir: PathBuf,
    ttl: Duration,
    cache: Mutex<Option<DataEntry>>,
}

impl GerritClient {
    /// Create a client from the application configuration.
    pub fn new(config: &AppConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.fetch_timeout_secs))
            .build()
            .map_err(|e| AppError::internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            url_base: config.gerrit_url_base.trim_end_matches('/').to_string(),
            url_prefix: config.gerrit_url_prefix.clone(),
            url_suffix: config.gerrit_url_suffix.clone(),
            open_query: config.open_query.clone(),
            data_dir: config.data_dir.clone(),
            ttl: Duration::from_secs(config.cache_ttl_secs),
            cache: Mutex::new(None),
        })
    }

    /// Full query URL for a Gerrit search query.
    fn query_url(&self, query: &str) -> String {
        format!(
            "{}{}{}{}",
            self.url_base,
            self.url_prefix,
            urlencoding::encode(query),
            self.url_suffix
        )
    }

    /// Return the open-patch batch, fetching from Gerrit when the cached
    /// copy is missing, expired, or a refresh is forced. Fresh batches
    /// are mirrored to a dated snapshot file.
    pub async fn open_patches(&self, force_refresh: bool) -> Result<Arc<Vec<Patch>>, AppError> {
        let mut guard = self.cache.lock().await;

        if !force_refresh {
            if let Some(entry) = guard.as_ref() {
                if entry.fetched.elapsed() < self.ttl {
                    log::debug!("[gerrit] returning cached batch");
                    return Ok(entry.batch.clone());
                }
            }
        }

        log::info!("[gerrit] fetching open patches (force_refresh: {})", force_refresh);
        let patches = self.query_changes(&self.open_query).await?;

        match write_snapshot(&self.data_dir, &patches) {
            Ok(path) => log::debug!("[gerrit] snapshot written to {}", path.display()),
            Err(e) => log::warn!("[gerrit] snapshot write failed: {}", e),
        }

        let batch = Arc::new(patches);
        *guard = Some(DataEntry {
            fetched: Instant::now(),
            batch: batch.clone(),
        });
        Ok(batch)
    }

    /// Run a changes query and parse the result batch.
    async fn query_changes(&self, query: &str) -> Result<Vec<Patch>, AppError> {
        let url = self.query_url(query);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::gerrit_api_full(
                format!("Request failed ({}): {}", status.as_u16(), body),
                status.as_u16(),
                url,
            ));
        }

        let text = response
            .text()
            .await
            .map_err(|e| AppError::network(format!("Failed to read response body: {}", e)))?;
        serde_json::from_str(strip_xssi_prefix(&text))
            .map_err(|e| AppError::gerrit_api(format!("Failed to parse changes payload: {}", e)))
    }
}

/// Write the batch to `<data_dir>/open-YYYY-MM-DD.json`.
fn write_snapshot(data_dir: &Path, patches: &[Patch]) -> Result<PathBuf, AppError> {
    std::fs::create_dir_all(data_dir)
        .map_err(|e| AppError::snapshot(format!("create {}: {}", data_dir.display(), e)))?;
    let path = data_dir.join(format!("open-{}.json", Utc::now().format("%Y-%m-%d")));
    let json = serde_json::to_string(patches)?;
    std::fs::write(&path, json)
        .map_err(|e| AppError::snapshot(format!("write {}: {}", path.display(), e)))?;
    Ok(path)
}
