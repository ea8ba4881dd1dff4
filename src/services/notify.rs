//! Push notification delivery.
//!
//! Posts the fixed-width distribution summary as plain text to a
//! configured webhook. Reads bucket sizes only, through the same
//! `GridCounts` path as the statistics view.

use crate::error::AppError;
use crate::services::assembler;
use crate::services::grid::GridCounts;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use std::time::Duration;

/// Webhook notifier for the report distribution summary.
pub struct Notifier {
    client: Client,
    webhook_url: String,
}

impl Notifier {
    pub fn new(webhook_url: impl Into<String>, timeout_secs: u64) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| AppError::internal(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            client,
            webhook_url: webhook_url.into(),
        })
    }

    /// Send the distribution summary for the given bucket sizes.
    pub async fn send_summary(&self, counts: &GridCounts) -> Result<(), AppError> {
        let body = assembler::summary_table(counts);
        log::info!("[notify] pushing summary to {}", self.webhook_url);

        let response = self
            .client
            .post(&self.webhook_url)
            .header(CONTENT_TYPE, "text/plain; charset=utf-8")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::notification(format!(
                "webhook returned {}",
                status.as_u16()
            )));
        }
        Ok(())
    }
}
