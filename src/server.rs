//! HTTP server for the dashboard.
//!
//! Three read endpoints: `/` renders the grouped patch table, `/stats`
//! the cross-tab counts, and `/notify` pushes the summary to the
//! configured webhook. `?refresh=1` on `/` or `/stats` forces a refetch
//! and rebuild. Shutdown is signalled through a cancellation token.

use crate::config::AppConfig;
use crate::error::AppError;
use crate::render;
use crate::services::{assembler, GerritClient, Notifier, ReportCache};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use serde::Deserialize;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Shared state for the dashboard routes.
#[derive(Clone)]
pub struct AppState {
    pub client: Arc<GerritClient>,
    pub cache: Arc<ReportCache>,
    pub notifier: Option<Arc<Notifier>>,
}

impl AppState {
    /// Build the state from configuration.
    pub fn from_config(config: &AppConfig) -> Result<Self, AppError> {
        let client = Arc::new(GerritClient::new(config)?);
        let cache = Arc::new(ReportCache::new(
            std::time::Duration::from_secs(config.cache_ttl_secs),
            config.gerrit_url_base.trim_end_matches('/'),
            config.automation_voter.clone(),
        ));
        let notifier = match &config.notify_url {
            Some(url) => Some(Arc::new(Notifier::new(url, config.fetch_timeout_secs)?)),
            None => None,
        };
        Ok(Self {
            client,
            cache,
            notifier,
        })
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::GerritApi { .. } | AppError::Network { .. } => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        log::error!("[server] request failed: {}", self);
        (status, self.to_string()).into_response()
    }
}

#[derive(Debug, Default, Deserialize)]
struct ReadQuery {
    refresh: Option<String>,
}

impl ReadQuery {
    fn force_refresh(&self) -> bool {
        matches!(self.refresh.as_deref(), Some("1") | Some("true"))
    }
}

/// Build the dashboard router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(dashboard))
        .route("/stats", get(stats))
        .route("/notify", get(notify))
        .with_state(state)
}

/// Serve the router on `port` until the token is cancelled.
pub async fn serve(state: AppState, port: u16, cancel: CancellationToken) -> Result<(), AppError> {
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind to port {}: {}", port, e)))?;

    log::info!("[server] listening on http://0.0.0.0:{}", port);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(async move {
            cancel.cancelled().await;
        })
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    log::info!("[server] stopped");
    Ok(())
}

/// `GET /` — the grouped patch table.
async fn dashboard(
    State(state): State<AppState>,
    Query(query): Query<ReadQuery>,
) -> Result<Html<String>, AppError> {
    let force = query.force_refresh();
    let patches = state.client.open_patches(force).await?;
    let report = state.cache.get_or_build(&patches, force).await?;

    let mut page = render::html_head(render::DEFAULT_TITLE);
    page.push_str(&format!("<em>Data cached at: {}</em>", report.built_at));
    page.push_str(render::table_head());
    page.push_str(&report.body);
    page.push_str(render::table_foot());
    page.push_str(render::html_foot());
    Ok(Html(page))
}

/// `GET /stats` — cross-tab of bucket sizes.
async fn stats(
    State(state): State<AppState>,
    Query(query): Query<ReadQuery>,
) -> Result<Html<String>, AppError> {
    let force = query.force_refresh();
    let patches = state.client.open_patches(force).await?;
    let report = state.cache.get_or_build(&patches, force).await?;

    let mut page = render::html_head("Gerrit Report Statistics");
    page.push_str(&format!("<em>Data cached at: {}</em>", report.built_at));
    page.push_str("<table class=\"table\"><thead><tr><th scope=\"col\">V\\CR</th>");
    for label in crate::services::grid::CR_LABELS {
        page.push_str(&format!("<th scope=\"col\">{}</th>", label));
    }
    page.push_str("</tr></thead><tbody>");
    for row in assembler::cross_tab(&report.counts) {
        page.push_str(&format!("<tr><th scope=\"row\">{}</th>", row.verification));
        for count in row.counts {
            page.push_str(&format!("<td>{}</td>", count));
        }
        page.push_str("</tr>");
    }
    page.push_str(&format!(
        "<tr><th scope=\"row\">WIP</th><td colspan=\"6\">{}</td></tr>",
        report.counts.wip
    ));
    page.push_str("</tbody></table>");
    page.push_str(render::html_foot());
    Ok(Html(page))
}

/// `GET /notify` — push the distribution summary to the webhook.
async fn notify(State(state): State<AppState>) -> Result<String, AppError> {
    let Some(notifier) = state.notifier.as_ref() else {
        return Err(AppError::notification("no webhook configured"));
    };

    let patches = state.client.open_patches(false).await?;
    let report = state.cache.get_or_build(&patches, false).await?;
    notifier.send_summary(&report.counts).await?;
    Ok("notification sent\n".to_string())
}
