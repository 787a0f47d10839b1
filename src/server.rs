//! HTTP page server: one synchronous render pass per request.

use anyhow::Result;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use serde_json::Value;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::common::html_escape;
use crate::dashboard::{render_dashboard, DashboardView};
use crate::dataset::{Dataset, RankedRow};

/// Listen address for `serve`.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Default, Deserialize)]
struct CategoryQuery {
    category: Option<String>,
}

impl CategoryQuery {
    fn category(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }
}

/// A failed render pass, shown to the user as an error page.
struct AppError(anyhow::Error);

impl<E: Into<anyhow::Error>> From<E> for AppError {
    fn from(err: E) -> Self { AppError(err.into()) }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error!(error = %self.0, "render failed");
        let body = format!("<h1>렌더링 오류</h1><pre>{}</pre>", html_escape(&format!("{:#}", self.0)));
        (StatusCode::INTERNAL_SERVER_ERROR, Html(body)).into_response()
    }
}

/// Routes over the cached, read-only dataset.
pub fn router(dataset: &'static Dataset) -> Router {
    Router::new()
        .route("/", get(dashboard_page))
        .route("/api/regions", get(api_regions))
        .route("/api/top5", get(api_top5))
        .route("/health", get(health))
        .with_state(dataset)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %request.uri().path(),
                    )
                }),
        )
}

/// Serve until Ctrl-C.
pub async fn serve(dataset: &'static Dataset, config: &ServerConfig) -> Result<()> {
    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("startup-atlas listening on http://{addr}");

    axum::serve(listener, router(dataset))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await?;
    Ok(())
}

// --- Handlers ---

async fn dashboard_page(
    State(dataset): State<&'static Dataset>,
    Query(query): Query<CategoryQuery>,
) -> Result<Html<String>, AppError> {
    Ok(Html(render_dashboard(dataset, query.category())?))
}

async fn api_regions(
    State(dataset): State<&'static Dataset>,
    Query(query): Query<CategoryQuery>,
) -> Json<Value> {
    Json(DashboardView::new(dataset, query.category()).to_geojson())
}

async fn api_top5(
    State(dataset): State<&'static Dataset>,
    Query(query): Query<CategoryQuery>,
) -> Json<Vec<RankedRow>> {
    Json(DashboardView::new(dataset, query.category()).ranked)
}

async fn health() -> &'static str {
    "ok"
}
