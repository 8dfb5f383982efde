//! # Server — Read-Only Catalog Endpoint
//!
//! Runs an Axum HTTP server that hands the project catalog to the site's
//! rendering layer as JSON and, optionally, serves the rendered site itself
//! from a static directory.
//!
//! The catalog is loaded once before the listener binds and is never written
//! afterwards, so handlers share it through `Arc<AppState>` without locks.

mod routes_health;
mod routes_projects;

use crate::project::Catalog;
use crate::prom_metrics;
use anyhow::{Context, Result};
use axum::extract::Request;
use axum::http::{Method, StatusCode};
use axum::middleware::Next;
use axum::routing::get;
use axum::Router;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, Instrument};

pub struct AppState {
    pub catalog: Catalog,
    pub prom_metrics: prom_metrics::Metrics,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Arc<Self> {
        let prom_metrics = prom_metrics::Metrics::new();
        prom_metrics.catalog_projects.set(catalog.len() as i64);
        Arc::new(AppState {
            catalog,
            prom_metrics,
        })
    }
}

/// Records request duration into the Prometheus histogram, generates (or
/// propagates) a request ID for correlation, and wraps the request in a
/// tracing span.
async fn metrics_middleware(
    axum::extract::State(state): axum::extract::State<Arc<AppState>>,
    req: Request,
    next: Next,
) -> axum::response::Response {
    let request_id = req
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string())
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
    let raw_method = req.method().to_string();
    let method = normalize_method(req.method());
    let raw_path = req.uri().path().to_string();
    let start = std::time::Instant::now();

    let span = tracing::info_span!(
        "request",
        request_id = %request_id,
        method = %raw_method,
        path = %raw_path,
    );
    let mut response = next.run(req).instrument(span).await;

    let duration = start.elapsed().as_secs_f64();
    state
        .prom_metrics
        .http_request_duration
        .get_or_create(&prom_metrics::HttpLabel {
            method,
            path: normalize_path(&raw_path),
        })
        .observe(duration);

    if let Ok(value) = request_id.parse() {
        response.headers_mut().insert("x-request-id", value);
    }
    response
}

/// Map the request method onto a fixed label set; clients can send arbitrary
/// extension methods, which must not each open a new series.
fn normalize_method(method: &Method) -> String {
    match *method {
        Method::GET => "GET",
        Method::HEAD => "HEAD",
        Method::OPTIONS => "OPTIONS",
        _ => "other",
    }
    .to_string()
}

/// Collapse static-asset paths into one label so the histogram does not grow
/// a series per file.
fn normalize_path(path: &str) -> String {
    match path {
        "/" | "/healthz" | "/metrics" | "/api/projects" => path.to_string(),
        p if p.starts_with("/api/") => "/api/:other".to_string(),
        _ => "/:static".to_string(),
    }
}

pub fn build_router(state: Arc<AppState>, static_dir: Option<&Path>) -> Router {
    let mut app = Router::new()
        .route(
            "/api/projects",
            get(routes_projects::handler_api_projects_list),
        )
        .route("/healthz", get(routes_health::handler_healthz))
        .route("/metrics", get(routes_health::handler_metrics));

    if let Some(dir) = static_dir {
        app = app.fallback_service(ServeDir::new(dir).append_index_html_on_directories(true));
    } else {
        app = app.route("/", get(routes_projects::handler_index));
    }

    app.layer(
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::HEAD])
            .allow_headers(Any),
    )
    .layer(CatchPanicLayer::new())
    .layer(axum::middleware::from_fn_with_state(
        state.clone(),
        metrics_middleware,
    ))
    .layer(TraceLayer::new_for_http())
    .layer(TimeoutLayer::with_status_code(
        StatusCode::REQUEST_TIMEOUT,
        Duration::from_secs(30),
    ))
    .with_state(state)
}

pub async fn run(port: u16, catalog: Catalog, static_dir: Option<&Path>) -> Result<()> {
    let projects = catalog.len();
    let state = AppState::new(catalog);
    let app = build_router(state, static_dir);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!(
        addr = %addr,
        projects,
        static_dir = ?static_dir,
        "catalog server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("catalog server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_path_keeps_known_routes() {
        assert_eq!(normalize_path("/api/projects"), "/api/projects");
        assert_eq!(normalize_path("/healthz"), "/healthz");
        assert_eq!(normalize_path("/"), "/");
    }

    #[test]
    fn normalize_method_bounds_label_set() {
        assert_eq!(normalize_method(&Method::GET), "GET");
        assert_eq!(normalize_method(&Method::HEAD), "HEAD");
        assert_eq!(normalize_method(&Method::OPTIONS), "OPTIONS");
        assert_eq!(normalize_method(&Method::POST), "other");
        let custom = Method::from_bytes(b"X-PURGE").unwrap();
        assert_eq!(normalize_method(&custom), "other");
    }

    #[test]
    fn normalize_path_collapses_assets() {
        assert_eq!(normalize_path("/static/images/bfsio.png"), "/:static");
        assert_eq!(normalize_path("/api/unknown"), "/api/:other");
    }

    #[test]
    fn app_state_sets_catalog_gauge() {
        let state = AppState::new(Catalog::embedded());
        let output = state.prom_metrics.encode();
        assert!(output.contains(&format!(
            "showcase_catalog_projects {}",
            crate::project::projects().len()
        )));
    }
}
