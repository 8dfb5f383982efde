//! Project catalog API.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use std::sync::Arc;

use super::AppState;

/// GET /api/projects — the full catalog as a JSON array, in display order.
pub(super) async fn handler_api_projects_list(
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    Json(state.catalog.projects().to_vec())
}

/// GET / — plain-text index when no static site directory is configured.
pub(super) async fn handler_index(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let mut body = format!(
        "showcase: {} project(s), JSON at /api/projects\n\n",
        state.catalog.len()
    );
    for project in &state.catalog {
        body.push_str(&project.to_string());
    }
    body
}
