//! API endpoint handlers.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};

use crate::http::response::{json_response, HealthStatus, ProjectListResponse};
use crate::http::server::AppState;

/// `GET /api/projects`: fetch, decode and filter the owner's repositories.
pub async fn list_projects(State(state): State<AppState>) -> Response {
    let owner = state.client.owner();
    tracing::info!(owner = %owner, "Fetching repositories");

    let repos = match state.client.fetch_repositories(owner).await {
        Ok(repos) => repos,
        Err(e) => {
            tracing::error!(owner = %owner, error = %e, "Error fetching repositories");
            return e.into_response();
        }
    };

    let fetched = repos.len();
    let projects = state.filter.apply(repos);
    tracing::info!(fetched, listed = projects.len(), "Successfully fetched repositories");

    json_response(&ProjectListResponse::new(projects))
}

/// `GET /api/health`: liveness only, independent of the upstream.
pub async fn health() -> Response {
    json_response(&HealthStatus::healthy())
}
