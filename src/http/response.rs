//! Response bodies and error mapping.
//!
//! # Design Decisions
//! - Timestamps are generation times, RFC-3339, second precision, UTC
//! - Every failure on the listing path becomes a plain-text 500; the upstream
//!   status is never passed through

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::upstream::{ProjectsError, RepositoryRecord};

/// Current time formatted as RFC-3339.
pub fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Body of `GET /api/projects`.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectListResponse {
    pub projects: Vec<RepositoryRecord>,
    #[serde(rename = "lastUpdated")]
    pub last_updated: String,
}

impl ProjectListResponse {
    pub fn new(projects: Vec<RepositoryRecord>) -> Self {
        Self {
            projects,
            last_updated: now_rfc3339(),
        }
    }
}

/// Body of `GET /api/health`.
#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub time: String,
}

impl HealthStatus {
    pub fn healthy() -> Self {
        Self {
            status: "healthy",
            time: now_rfc3339(),
        }
    }
}

/// Serialize `body` as a 200 JSON response.
pub fn json_response<T: Serialize>(body: &T) -> Response {
    match serde_json::to_vec(body) {
        Ok(bytes) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, HeaderValue::from_static("application/json"))],
            bytes,
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Error encoding response");
            (StatusCode::INTERNAL_SERVER_ERROR, "Error encoding response").into_response()
        }
    }
}

impl IntoResponse for ProjectsError {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Error fetching repositories: {}", self),
        )
            .into_response()
    }
}
