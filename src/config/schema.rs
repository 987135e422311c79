//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the service.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the portfolio API.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ServiceConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Upstream repository-listing API settings.
    pub upstream: UpstreamConfig,

    /// Project list filtering.
    pub projects: ProjectsConfig,

    /// Inbound timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Upstream API configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Base URL of the hosting platform API, without trailing slash.
    pub base_url: String,

    /// Account whose repositories are listed.
    pub owner: String,

    /// Overall timeout for the upstream call in seconds.
    pub timeout_secs: u64,

    /// Page size requested from upstream. Entries beyond one page are dropped.
    pub per_page: u32,

    /// User-Agent sent with every upstream request.
    pub user_agent: String,

    /// Optional access token. Usually supplied through `GITHUB_TOKEN`.
    #[serde(skip_serializing)]
    pub token: Option<String>,
}

pub const DEFAULT_OWNER: &str = "jasonschurawel";

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.github.com".to_string(),
            owner: DEFAULT_OWNER.to_string(),
            timeout_secs: 10,
            per_page: 100,
            user_agent: "GitHub-Portfolio-API/1.0".to_string(),
            token: None,
        }
    }
}

/// Project list filtering configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ProjectsConfig {
    /// Extra repository names hidden from the listing, matched exactly.
    pub excluded_names: Vec<String>,
}

/// Timeout configuration for inbound requests.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 15 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
