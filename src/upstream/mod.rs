//! Upstream repository-listing API.
//!
//! # Data Flow
//! ```text
//! owner
//!     → client.rs (GET /users/{owner}/repos, timeout, headers)
//!     → types.rs (lenient decode into RepositoryRecord)
//!     → Vec<RepositoryRecord> in upstream order
//! ```

pub mod client;
pub mod types;

pub use client::UpstreamClient;
pub use types::{decode_repositories, DecodeError, FetchError, ProjectsError, RepositoryRecord};
