//! Portfolio API Library
//!
//! Lists an account's repositories from the upstream hosting API in the shape
//! the portfolio front-end consumes.
//!
//! ```text
//!   Browser ──▶ http (CORS, request ID) ──▶ handlers ──▶ upstream client ──▶ api.github.com
//!                                              │               │
//!                                              │               ▼
//!                                              │         decode records
//!                                              ▼               │
//!                                       JSON response ◀── projects filter
//! ```

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod projects;
pub mod upstream;

pub use config::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
