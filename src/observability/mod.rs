//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Handlers and upstream client produce:
//!     → logging.rs (structured tracing events)
//!     → metrics.rs (counters, histograms)
//!     → request IDs (http::request) tie the two together
//! ```

pub mod logging;
pub mod metrics;
