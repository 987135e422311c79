//! Middleware wrapping the API routes.

pub mod cors;

pub use cors::cors_middleware;
