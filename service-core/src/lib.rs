//! service-core: Shared HTTP infrastructure for the accident search service.
pub mod config;
pub mod error;
pub mod middleware;
pub mod observability;

pub use axum;
pub use secrecy;
pub use tracing;
