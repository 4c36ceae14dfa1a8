pub mod api_token;
pub mod metrics;
pub mod tracing;

pub use api_token::{api_token_middleware, ApiToken, API_TOKEN_HEADER};
pub use metrics::metrics_middleware;
pub use tracing::{request_id_middleware, REQUEST_ID_HEADER};
