//! Application startup and lifecycle management.

use crate::config::{SearchConfig, SearchMode};
use crate::handlers::{health, search};
use crate::openapi::{ApiDoc, OPENAPI_JSON_PATH, SWAGGER_UI_PATH};
use crate::services::providers::groq::GroqClient;
use crate::services::providers::InferenceClient;
use crate::services::{ContextProvider, DatasetContext};
use axum::{
    middleware::{from_fn, from_fn_with_state},
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{
    api_token_middleware, metrics_middleware, request_id_middleware, ApiToken, REQUEST_ID_HEADER,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub mode: SearchMode,
    pub inference: Arc<dyn InferenceClient>,
    /// Present only in dataset-backed mode.
    pub context: Option<Arc<dyn ContextProvider>>,
}

impl AppState {
    pub fn is_ready(&self) -> bool {
        self.context
            .as_ref()
            .map_or(true, |provider| provider.is_available())
    }
}

/// Build the HTTP router. Search routes sit behind the API token gate;
/// health, metrics and the API docs do not.
pub fn build_router(state: AppState, api_token: ApiToken) -> Router {
    let search_routes = Router::new()
        .route("/busca/grau-ferimento", post(search::search_injury_degree))
        .route(
            "/busca/partes-corpo-afetadas",
            post(search::search_affected_body_parts),
        )
        .route_layer(from_fn_with_state(api_token, api_token_middleware));

    Router::new()
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        .route("/metrics", get(health::metrics_endpoint))
        .merge(search_routes)
        .with_state(state)
        .merge(SwaggerUi::new(SWAGGER_UI_PATH).url(OPENAPI_JSON_PATH, ApiDoc::openapi()))
        .layer(from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http().make_span_with(
            |request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                )
            },
        ))
        .layer(from_fn(request_id_middleware))
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application with the given configuration.
    pub async fn build(config: SearchConfig) -> Result<Self, AppError> {
        let groq = GroqClient::new(config.inference.clone());
        if groq.is_configured() {
            tracing::info!(model = %config.inference.model, "Initialized Groq inference client");
        } else {
            tracing::warn!("GROQ_API_KEY not configured - searches will fail until it is set");
        }
        let inference: Arc<dyn InferenceClient> = Arc::new(groq);

        let context: Option<Arc<dyn ContextProvider>> = match config.mode {
            SearchMode::Baseline => None,
            SearchMode::DatasetBacked => Some(Arc::new(DatasetContext::load(&config.dataset))),
        };

        tracing::info!(mode = %config.mode, "Search mode selected");

        let state = AppState {
            mode: config.mode,
            inference,
            context,
        };
        let router = build_router(state, ApiToken::new(config.security.api_token.clone()));

        // Port 0 binds a random port for testing
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind HTTP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Accident search service listening on port {}", port);

        Ok(Self {
            port,
            listener,
            router,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until a shutdown signal arrives.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
