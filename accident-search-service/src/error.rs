use crate::services::providers::InferenceError;
use crate::services::DatasetError;
use axum::response::{IntoResponse, Response};
use service_core::error::AppError;
use thiserror::Error;

pub const DATASET_UNAVAILABLE_MESSAGE: &str = "Dataset indisponível";
pub const PROCESSING_ERROR_MESSAGE: &str = "Erro ao processar requisição";

/// Failures of a search after authentication.
///
/// Each kind is logged with its cause; callers only ever see one fixed
/// message per category and a 500.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("dataset is not loaded")]
    DatasetUnavailable,

    #[error(transparent)]
    Dataset(#[from] DatasetError),

    #[error(transparent)]
    Inference(#[from] InferenceError),
}

impl SearchError {
    pub fn outcome(&self) -> &'static str {
        match self {
            SearchError::DatasetUnavailable => "dataset_unavailable",
            SearchError::Dataset(_) => "processing_error",
            SearchError::Inference(_) => "inference_error",
        }
    }
}

impl From<SearchError> for AppError {
    fn from(err: SearchError) -> Self {
        match err {
            SearchError::DatasetUnavailable => {
                tracing::error!("Search rejected: dataset unavailable");
                AppError::Internal(DATASET_UNAVAILABLE_MESSAGE)
            }
            SearchError::Dataset(e) => {
                tracing::error!(error = %e, "Failed to aggregate dataset");
                AppError::Internal(PROCESSING_ERROR_MESSAGE)
            }
            SearchError::Inference(e) => {
                tracing::error!(kind = e.kind(), error = %e, "Failed to execute prompt");
                AppError::Internal(PROCESSING_ERROR_MESSAGE)
            }
        }
    }
}

impl IntoResponse for SearchError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}
