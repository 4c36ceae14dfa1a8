//! Chat-completion provider abstraction.
//!
//! Handlers only see [`InferenceClient`], so the Groq client can be swapped
//! for the mock in tests.

pub mod groq;
pub mod mock;

use async_trait::async_trait;
use thiserror::Error;

/// Why a completion could not be produced.
#[derive(Error, Debug)]
pub enum InferenceError {
    #[error("Provider not configured: {0}")]
    ConfigurationMissing(String),

    #[error("Network error: {0}")]
    NetworkFailure(String),

    #[error("Provider rejected request with status {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl InferenceError {
    /// Stable label for logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            InferenceError::ConfigurationMissing(_) => "configuration_missing",
            InferenceError::NetworkFailure(_) => "network_failure",
            InferenceError::Rejected { .. } => "rejected",
            InferenceError::MalformedResponse(_) => "malformed_response",
        }
    }
}

/// Single-turn completion: one user message in, the reply text out.
#[async_trait]
pub trait InferenceClient: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, InferenceError>;

    /// Model identifier requests are sent with.
    fn model(&self) -> &str;
}
