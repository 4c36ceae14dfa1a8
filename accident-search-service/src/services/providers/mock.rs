//! Mock inference client for testing.

use super::{InferenceClient, InferenceError};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Echoes the prompt back as the reply, or fails with
/// [`InferenceError::ConfigurationMissing`] when disabled.
pub struct MockInferenceClient {
    enabled: bool,
    calls: AtomicUsize,
}

impl MockInferenceClient {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of `complete` calls received so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl InferenceClient for MockInferenceClient {
    async fn complete(&self, prompt: &str) -> Result<String, InferenceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if !self.enabled {
            return Err(InferenceError::ConfigurationMissing(
                "Mock inference client not enabled".to_string(),
            ));
        }

        Ok(prompt.to_string())
    }

    fn model(&self) -> &str {
        "mock"
    }
}
