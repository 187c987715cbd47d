//! Inference provider boundary

use async_trait::async_trait;

use super::error::InferenceError;

/// One piece of a rendered prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptPart {
    Text(String),
    /// Inline media, base64 encoded
    Media { mime_type: String, data: String },
}

/// A rendered prompt ready to send
#[derive(Debug, Clone)]
pub struct InferenceRequest {
    /// Flow name, for logs and provider-side tracing
    pub operation: String,
    pub parts: Vec<PromptPart>,
}

/// External structured-output model
///
/// Returns the raw text the model produced. Interpreting that text against
/// an output shape is the caller's job.
#[async_trait]
pub trait InferenceProvider: Send + Sync + std::fmt::Debug {
    fn name(&self) -> &str;

    async fn generate(&self, request: &InferenceRequest) -> Result<String, InferenceError>;
}

/// Placeholder used when no API key is configured; every call fails
#[derive(Debug, Default, Clone)]
pub struct UnconfiguredProvider;

#[async_trait]
impl InferenceProvider for UnconfiguredProvider {
    fn name(&self) -> &str {
        "unconfigured"
    }

    async fn generate(&self, request: &InferenceRequest) -> Result<String, InferenceError> {
        Err(InferenceError::NotConfigured(format!(
            "no API key set, cannot run {}",
            request.operation
        )))
    }
}
