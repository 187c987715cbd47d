//! Scripted provider for tests (`test-util` feature)

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use super::error::InferenceError;
use super::provider::{InferenceProvider, InferenceRequest};

/// Replays a fixed sequence of responses, one per call
///
/// Clones share the same script and call log.
#[derive(Debug, Clone, Default)]
pub struct ScriptedProvider {
    script: Arc<Mutex<VecDeque<Result<String, InferenceError>>>>,
    requests: Arc<Mutex<Vec<InferenceRequest>>>,
    calls: Arc<AtomicU32>,
}

impl ScriptedProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful model reply
    pub fn reply(self, text: impl Into<String>) -> Self {
        self.script.lock().push_back(Ok(text.into()));
        self
    }

    /// Queue a failed call
    pub fn fail(self, err: InferenceError) -> Self {
        self.script.lock().push_back(Err(err));
        self
    }

    /// Queue a 503 from the provider
    pub fn unavailable(self) -> Self {
        self.fail(InferenceError::Status {
            status: 503,
            message: "Service Unavailable".into(),
        })
    }

    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<InferenceRequest> {
        self.requests.lock().clone()
    }
}

#[async_trait]
impl InferenceProvider for ScriptedProvider {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn generate(&self, request: &InferenceRequest) -> Result<String, InferenceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().push(request.clone());
        self.script.lock().pop_front().unwrap_or_else(|| {
            Err(InferenceError::MalformedResponse(
                "scripted provider has no more replies".into(),
            ))
        })
    }
}
