//! AI flows backed by an external language model
//!
//! - [`InferenceProvider`] - opaque request/response boundary to the model
//! - [`GeminiClient`] - Google Gemini `generateContent` implementation
//! - [`PromptTemplate`] - placeholder substitution incl. inline images
//! - [`RetryPolicy`] - bounded retry on the transient 503 signal
//! - [`FlowRunner`] - verification, vehicle counting and assistant flows

mod error;
mod flows;
mod gemini;
#[cfg(any(test, feature = "test-util"))]
mod mock;
mod prompt;
mod provider;
mod retry;

pub use error::{FlowError, InferenceError};
pub use flows::{BOOKING_ASSISTANT, COUNT_VEHICLES, FlowDefinition, FlowRunner, VERIFY_IDENTITY};
pub use gemini::{DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL, GeminiClient, GeminiConfig};
#[cfg(any(test, feature = "test-util"))]
pub use mock::ScriptedProvider;
pub use prompt::PromptTemplate;
pub use provider::{InferenceProvider, InferenceRequest, PromptPart, UnconfiguredProvider};
pub use retry::RetryPolicy;
