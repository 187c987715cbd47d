//! Google Gemini `generateContent` client

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::error::InferenceError;
use super::provider::{InferenceProvider, InferenceRequest, PromptPart};

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    /// Per-call HTTP timeout
    pub timeout: Duration,
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            model: DEFAULT_GEMINI_MODEL.to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

// ========== Wire types ==========

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum Part<'a> {
    Text {
        text: &'a str,
    },
    #[serde(rename_all = "camelCase")]
    InlineData {
        inline_data: InlineData<'a>,
    },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InlineData<'a> {
    mime_type: &'a str,
    data: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

/// Gemini REST client over a shared `reqwest::Client`
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self, InferenceError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| InferenceError::Transport(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }
}

fn to_wire(parts: &[PromptPart]) -> Vec<Part<'_>> {
    parts
        .iter()
        .map(|p| match p {
            PromptPart::Text(text) => Part::Text {
                text: text.as_str(),
            },
            PromptPart::Media { mime_type, data } => Part::InlineData {
                inline_data: InlineData {
                    mime_type: mime_type.as_str(),
                    data: data.as_str(),
                },
            },
        })
        .collect()
}

#[async_trait]
impl InferenceProvider for GeminiClient {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn generate(&self, request: &InferenceRequest) -> Result<String, InferenceError> {
        let body = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: to_wire(&request.parts),
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
            },
        };

        tracing::debug!(
            operation = %request.operation,
            model = %self.config.model,
            "Calling Gemini generateContent"
        );

        let resp = self
            .http
            .post(self.endpoint())
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| InferenceError::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(InferenceError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateContentResponse = resp
            .json()
            .await
            .map_err(|e| InferenceError::MalformedResponse(e.to_string()))?;

        let text: String = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(InferenceError::MalformedResponse(
                "response has no candidate text".into(),
            ));
        }
        Ok(text)
    }
}
