//! OpenAI-backed implementation of the suggestion generator boundary.
//!
//! Uses the blocking chat-completions endpoint; callers run it through
//! `spawn_blocking`. When `OPENAI_API_KEY` is absent the CLI degrades to
//! plan-only output instead of failing.

use std::time::Duration;

use rally_core::{error::CoordinatorError, generator::SuggestionGenerator};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

const DEFAULT_MODEL: &str = "gpt-4o-mini";
const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Suggestion generator backed by the OpenAI chat-completions API.
pub struct OpenAiGenerator {
    http: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl OpenAiGenerator {
    /// Builds a generator from the environment.
    ///
    /// Returns `None` when `OPENAI_API_KEY` is unset or the HTTP client
    /// cannot be constructed. `RALLY_OPENAI_MODEL` and
    /// `RALLY_OPENAI_BASE_URL` override the defaults.
    pub fn from_env() -> Option<Self> {
        let api_key = std::env::var("OPENAI_API_KEY").ok()?;
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build().ok()?;
        Some(Self {
            http,
            api_key,
            model: std::env::var("RALLY_OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.into()),
            base_url: std::env::var("RALLY_OPENAI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.into()),
        })
    }
}

impl SuggestionGenerator for OpenAiGenerator {
    fn complete(&self, prompt: &str) -> rally_core::Result<String> {
        let payload = ChatCompletionRequest {
            model: &self.model,
            messages: vec![ChatMessage { role: "user", content: prompt }],
            max_tokens: Some(1500),
        };

        let response = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .map_err(|e| CoordinatorError::generator(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            if let Ok(body) = response.json::<OpenAiErrorResponse>() {
                return Err(CoordinatorError::generator(format!(
                    "{} (type: {})",
                    body.error.message, body.error.error_type
                )));
            }
            return Err(CoordinatorError::generator(format!(
                "HTTP {status} from OpenAI"
            )));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .map_err(|e| CoordinatorError::generator(e.to_string()))?;

        completion
            .choices
            .into_iter()
            .find_map(|choice| choice.message.content)
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
            .ok_or_else(|| CoordinatorError::generator("OpenAI returned an empty completion"))
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAiErrorResponse {
    error: OpenAiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct OpenAiErrorDetail {
    message: String,
    #[serde(rename = "type")]
    error_type: String,
}
