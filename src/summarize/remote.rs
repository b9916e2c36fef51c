//! OpenAI-compatible chat-completions summarizer.
//!
//! Works with any provider exposing `/v1/chat/completions` (Groq, OpenAI, ...).

use std::time::Duration;

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use super::{SummarizeError, Summarizer};
use crate::config::RemoteConfig;

/// Remote chat-completions backend.
pub struct RemoteSummarizer {
    client: Client,
    endpoint: String,
    api_key: String,
    model: String,
    temperature: f32,
}

impl RemoteSummarizer {
    pub fn new(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
        temperature: f32,
        timeout: Duration,
    ) -> Result<Self, SummarizeError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            model: model.into(),
            temperature,
        })
    }

    /// Build from config, reading the API key from `api_key_env`.
    pub fn from_config(config: &RemoteConfig) -> Result<Self, SummarizeError> {
        let api_key = std::env::var(&config.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| SummarizeError::MissingApiKey(config.api_key_env.clone()))?;
        Self::new(
            config.endpoint.clone(),
            api_key,
            config.model.clone(),
            config.temperature,
            Duration::from_secs(config.timeout_secs),
        )
    }
}

impl Summarizer for RemoteSummarizer {
    fn name(&self) -> &str {
        "remote"
    }

    fn summarize(&self, text: &str) -> Result<String, SummarizeError> {
        if text.trim().is_empty() {
            return Err(SummarizeError::EmptyText);
        }

        let request = ChatRequest {
            model: &self.model,
            messages: vec![ApiMessage {
                role: "user",
                content: summary_prompt(text),
            }],
            temperature: self.temperature,
        };

        log::debug!("POST {} ({} chars, model {})", self.endpoint, text.len(), self.model);
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(SummarizeError::Api {
                backend: self.name().to_string(),
                status: status.as_u16(),
                body,
            });
        }

        let chat: ChatResponse = response.json()?;
        chat.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content.trim().to_string())
            .filter(|content| !content.is_empty())
            .ok_or_else(|| SummarizeError::EmptyResponse(self.name().to_string()))
    }
}

pub(crate) fn summary_prompt(text: &str) -> String {
    format!("Summarize the following text: {text}")
}

// -----------------------------------------------------------------------------
// Chat-completions DTOs
// -----------------------------------------------------------------------------

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ApiMessage>,
    temperature: f32,
}

#[derive(Serialize)]
struct ApiMessage {
    role: &'static str,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ApiResponseMessage,
}

#[derive(Deserialize)]
struct ApiResponseMessage {
    #[serde(default)]
    content: String,
}
