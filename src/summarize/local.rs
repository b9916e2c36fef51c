//! Local model-server summarizer (Ollama `/api/generate`).
//!
//! Long documents are split into word chunks, each chunk is summarized on its
//! own and the partial summaries are joined.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use super::chunk::split_into_chunks;
use super::remote::summary_prompt;
use super::{SummarizeError, Summarizer};
use crate::config::LocalConfig;

pub struct LocalSummarizer {
    client: Client,
    generate_url: String,
    model: String,
    max_words_per_chunk: usize,
}

impl LocalSummarizer {
    pub fn new(
        base_url: &str,
        model: impl Into<String>,
        max_words_per_chunk: usize,
        timeout: Duration,
    ) -> Result<Self, SummarizeError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            generate_url: format!("{}/api/generate", base_url.trim_end_matches('/')),
            model: model.into(),
            max_words_per_chunk,
        })
    }

    pub fn from_config(config: &LocalConfig, max_words_per_chunk: usize) -> Result<Self, SummarizeError> {
        Self::new(
            &config.endpoint,
            config.model.clone(),
            max_words_per_chunk,
            Duration::from_secs(config.timeout_secs),
        )
    }

    fn summarize_chunk(&self, chunk: &str) -> Result<String, SummarizeError> {
        let request = GenerateRequest {
            model: &self.model,
            prompt: summary_prompt(chunk),
            stream: false,
        };
        let response = self.client.post(&self.generate_url).json(&request).send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(SummarizeError::Api {
                backend: self.name().to_string(),
                status: status.as_u16(),
                body,
            });
        }

        let generated: GenerateResponse = response.json()?;
        Ok(generated.response.trim().to_string())
    }
}

impl Summarizer for LocalSummarizer {
    fn name(&self) -> &str {
        "local"
    }

    fn summarize(&self, text: &str) -> Result<String, SummarizeError> {
        let chunks = split_into_chunks(text, self.max_words_per_chunk);
        if chunks.is_empty() {
            return Err(SummarizeError::EmptyText);
        }

        log::info!("Summarizing {} chunk(s) with {}", chunks.len(), self.model);
        let mut parts = Vec::with_capacity(chunks.len());
        for (i, chunk) in chunks.iter().enumerate() {
            let part = self.summarize_chunk(chunk)?;
            log::debug!("chunk {}/{}: {} chars", i + 1, chunks.len(), part.len());
            if !part.is_empty() {
                parts.push(part);
            }
        }

        if parts.is_empty() {
            return Err(SummarizeError::EmptyResponse(self.name().to_string()));
        }
        Ok(parts.join(" "))
    }
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: String,
    stream: bool,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
}
