//! Summarization backends.
//!
//! The pipeline never talks to a model directly; it is handed a
//! [`Summarizer`] chosen by configuration:
//! - [`RemoteSummarizer`]: an OpenAI-compatible chat-completions API (Groq by default)
//! - [`LocalSummarizer`]: a model server on this machine (Ollama-compatible)

pub mod chunk;
pub mod local;
pub mod remote;

use std::sync::Arc;

use thiserror::Error;

use crate::config::{SummarizerBackend, SummarizerConfig};
use crate::error::PipelineError;

pub use local::LocalSummarizer;
pub use remote::RemoteSummarizer;

/// Why a summarization attempt failed.
#[derive(Debug, Error)]
pub enum SummarizeError {
    #[error("No text to summarize.")]
    EmptyText,

    #[error("API key missing: set the {0} environment variable")]
    MissingApiKey(String),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{backend} API error ({status}): {body}")]
    Api {
        backend: String,
        status: u16,
        body: String,
    },

    #[error("{0} returned an empty summary")]
    EmptyResponse(String),
}

/// Anything that can turn long text into shorter text.
///
/// Implementations may block for a long time; callers that must stay
/// responsive run them on a worker thread.
pub trait Summarizer: Send + Sync {
    /// Short backend name for logs and status lines.
    fn name(&self) -> &str;

    fn summarize(&self, text: &str) -> Result<String, SummarizeError>;
}

/// Build the configured backend, or `None` when summarization is disabled.
pub fn from_config(config: &SummarizerConfig) -> Result<Option<Arc<dyn Summarizer>>, SummarizeError> {
    let summarizer: Arc<dyn Summarizer> = match config.backend {
        SummarizerBackend::None => return Ok(None),
        SummarizerBackend::Remote => Arc::new(RemoteSummarizer::from_config(&config.remote)?),
        SummarizerBackend::Local => Arc::new(LocalSummarizer::from_config(
            &config.local,
            config.max_words_per_chunk,
        )?),
    };
    log::info!("Using {} summarizer", summarizer.name());
    Ok(Some(summarizer))
}

/// Run a summarizer, turning any failure into a displayable pipeline error.
pub fn summarize_or_report(summarizer: &dyn Summarizer, text: &str) -> Result<String, PipelineError> {
    summarizer.summarize(text).map_err(|e| {
        log::warn!("{} summarizer failed: {e}", summarizer.name());
        PipelineError::SummarizationFailed(format!("Error: {e}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Failing;

    impl Summarizer for Failing {
        fn name(&self) -> &str {
            "failing"
        }

        fn summarize(&self, _text: &str) -> Result<String, SummarizeError> {
            Err(SummarizeError::EmptyResponse("failing".to_string()))
        }
    }

    #[test]
    fn test_failure_becomes_message() {
        let err = summarize_or_report(&Failing, "text").unwrap_err();
        assert_eq!(
            err,
            PipelineError::SummarizationFailed("Error: failing returned an empty summary".to_string())
        );
    }

    #[test]
    fn test_disabled_backend_builds_nothing() {
        let config = SummarizerConfig::default();
        assert_eq!(config.backend, SummarizerBackend::None);
        assert!(from_config(&config).unwrap().is_none());
    }

    #[test]
    fn test_local_backend_builds() {
        let config = SummarizerConfig {
            backend: SummarizerBackend::Local,
            ..SummarizerConfig::default()
        };
        let summarizer = from_config(&config).unwrap().unwrap();
        assert_eq!(summarizer.name(), "local");
    }
}
