use thiserror::Error;

use crate::chart::ChartKind;

/// Conditions the pipeline reports back to its caller.
///
/// Only [`PipelineError::UnsupportedChartKind`] is a programming error; every
/// other variant is an ordinary outcome that ends up as a user-facing message.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PipelineError {
    /// No colon-bearing lines were found at all.
    #[error("no data found")]
    EmptyInput,

    /// A chart-specific minimum-data rule was not met.
    #[error("{reason}")]
    PreconditionFailed { kind: ChartKind, reason: String },

    /// The summarization collaborator failed; the message is displayable.
    #[error("{0}")]
    SummarizationFailed(String),

    /// The requested chart kind is outside the closed set.
    #[error("unsupported chart kind: {0:?}")]
    UnsupportedChartKind(String),
}

impl PipelineError {
    pub fn precondition(kind: ChartKind, reason: impl Into<String>) -> Self {
        PipelineError::PreconditionFailed {
            kind,
            reason: reason.into(),
        }
    }
}
