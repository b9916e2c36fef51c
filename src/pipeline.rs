//! The extraction-and-visualization pipeline.
//!
//! ```text
//!   text ─▶ tokenize ─▶ classify ─┬─ numeric non-empty ─▶ chart::render ─▶ Chart
//!                                 ├─ descriptive only  ───────────────────▶ Descriptive
//!                                 └─ nothing           ───────────────────▶ Empty
//! ```
//!
//! Each run is stateless: same text and kind, same outcome.

use serde::Serialize;

use crate::chart::{self, ChartKind, ChartOptions, ChartRequest, RenderResult};
use crate::config::Config;
use crate::data::classify::{NumeralRule, classify};
use crate::data::model::{ClassifiedObservations, DescriptiveObservation, NumericObservation};
use crate::data::tokenizer::tokenize;
use crate::error::PipelineError;
use crate::summarize::{Summarizer, summarize_or_report};

/// Message shown when the descriptive branch is taken.
pub const DESCRIPTIVE_NOTE: &str =
    "This non-numeric data includes descriptive or categorical information from the document.";

/// Everything a pipeline run is parameterized by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineOptions {
    pub numeral_rule: NumeralRule,
    pub chart: ChartOptions,
}

/// What the rendering side should show for one run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum PipelineOutcome {
    /// At least one numeric observation; the render may still have failed
    /// its precondition (see `render.succeeded`).
    Chart {
        numeric: Vec<NumericObservation>,
        descriptive: Vec<DescriptiveObservation>,
        render: RenderResult,
    },
    /// Only non-numeric observations, listed verbatim.
    Descriptive { observations: Vec<DescriptiveObservation> },
    /// No `key: value` lines at all.
    Empty,
    /// The summarizer failed before extraction could start.
    SummarizationFailed { message: String },
}

impl PipelineOutcome {
    /// One-line, user-facing status for this outcome.
    pub fn describe(&self) -> String {
        match self {
            PipelineOutcome::Chart { render, .. } => match (&render.reason, render.succeeded) {
                (Some(reason), false) => capitalize(reason),
                _ => format!("{} rendered from {} value(s)", render.kind, render.series.len()),
            },
            PipelineOutcome::Descriptive { .. } => DESCRIPTIVE_NOTE.to_string(),
            PipelineOutcome::Empty => capitalize(&PipelineError::EmptyInput.to_string()),
            PipelineOutcome::SummarizationFailed { message } => message.clone(),
        }
    }

    /// The failure behind this outcome, if any.
    pub fn error(&self) -> Option<PipelineError> {
        match self {
            PipelineOutcome::Chart { render, .. } if !render.succeeded => {
                Some(PipelineError::precondition(
                    render.kind,
                    render.reason.clone().unwrap_or_default(),
                ))
            }
            PipelineOutcome::Chart { .. } | PipelineOutcome::Descriptive { .. } => None,
            PipelineOutcome::Empty => Some(PipelineError::EmptyInput),
            PipelineOutcome::SummarizationFailed { message } => {
                Some(PipelineError::SummarizationFailed(message.clone()))
            }
        }
    }

    /// Observations behind this outcome (empty for `Empty` / failures).
    pub fn observations(&self) -> (&[NumericObservation], &[DescriptiveObservation]) {
        match self {
            PipelineOutcome::Chart {
                numeric,
                descriptive,
                ..
            } => (numeric.as_slice(), descriptive.as_slice()),
            PipelineOutcome::Descriptive { observations } => (&[][..], observations.as_slice()),
            PipelineOutcome::Empty | PipelineOutcome::SummarizationFailed { .. } => (&[][..], &[][..]),
        }
    }
}

/// Summary text (when one was produced) plus the outcome of extracting from it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummarizedRun {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(flatten)]
    pub outcome: PipelineOutcome,
}

/// Stateless pipeline runner.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    options: PipelineOptions,
}

impl Pipeline {
    pub fn new(options: PipelineOptions) -> Self {
        Self { options }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(PipelineOptions {
            numeral_rule: config.extraction.numeral_rule,
            chart: config.chart.options(),
        })
    }

    pub fn options(&self) -> &PipelineOptions {
        &self.options
    }

    /// Tokenize and classify without rendering.
    pub fn extract(&self, text: &str) -> ClassifiedObservations {
        classify(&tokenize(text), self.options.numeral_rule)
    }

    /// Run the whole pipeline over already-resolved text.
    pub fn run(&self, text: &str, kind: ChartKind) -> PipelineOutcome {
        let ClassifiedObservations {
            numeric,
            descriptive,
        } = self.extract(text);

        if !numeric.is_empty() {
            let request = ChartRequest::new(kind, numeric);
            let render = chart::render(&request, &self.options.chart);
            log::info!(
                "{kind}: {} numeric / {} descriptive, succeeded={}",
                request.series.len(),
                descriptive.len(),
                render.succeeded
            );
            PipelineOutcome::Chart {
                numeric: request.series,
                descriptive,
                render,
            }
        } else if !descriptive.is_empty() {
            log::info!("no numeric data; {} descriptive observation(s)", descriptive.len());
            PipelineOutcome::Descriptive {
                observations: descriptive,
            }
        } else {
            log::info!("no key: value lines found");
            PipelineOutcome::Empty
        }
    }

    /// Summarize first, then run the pipeline over the summary.
    ///
    /// A summarizer failure is reported in the outcome, never propagated.
    pub fn run_summarized(&self, summarizer: &dyn Summarizer, text: &str, kind: ChartKind) -> SummarizedRun {
        match summarize_or_report(summarizer, text) {
            Ok(summary) => {
                let outcome = self.run(&summary, kind);
                SummarizedRun {
                    summary: Some(summary),
                    outcome,
                }
            }
            Err(err) => SummarizedRun {
                summary: None,
                outcome: PipelineOutcome::SummarizationFailed {
                    message: err.to_string(),
                },
            },
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summarize::SummarizeError;

    struct Echo;

    impl Summarizer for Echo {
        fn name(&self) -> &str {
            "echo"
        }

        fn summarize(&self, text: &str) -> Result<String, SummarizeError> {
            Ok(format!("Summary: {}\nScore: 42", text.len()))
        }
    }

    struct Down;

    impl Summarizer for Down {
        fn name(&self) -> &str {
            "down"
        }

        fn summarize(&self, _text: &str) -> Result<String, SummarizeError> {
            Err(SummarizeError::Api {
                backend: "down".to_string(),
                status: 503,
                body: "unavailable".to_string(),
            })
        }
    }

    #[test]
    fn test_numeric_branch() {
        let outcome = Pipeline::default().run("A: 1\nB: 2\nNote: fine", ChartKind::Bar);
        match &outcome {
            PipelineOutcome::Chart {
                numeric,
                descriptive,
                render,
            } => {
                assert_eq!(numeric.len(), 2);
                assert_eq!(descriptive.len(), 1);
                assert!(render.succeeded);
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert!(outcome.error().is_none());
    }

    #[test]
    fn test_descriptive_branch() {
        let outcome = Pipeline::default().run("Status: green\nOwner: ops", ChartKind::Pie);
        assert_eq!(
            outcome,
            PipelineOutcome::Descriptive {
                observations: vec![
                    DescriptiveObservation {
                        key: "Status".to_string(),
                        value: "green".to_string(),
                    },
                    DescriptiveObservation {
                        key: "Owner".to_string(),
                        value: "ops".to_string(),
                    },
                ],
            }
        );
        assert_eq!(outcome.describe(), DESCRIPTIVE_NOTE);
    }

    #[test]
    fn test_empty_branch() {
        let outcome = Pipeline::default().run("hello world", ChartKind::Line);
        assert_eq!(outcome, PipelineOutcome::Empty);
        assert_eq!(outcome.describe(), "No data found");
        assert_eq!(outcome.error(), Some(PipelineError::EmptyInput));
    }

    #[test]
    fn test_precondition_reported_not_raised() {
        let outcome = Pipeline::default().run("A: 1", ChartKind::Line);
        assert_eq!(
            outcome.describe(),
            "Not enough data for a line plot (at least 2 categories required)"
        );
        assert!(matches!(
            outcome.error(),
            Some(PipelineError::PreconditionFailed { kind: ChartKind::Line, .. })
        ));
    }

    #[test]
    fn test_run_summarized_uses_summary() {
        let run = Pipeline::default().run_summarized(&Echo, "some long text", ChartKind::Bar);
        assert_eq!(run.summary.as_deref(), Some("Summary: 14\nScore: 42"));
        let (numeric, _) = run.outcome.observations();
        assert_eq!(
            numeric,
            &[
                NumericObservation::new("Summary", 14.0),
                NumericObservation::new("Score", 42.0),
            ]
        );
    }

    #[test]
    fn test_summarizer_failure_is_an_outcome() {
        let run = Pipeline::default().run_summarized(&Down, "text", ChartKind::Bar);
        assert!(run.summary.is_none());
        assert_eq!(
            run.outcome,
            PipelineOutcome::SummarizationFailed {
                message: "Error: down API error (503): unavailable".to_string(),
            }
        );
    }

    #[test]
    fn test_outcome_json_is_tagged() {
        let json = serde_json::to_value(Pipeline::default().run("", ChartKind::Bar)).unwrap();
        assert_eq!(json["outcome"], "empty");

        let json = serde_json::to_value(Pipeline::default().run("A: 1", ChartKind::Bar)).unwrap();
        assert_eq!(json["outcome"], "chart");
        assert_eq!(json["render"]["kind"], "bar");
        assert_eq!(json["render"]["series"][0]["key"], "A");
    }
}
