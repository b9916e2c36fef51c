//! docviz: pull `key: value` figures out of document text and chart them.
//!
//! The library is the whole extraction-and-visualization core; the desktop
//! app and the `docviz-report` CLI are thin shells around [`Pipeline`].

pub mod chart;
pub mod config;
pub mod data;
pub mod error;
pub mod pipeline;
pub mod summarize;

pub use chart::{ChartKind, ChartOptions, ChartRequest, RenderResult};
pub use config::Config;
pub use data::model::{DescriptiveObservation, NumericObservation, Observation, ObservationSet};
pub use error::PipelineError;
pub use pipeline::{Pipeline, PipelineOptions, PipelineOutcome, SummarizedRun};
pub use summarize::{SummarizeError, Summarizer};
