use std::path::Path;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, TryRecvError};

use docviz::chart::ChartKind;
use docviz::data::export::write_observations_csv;
use docviz::data::loader::load_document;
use docviz::pipeline::{Pipeline, PipelineOutcome};
use docviz::summarize::{self, Summarizer, summarize_or_report};
use docviz::{Config, PipelineError};

use crate::color::ColorMap;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Which of the two workflows the window shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Extract figures from a document and chart them.
    Visualize,
    /// Only summarize the typed text.
    Summarize,
}

/// What a finished background summary is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum JobPurpose {
    /// Feed the summary into the pipeline.
    Visualize,
    /// Just show it.
    Display,
}

struct SummaryJob {
    purpose: JobPurpose,
    result: Result<String, PipelineError>,
}

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: Config,
    pipeline: Pipeline,
    summarizer: Option<Arc<dyn Summarizer>>,

    pub mode: Mode,

    /// Name of the loaded file, if the text came from one.
    pub document_name: Option<String>,

    /// Text to visualize or summarize (loaded or typed).
    pub input_text: String,

    /// Run the summarizer before extraction.
    pub summarize_first: bool,

    pub chart_kind: ChartKind,

    /// Latest summary produced by the summarizer.
    pub summary: Option<String>,

    /// Text the current outcome was extracted from (input or summary).
    extracted_from: Option<String>,

    /// Result of the latest pipeline run.
    pub outcome: Option<PipelineOutcome>,

    /// Colours of the plotted categories (rebuilt with each outcome).
    pub color_map: ColorMap,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Whether a summarization is in progress.
    pub loading: bool,

    pending: Option<Receiver<SummaryJob>>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let pipeline = Pipeline::from_config(&config);
        let (summarizer, status_message) = match summarize::from_config(&config.summarizer) {
            Ok(s) => (s, None),
            Err(e) => {
                log::warn!("Summarizer unavailable: {e}");
                (None, Some(format!("Summarizer unavailable: {e}")))
            }
        };

        Self {
            chart_kind: config.chart.default_kind,
            summarize_first: summarizer.is_some(),
            config,
            pipeline,
            summarizer,
            mode: Mode::Visualize,
            document_name: None,
            input_text: String::new(),
            summary: None,
            extracted_from: None,
            outcome: None,
            color_map: ColorMap::default(),
            status_message,
            loading: false,
            pending: None,
        }
    }

    pub fn has_summarizer(&self) -> bool {
        self.summarizer.is_some()
    }

    /// Load a PDF / text file and visualize it.
    pub fn load_file(&mut self, path: &Path) {
        match load_document(path, self.config.input.max_upload_bytes) {
            Ok(doc) => {
                self.document_name = Some(doc.name);
                self.input_text = doc.text;
                self.status_message = None;
                self.visualize();
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }

    /// Run the pipeline on the current input, summarizing first if enabled.
    pub fn visualize(&mut self) {
        if self.input_text.trim().is_empty() {
            self.status_message = Some("Please enter some text or open a file.".to_string());
            return;
        }
        if self.summarize_first {
            if self.has_summarizer() {
                self.start_summary(JobPurpose::Visualize);
                return;
            }
            self.status_message = Some(
                "Summarization is disabled; set [summarizer] backend in the config file.".to_string(),
            );
        }
        self.summary = None;
        let text = self.input_text.clone();
        self.extract_and_render(text);
    }

    /// Summarize the input without visualizing it.
    pub fn summarize_only(&mut self) {
        if self.input_text.trim().is_empty() {
            self.status_message = Some("Please enter some text to summarize.".to_string());
            return;
        }
        if !self.has_summarizer() {
            self.status_message = Some(
                "Summarization is disabled; set [summarizer] backend in the config file.".to_string(),
            );
            return;
        }
        self.start_summary(JobPurpose::Display);
    }

    /// Change the chart kind and re-render from the same extracted text.
    pub fn set_chart_kind(&mut self, kind: ChartKind) {
        if self.chart_kind == kind {
            return;
        }
        self.chart_kind = kind;
        if let Some(text) = self.extracted_from.clone() {
            self.extract_and_render(text);
        }
    }

    /// Collect a finished background summary, if any. Called once per frame.
    pub fn poll_summary(&mut self) {
        let Some(rx) = &self.pending else {
            return;
        };
        let job = match rx.try_recv() {
            Ok(job) => job,
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Disconnected) => {
                self.pending = None;
                self.loading = false;
                self.status_message = Some("Error: summarizer stopped unexpectedly".to_string());
                return;
            }
        };
        self.pending = None;
        self.loading = false;

        match (job.purpose, job.result) {
            (JobPurpose::Visualize, Ok(summary)) => {
                self.summary = Some(summary.clone());
                self.extract_and_render(summary);
            }
            (JobPurpose::Visualize, Err(err)) => {
                self.summary = None;
                self.extracted_from = None;
                self.set_outcome(PipelineOutcome::SummarizationFailed {
                    message: err.to_string(),
                });
            }
            (JobPurpose::Display, Ok(summary)) => {
                self.summary = Some(summary);
                self.status_message = None;
            }
            (JobPurpose::Display, Err(err)) => {
                self.status_message = Some(err.to_string());
            }
        }
    }

    /// Name of the configured summarization backend.
    pub fn backend_name(&self) -> &'static str {
        self.config.summarizer.backend.name()
    }

    /// Persist the current chart kind as the default in the config file.
    pub fn save_settings(&mut self) {
        self.config.chart.default_kind = self.chart_kind;
        match self.config.save() {
            Ok(()) => {
                log::info!("Saved settings");
                self.status_message = None;
            }
            Err(e) => {
                log::error!("Failed to save settings: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }

    /// Export the current observations as CSV.
    pub fn export_csv(&mut self, path: &Path) {
        let Some(outcome) = &self.outcome else {
            self.status_message = Some("Nothing to export yet.".to_string());
            return;
        };
        let (numeric, descriptive) = outcome.observations();
        if let Err(e) = write_observations_csv(path, numeric, descriptive) {
            log::error!("Export failed: {e:#}");
            self.status_message = Some(format!("Error: {e:#}"));
        }
    }

    fn start_summary(&mut self, purpose: JobPurpose) {
        let Some(summarizer) = self.summarizer.clone() else {
            return;
        };
        let text = self.input_text.clone();
        let (tx, rx) = mpsc::channel();

        std::thread::spawn(move || {
            let result = summarize_or_report(summarizer.as_ref(), &text);
            // The receiver is gone if the window closed; nothing left to do.
            let _ = tx.send(SummaryJob { purpose, result });
        });

        self.pending = Some(rx);
        self.loading = true;
        self.status_message = None;
    }

    fn extract_and_render(&mut self, text: String) {
        let outcome = self.pipeline.run(&text, self.chart_kind);
        self.extracted_from = Some(text);
        self.set_outcome(outcome);
    }

    fn set_outcome(&mut self, outcome: PipelineOutcome) {
        self.color_map = match &outcome {
            PipelineOutcome::Chart { render, .. } => ColorMap::new(&render.series),
            _ => ColorMap::default(),
        };
        self.outcome = Some(outcome);
    }
}
