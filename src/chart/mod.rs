/// Chart layer: turns a numeric series into a validated, explained plot intent.
///
/// ```text
///   ChartRequest { kind, series }
///        │
///        ▼
///   ┌──────────┐   precondition failed
///   │ selector  │ ─────────────────────▶ RenderResult { succeeded: false, reason }
///   └──────────┘
///        │ PlotSeries (filtered, ordered, binned)
///        ▼
///   ┌──────────┐
///   │ explain   │ ─────────────────────▶ RenderResult { succeeded: true, explanation }
///   └──────────┘
/// ```
///
/// Drawing pixels is left to the caller (see `ui::plot` in the desktop app).

pub mod explain;
pub mod histogram;
pub mod selector;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::data::model::NumericObservation;
use crate::error::PipelineError;

pub use histogram::HistogramBin;
pub use selector::{PlotSeries, select};

// ---------------------------------------------------------------------------
// ChartKind
// ---------------------------------------------------------------------------

/// The closed set of chart forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    #[default]
    Bar,
    Pie,
    Line,
    Histogram,
}

impl ChartKind {
    /// Display name used in menus and titles.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Bar => "Bar Plot",
            Self::Pie => "Pie Chart",
            Self::Line => "Line Plot",
            Self::Histogram => "Histogram",
        }
    }

    /// Chart title, e.g. "Pie Chart - Data Proportions".
    pub fn title(&self) -> &'static str {
        match self {
            Self::Bar => "Bar Plot - Data Visualization",
            Self::Pie => "Pie Chart - Data Proportions",
            Self::Line => "Line Plot - Trends Over Categories",
            Self::Histogram => "Histogram - Distribution of Values",
        }
    }

    pub fn all() -> [Self; 4] {
        [Self::Bar, Self::Pie, Self::Line, Self::Histogram]
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ChartKind {
    type Err = PipelineError;

    /// Accepts the short name (`"pie"`) or the label (`"Pie Chart"`),
    /// case-insensitively. Anything else is rejected, never defaulted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "bar" | "bar plot" | "bar chart" => Ok(Self::Bar),
            "pie" | "pie chart" => Ok(Self::Pie),
            "line" | "line plot" | "line chart" => Ok(Self::Line),
            "histogram" | "hist" => Ok(Self::Histogram),
            _ => Err(PipelineError::UnsupportedChartKind(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Request / options / result
// ---------------------------------------------------------------------------

/// One chart to validate and configure.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartRequest {
    pub kind: ChartKind,
    pub series: Vec<NumericObservation>,
}

impl ChartRequest {
    pub fn new(kind: ChartKind, series: Vec<NumericObservation>) -> Self {
        Self { kind, series }
    }
}

/// Tunables for chart configuration and explanations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartOptions {
    /// Number of equal-width histogram bins (values below 1 are treated as 1).
    pub histogram_bins: usize,
    /// How many leading keys or values an explanation quotes.
    pub sample_size: usize,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            histogram_bins: 10,
            sample_size: 5,
        }
    }
}

/// Outcome of one chart render request.
///
/// `reason` is set when a precondition failed; `explanation`, `series` and
/// (for histograms) `bins` are set on success.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderResult {
    pub kind: ChartKind,
    pub succeeded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    /// The ordered series to plot, after any per-kind filtering.
    pub series: Vec<NumericObservation>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub bins: Vec<HistogramBin>,
}

impl RenderResult {
    fn rendered(plot: PlotSeries, explanation: String) -> Self {
        Self {
            kind: plot.kind,
            succeeded: true,
            reason: None,
            explanation: Some(explanation),
            series: plot.series,
            bins: plot.bins,
        }
    }

    fn rejected(kind: ChartKind, reason: String) -> Self {
        Self {
            kind,
            succeeded: false,
            reason: Some(reason),
            explanation: None,
            series: Vec::new(),
            bins: Vec::new(),
        }
    }
}

/// Validate a request and explain the resulting chart.
///
/// Never fails: unmet preconditions come back as an unsuccessful result
/// carrying the user-facing reason.
pub fn render(request: &ChartRequest, options: &ChartOptions) -> RenderResult {
    match select(request, options) {
        Ok(plot) => {
            let text = explain::explain(plot.kind, &plot.series, options.sample_size);
            RenderResult::rendered(plot, text)
        }
        Err(PipelineError::PreconditionFailed { kind, reason }) => {
            log::info!("{kind} not rendered: {reason}");
            RenderResult::rejected(kind, reason)
        }
        Err(other) => RenderResult::rejected(request.kind, other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_chart_kind() {
        assert_eq!("pie".parse::<ChartKind>(), Ok(ChartKind::Pie));
        assert_eq!("Line Plot".parse::<ChartKind>(), Ok(ChartKind::Line));
        assert_eq!(" HISTOGRAM ".parse::<ChartKind>(), Ok(ChartKind::Histogram));
    }

    #[test]
    fn test_unknown_chart_kind_is_rejected() {
        let err = "scatter".parse::<ChartKind>().unwrap_err();
        assert_eq!(err, PipelineError::UnsupportedChartKind("scatter".to_string()));
        assert!(err.to_string().contains("unsupported chart kind"));
    }

    #[test]
    fn test_render_success_has_explanation() {
        let request = ChartRequest::new(
            ChartKind::Bar,
            vec![NumericObservation::new("A", 1.0), NumericObservation::new("B", 2.0)],
        );
        let result = render(&request, &ChartOptions::default());
        assert!(result.succeeded);
        assert!(result.reason.is_none());
        assert!(result.explanation.unwrap().contains("2 categories"));
        assert_eq!(result.series.len(), 2);
    }

    #[test]
    fn test_render_failure_has_reason() {
        let request = ChartRequest::new(ChartKind::Line, vec![NumericObservation::new("A", 1.0)]);
        let result = render(&request, &ChartOptions::default());
        assert!(!result.succeeded);
        assert!(result.explanation.is_none());
        assert_eq!(
            result.reason.as_deref(),
            Some("not enough data for a line plot (at least 2 categories required)")
        );
    }

    #[test]
    fn test_serialized_kind_is_lowercase() {
        let json = serde_json::to_string(&ChartKind::Histogram).unwrap();
        assert_eq!(json, "\"histogram\"");
    }
}
