use serde::Serialize;

use super::histogram::{HistogramBin, histogram};
use super::{ChartKind, ChartOptions, ChartRequest};
use crate::data::model::NumericObservation;
use crate::error::PipelineError;

pub const NO_BAR_DATA: &str = "no valid data found for visualization";
pub const PIE_TOO_FEW: &str = "not enough data for a pie chart (at least 2 categories required)";
pub const LINE_TOO_FEW: &str = "not enough data for a line plot (at least 2 categories required)";
pub const NO_HISTOGRAM_DATA: &str = "no valid data for a histogram";

/// A series that passed its chart's preconditions.
///
/// The series keeps tokenizer order; it is filtered per kind but never sorted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotSeries {
    pub kind: ChartKind,
    pub series: Vec<NumericObservation>,
    /// Populated for histograms only.
    pub bins: Vec<HistogramBin>,
}

/// Validate a [`ChartRequest`] and produce the series to plot.
///
/// | kind      | kept entries         | rule              |
/// |-----------|----------------------|-------------------|
/// | Bar       | all                  | at least 1        |
/// | Pie       | value > 0            | at least 2 (after filtering) |
/// | Line      | all                  | at least 2        |
/// | Histogram | finite values        | at least 1        |
pub fn select(request: &ChartRequest, options: &ChartOptions) -> Result<PlotSeries, PipelineError> {
    let kind = request.kind;
    let plot = |series: Vec<NumericObservation>| PlotSeries {
        kind,
        series,
        bins: Vec::new(),
    };

    match kind {
        ChartKind::Bar => {
            if request.series.is_empty() {
                return Err(PipelineError::precondition(kind, NO_BAR_DATA));
            }
            Ok(plot(request.series.clone()))
        }
        ChartKind::Pie => {
            let slices: Vec<NumericObservation> = request
                .series
                .iter()
                .filter(|obs| obs.value > 0.0)
                .cloned()
                .collect();
            if slices.len() < 2 {
                return Err(PipelineError::precondition(kind, PIE_TOO_FEW));
            }
            Ok(plot(slices))
        }
        ChartKind::Line => {
            if request.series.len() < 2 {
                return Err(PipelineError::precondition(kind, LINE_TOO_FEW));
            }
            Ok(plot(request.series.clone()))
        }
        ChartKind::Histogram => {
            let finite: Vec<NumericObservation> = request
                .series
                .iter()
                .filter(|obs| obs.value.is_finite())
                .cloned()
                .collect();
            if finite.is_empty() {
                return Err(PipelineError::precondition(kind, NO_HISTOGRAM_DATA));
            }
            let values: Vec<f64> = finite.iter().map(|obs| obs.value).collect();
            let bins = histogram(&values, options.histogram_bins);
            Ok(PlotSeries {
                kind,
                series: finite,
                bins,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(values: &[(&str, f64)]) -> Vec<NumericObservation> {
        values
            .iter()
            .map(|&(k, v)| NumericObservation::new(k, v))
            .collect()
    }

    fn run(kind: ChartKind, values: &[(&str, f64)]) -> Result<PlotSeries, PipelineError> {
        select(&ChartRequest::new(kind, series(values)), &ChartOptions::default())
    }

    #[test]
    fn test_bar_requires_data() {
        assert_eq!(
            run(ChartKind::Bar, &[]),
            Err(PipelineError::precondition(ChartKind::Bar, NO_BAR_DATA))
        );
        let ok = run(ChartKind::Bar, &[("A", -1.0)]).unwrap();
        assert_eq!(ok.series, series(&[("A", -1.0)]));
    }

    #[test]
    fn test_pie_single_positive_fails() {
        let err = run(ChartKind::Pie, &[("A", 5.0), ("B", -2.0)]).unwrap_err();
        match err {
            PipelineError::PreconditionFailed { kind, reason } => {
                assert_eq!(kind, ChartKind::Pie);
                assert!(reason.contains("at least 2 categories required"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_pie_filters_before_counting() {
        let ok = run(ChartKind::Pie, &[("C", 3.0), ("Zero", 0.0), ("A", 1.0)]).unwrap();
        assert_eq!(ok.series, series(&[("C", 3.0), ("A", 1.0)]));
    }

    #[test]
    fn test_line_requires_two_points() {
        assert!(run(ChartKind::Line, &[("A", 1.0)]).is_err());
        let ok = run(ChartKind::Line, &[("B", 2.0), ("A", 1.0)]).unwrap();
        // Never sorted by key or value.
        assert_eq!(ok.series, series(&[("B", 2.0), ("A", 1.0)]));
    }

    #[test]
    fn test_histogram_drops_non_finite() {
        assert_eq!(
            run(ChartKind::Histogram, &[("A", f64::INFINITY)]),
            Err(PipelineError::precondition(ChartKind::Histogram, NO_HISTOGRAM_DATA))
        );
        let ok = run(ChartKind::Histogram, &[("A", f64::INFINITY), ("B", 4.0)]).unwrap();
        assert_eq!(ok.series, series(&[("B", 4.0)]));
        assert_eq!(ok.bins.iter().map(|b| b.count).sum::<usize>(), 1);
    }

    #[test]
    fn test_histogram_identical_values() {
        let ok = run(ChartKind::Histogram, &[("A", 7.0), ("B", 7.0), ("C", 7.0)]).unwrap();
        let populated: Vec<_> = ok.bins.iter().filter(|b| b.count > 0).collect();
        assert_eq!(populated.len(), 1);
        assert_eq!(populated[0].count, 3);
    }

    #[test]
    fn test_only_histogram_has_bins() {
        let ok = run(ChartKind::Bar, &[("A", 1.0), ("B", 2.0)]).unwrap();
        assert!(ok.bins.is_empty());
    }
}
