use std::f64::consts::{FRAC_PI_2, TAU};
use std::ops::RangeInclusive;

use eframe::egui::{Color32, RichText, ScrollArea, Stroke, Ui};
use egui_extras::{Column, TableBuilder};
use egui_plot::{
    Bar, BarChart, GridMark, Legend, Line, Plot, PlotPoint, PlotPoints, Points, Polygon, Text,
};

use docviz::chart::explain::format_value;
use docviz::chart::{ChartKind, HistogramBin, RenderResult};
use docviz::pipeline::{DESCRIPTIVE_NOTE, PipelineOutcome};
use docviz::NumericObservation;

use crate::color::ColorMap;
use crate::state::{AppState, Mode};

/// Rows shown in the "data used" table under a chart.
const TABLE_ROWS: usize = 5;

/// Largest arc drawn as one polygon; keeps every pie piece convex.
const MAX_PIECE_ANGLE: f64 = FRAC_PI_2 / 2.0;

// ---------------------------------------------------------------------------
// Central panel
// ---------------------------------------------------------------------------

/// Render the central panel for the current mode.
pub fn central_view(ui: &mut Ui, state: &AppState) {
    match state.mode {
        Mode::Visualize => visualization_view(ui, state),
        Mode::Summarize => summary_view(ui, state),
    }
}

fn summary_view(ui: &mut Ui, state: &AppState) {
    match &state.summary {
        Some(summary) => {
            ui.heading("Summarized Text");
            ScrollArea::vertical().show(ui, |ui: &mut Ui| {
                ui.label(summary);
            });
        }
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Enter text on the left and press \"Summarize Text\"");
            });
        }
    }
}

fn visualization_view(ui: &mut Ui, state: &AppState) {
    let Some(outcome) = &state.outcome else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a PDF or enter text to visualize  (File → Open…)");
        });
        return;
    };

    match outcome {
        PipelineOutcome::Chart { render, .. } if render.succeeded => {
            chart_view(ui, render, &state.color_map);
        }
        PipelineOutcome::Chart { render, .. } => {
            ui.heading(render.kind.title());
            ui.label(RichText::new(outcome.describe()).color(Color32::RED));
        }
        PipelineOutcome::Descriptive { observations } => {
            ui.heading("Extracted Non-Numeric Data");
            ScrollArea::vertical().show(ui, |ui: &mut Ui| {
                for obs in observations {
                    ui.label(format!("{}: {}", obs.key, obs.value));
                }
                ui.add_space(8.0);
                ui.label(DESCRIPTIVE_NOTE);
            });
        }
        PipelineOutcome::Empty => {
            ui.label("No numeric or non-numeric data found to display.");
        }
        PipelineOutcome::SummarizationFailed { message } => {
            ui.label(RichText::new(message).color(Color32::RED));
        }
    }
}

/// A successful render: chart, explanation, and the leading rows of data.
fn chart_view(ui: &mut Ui, render: &RenderResult, colors: &ColorMap) {
    ui.heading(render.kind.title());

    let height = (ui.available_height() * 0.6).max(200.0);
    match render.kind {
        ChartKind::Bar => bar_plot(ui, &render.series, colors, height),
        ChartKind::Pie => pie_chart(ui, &render.series, colors, height),
        ChartKind::Line => line_plot(ui, &render.series, height),
        ChartKind::Histogram => histogram_plot(ui, &render.bins, height),
    }

    ui.add_space(6.0);
    if let Some(explanation) = &render.explanation {
        ui.strong("Visualization Explanation:");
        ui.label(explanation);
    }

    ui.add_space(6.0);
    ui.strong(format!("Data used for {}:", render.kind.label()));
    data_table(ui, &render.series);
}

// ---------------------------------------------------------------------------
// Chart kinds
// ---------------------------------------------------------------------------

fn bar_plot(ui: &mut Ui, series: &[NumericObservation], colors: &ColorMap, height: f32) {
    let bars: Vec<Bar> = series
        .iter()
        .enumerate()
        .map(|(i, obs)| {
            Bar::new(i as f64, obs.value)
                .name(&obs.key)
                .fill(colors.color_for(&obs.key))
                .width(0.7)
        })
        .collect();

    Plot::new("bar_plot")
        .height(height)
        .legend(Legend::default())
        .x_axis_formatter(category_formatter(series))
        .x_axis_label("Key")
        .y_axis_label("Value")
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).name("Categories"));
        });
}

fn line_plot(ui: &mut Ui, series: &[NumericObservation], height: f32) {
    let points: Vec<[f64; 2]> = series
        .iter()
        .enumerate()
        .map(|(i, obs)| [i as f64, obs.value])
        .collect();

    Plot::new("line_plot")
        .height(height)
        .legend(Legend::default())
        .x_axis_formatter(category_formatter(series))
        .x_axis_label("Category")
        .y_axis_label("Value")
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(PlotPoints::from(points.clone()))
                    .name("Value over Categories")
                    .color(Color32::LIGHT_BLUE)
                    .width(2.0),
            );
            plot_ui.points(
                Points::new(PlotPoints::from(points))
                    .name("Value over Categories")
                    .color(Color32::LIGHT_BLUE)
                    .radius(4.0),
            );
        });
}

fn histogram_plot(ui: &mut Ui, bins: &[HistogramBin], height: f32) {
    let bars: Vec<Bar> = bins
        .iter()
        .map(|bin| {
            Bar::new(bin.center(), bin.count as f64)
                .width(bin.width())
                .name(format!("{} – {}", format_value(bin.lower), format_value(bin.upper)))
                .stroke(Stroke::new(1.0, Color32::BLACK))
        })
        .collect();

    Plot::new("histogram_plot")
        .height(height)
        .legend(Legend::default())
        .x_axis_label("Value")
        .y_axis_label("Frequency")
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(
                BarChart::new(bars)
                    .name("Frequency Distribution")
                    .color(Color32::from_rgb(135, 206, 235)),
            );
        });
}

/// Pie chart drawn as filled wedges, starting at 12 o'clock, counter-clockwise.
fn pie_chart(ui: &mut Ui, series: &[NumericObservation], colors: &ColorMap, height: f32) {
    let total: f64 = series.iter().map(|obs| obs.value).sum();
    if !total.is_finite() || total <= 0.0 {
        ui.label(RichText::new("Values are too large to draw as proportions.").color(Color32::RED));
        return;
    }

    Plot::new("pie_chart")
        .height(height)
        .legend(Legend::default())
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            let mut start = FRAC_PI_2;
            for obs in series {
                let fraction = obs.value / total;
                let sweep = fraction * TAU;
                let color = colors.color_for(&obs.key);

                for piece in wedge_pieces(start, sweep) {
                    plot_ui.polygon(
                        Polygon::new(PlotPoints::from(piece))
                            .name(&obs.key)
                            .fill_color(color)
                            .stroke(Stroke::new(1.0, Color32::WHITE)),
                    );
                }

                let mid = start + sweep / 2.0;
                plot_ui.text(Text::new(
                    PlotPoint::new(0.65 * mid.cos(), 0.65 * mid.sin()),
                    RichText::new(format!("{:.1}%", fraction * 100.0)).strong(),
                ));
                start += sweep;
            }
        });
}

/// Split a unit-circle wedge into convex polygons of at most `MAX_PIECE_ANGLE`.
fn wedge_pieces(start: f64, sweep: f64) -> Vec<Vec<[f64; 2]>> {
    let n_pieces = (sweep / MAX_PIECE_ANGLE).ceil().max(1.0) as usize;
    let piece_sweep = sweep / n_pieces as f64;
    const STEPS: usize = 16;

    (0..n_pieces)
        .map(|p| {
            let a0 = start + piece_sweep * p as f64;
            let mut pts = Vec::with_capacity(STEPS + 2);
            pts.push([0.0, 0.0]);
            for s in 0..=STEPS {
                let a = a0 + piece_sweep * s as f64 / STEPS as f64;
                pts.push([a.cos(), a.sin()]);
            }
            pts
        })
        .collect()
}

/// Label integer grid marks with the category key at that index.
fn category_formatter(
    series: &[NumericObservation],
) -> impl Fn(GridMark, &RangeInclusive<f64>) -> String + 'static {
    let keys: Vec<String> = series.iter().map(|obs| obs.key.clone()).collect();
    move |mark: GridMark, _range: &RangeInclusive<f64>| {
        let idx = mark.value.round();
        if (mark.value - idx).abs() > 1e-6 || idx < 0.0 {
            return String::new();
        }
        keys.get(idx as usize).cloned().unwrap_or_default()
    }
}

// ---------------------------------------------------------------------------
// Data table
// ---------------------------------------------------------------------------

fn data_table(ui: &mut Ui, series: &[NumericObservation]) {
    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto().at_least(160.0))
        .column(Column::remainder())
        .header(20.0, |mut header| {
            header.col(|ui: &mut Ui| {
                ui.strong("Key");
            });
            header.col(|ui: &mut Ui| {
                ui.strong("Value");
            });
        })
        .body(|mut body| {
            for obs in series.iter().take(TABLE_ROWS) {
                body.row(18.0, |mut row| {
                    row.col(|ui: &mut Ui| {
                        ui.label(&obs.key);
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(format_value(obs.value));
                    });
                });
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wedge_pieces_cover_sweep() {
        let pieces = wedge_pieces(0.0, TAU * 0.7);
        assert_eq!(pieces.len(), 6);
        let last = pieces.last().unwrap().last().unwrap();
        let end = TAU * 0.7;
        assert!((last[0] - end.cos()).abs() < 1e-9);
        assert!((last[1] - end.sin()).abs() < 1e-9);
        assert!(pieces.iter().all(|p| p[0] == [0.0, 0.0]));
    }

    #[test]
    fn test_tiny_wedge_is_one_piece() {
        assert_eq!(wedge_pieces(1.0, 0.01).len(), 1);
    }
}
