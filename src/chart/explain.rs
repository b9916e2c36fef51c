use super::ChartKind;
use crate::data::model::NumericObservation;

/// Describe what a rendered chart shows.
///
/// Only mentions entries of `series`, which must be what was actually
/// plotted (e.g. the positive slices of a pie chart). Deterministic for a
/// given input.
pub fn explain(kind: ChartKind, series: &[NumericObservation], sample_size: usize) -> String {
    let n = series.len();
    match kind {
        ChartKind::Bar => format!(
            "A bar plot is drawn to compare values across {}. Each bar represents one \
             category, and its height shows that category's value. Categories shown \
             include: {}.",
            count_noun(n, "category", "categories"),
            sample_keys(series, sample_size)
        ),
        ChartKind::Pie => format!(
            "This pie chart visualizes the proportion of values across {}. Each slice \
             represents a category, and its size reflects its share of the total. Useful \
             for understanding relative contributions, such as: {}.",
            count_noun(n, "category", "categories"),
            sample_keys(series, sample_size)
        ),
        ChartKind::Line => format!(
            "This line plot shows the trends of numeric values across {}. Each point \
             represents a category, and the line highlights changes between them, such as \
             {}. Use it to identify increases, decreases, or stable patterns.",
            count_noun(n, "category", "categories"),
            sample_keys(series, sample_size)
        ),
        ChartKind::Histogram => format!(
            "This histogram shows the distribution of {}. Each bar represents a range \
             (bin), and its height indicates the frequency of values within that range. \
             Ideal for spotting patterns or outliers in values like: {}.",
            count_noun(n, "numeric value", "numeric values"),
            sample_values(series, sample_size)
        ),
    }
}

fn count_noun(n: usize, singular: &str, plural: &str) -> String {
    if n == 1 {
        format!("1 {singular}")
    } else {
        format!("{n} {plural}")
    }
}

fn sample_keys(series: &[NumericObservation], limit: usize) -> String {
    series
        .iter()
        .take(limit)
        .map(|obs| obs.key.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn sample_values(series: &[NumericObservation], limit: usize) -> String {
    series
        .iter()
        .take(limit)
        .map(|obs| format_value(obs.value))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Whole numbers keep one decimal place ("12.0"), everything else prints as-is.
pub fn format_value(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}
