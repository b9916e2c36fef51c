use serde::Serialize;

/// One equal-width histogram bin `[lower, upper)`; the last bin is closed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

impl HistogramBin {
    pub fn center(&self) -> f64 {
        self.lower / 2.0 + self.upper / 2.0
    }

    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }
}

/// Bin finite `values` into `bins` equal-width buckets over `[min, max]`.
///
/// When every value is identical the range is widened to `[v - 0.5, v + 0.5]`
/// so the width is never zero. Non-finite values are skipped; an empty input
/// yields no bins.
pub fn histogram(values: &[f64], bins: usize) -> Vec<HistogramBin> {
    let bins = bins.max(1);
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() {
        return Vec::new();
    }

    let mut min = finite.iter().copied().fold(f64::INFINITY, f64::min);
    let mut max = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if max - min <= 0.0 {
        min -= 0.5;
        max += 0.5;
    }
    // Divide before subtracting: `max - min` overflows for ranges near f64::MAX.
    let width = max / bins as f64 - min / bins as f64;

    let mut out: Vec<HistogramBin> = (0..bins)
        .map(|i| HistogramBin {
            lower: min + width * i as f64,
            upper: if i + 1 == bins { max } else { min + width * (i + 1) as f64 },
            count: 0,
        })
        .collect();

    for v in finite {
        let idx = ((v / width - min / width) as usize).min(bins - 1);
        out[idx].count += 1;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_sum_to_input() {
        let values = [1.0, 2.0, 2.5, 3.0, 9.0, 10.0];
        let bins = histogram(&values, 10);
        assert_eq!(bins.len(), 10);
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), values.len());
        assert_eq!(bins[0].lower, 1.0);
        assert_eq!(bins[9].upper, 10.0);
    }

    #[test]
    fn test_max_lands_in_last_bin() {
        let bins = histogram(&[0.0, 10.0], 5);
        assert_eq!(bins[0].count, 1);
        assert_eq!(bins[4].count, 1);
    }

    #[test]
    fn test_single_value_widens_range() {
        let bins = histogram(&[42.0], 10);
        assert_eq!(bins.len(), 10);
        assert_eq!(bins[0].lower, 41.5);
        assert_eq!(bins[9].upper, 42.5);
        assert_eq!(bins.iter().filter(|b| b.count == 1).count(), 1);
    }

    #[test]
    fn test_zero_bins_treated_as_one() {
        let bins = histogram(&[1.0, 2.0], 0);
        assert_eq!(bins.len(), 1);
        assert_eq!(bins[0].count, 2);
    }

    #[test]
    fn test_no_finite_values() {
        assert!(histogram(&[f64::NAN, f64::INFINITY], 10).is_empty());
        assert!(histogram(&[], 10).is_empty());
    }

    #[test]
    fn test_range_wider_than_f64_max() {
        let bins = histogram(&[-1e308, 0.0, 1e308], 10);
        assert_eq!(bins.len(), 10);
        assert!(bins.iter().all(|b| b.lower.is_finite() && b.upper.is_finite()));
        assert!(bins.iter().all(|b| b.center().is_finite()));
        assert_eq!(bins[0].lower, -1e308);
        assert_eq!(bins[9].upper, 1e308);
        assert_eq!(bins[0].count, 1);
        assert_eq!(bins[9].count, 1);
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), 3);
    }

    #[test]
    fn test_center_and_width() {
        let bin = HistogramBin { lower: 2.0, upper: 4.0, count: 0 };
        assert_eq!(bin.center(), 3.0);
        assert_eq!(bin.width(), 2.0);
    }
}
