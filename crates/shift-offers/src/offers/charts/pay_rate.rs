use super::{canvas, count_axis_max, ChartError, BAR_COLOR, FONT_FAMILY, LINE_COLOR};
use crate::offers::domain::OfferTable;
use plotters::prelude::*;
use serde::Serialize;
use std::f64::consts::PI;
use std::path::Path;

const DENSITY_GRID_POINTS: usize = 200;
/// Upper bound on histogram bins; outliers fall back to the Sturges width.
const MAX_BINS: usize = 1_000;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Pay-rate histogram with a Gaussian density curve scaled to bin counts.
///
/// Bin edges follow numpy's `"auto"` estimator: the narrower of the Sturges
/// and Freedman-Diaconis widths, with Sturges alone when the interquartile
/// range is zero or when Freedman-Diaconis would need more bins than there
/// are samples. The density uses Scott's bandwidth and spans the observed
/// range; it is empty when the values have no spread.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PayRateHistogram {
    pub samples: usize,
    pub bins: Vec<HistogramBin>,
    pub density: Vec<(f64, f64)>,
}

impl PayRateHistogram {
    pub fn from_table(table: &OfferTable) -> Self {
        Self::from_values(table.iter().filter_map(|record| record.pay_rate).collect())
    }

    pub fn from_values(mut values: Vec<f64>) -> Self {
        values.retain(|value| value.is_finite());
        if values.is_empty() {
            return Self::default();
        }
        values.sort_by(f64::total_cmp);

        let bins = bin_values(&values);
        let bin_width = bins.first().map_or(0.0, |bin| bin.upper - bin.lower);
        let density = density_curve(&values, bin_width);

        Self {
            samples: values.len(),
            bins,
            density,
        }
    }

    pub fn max_count(&self) -> usize {
        self.bins.iter().map(|bin| bin.count).max().unwrap_or(0)
    }
}

fn bin_values(sorted: &[f64]) -> Vec<HistogramBin> {
    let n = sorted.len();
    let mut first = sorted[0];
    let mut last = sorted[n - 1];
    if first == last {
        first -= 0.5;
        last += 0.5;
    }

    let spread = sorted[n - 1] - sorted[0];
    let sturges = spread / ((n as f64).log2() + 1.0);
    let iqr = percentile(sorted, 75.0) - percentile(sorted, 25.0);
    let freedman_diaconis = 2.0 * iqr * (n as f64).powf(-1.0 / 3.0);
    let bin_limit = MAX_BINS.min(n) as f64;
    let width = if freedman_diaconis > 0.0
        && freedman_diaconis < sturges
        && (last - first) / freedman_diaconis <= bin_limit
    {
        freedman_diaconis
    } else {
        sturges
    };

    let bin_count = if width > 0.0 {
        ((last - first) / width).ceil().clamp(1.0, MAX_BINS as f64) as usize
    } else {
        1
    };
    let step = (last - first) / bin_count as f64;

    let mut bins: Vec<HistogramBin> = (0..bin_count)
        .map(|index| HistogramBin {
            lower: first + step * index as f64,
            upper: if index + 1 == bin_count {
                last
            } else {
                first + step * (index + 1) as f64
            },
            count: 0,
        })
        .collect();

    for value in sorted {
        let index = (((value - first) / step).floor() as usize).min(bin_count - 1);
        bins[index].count += 1;
    }

    bins
}

/// Linear interpolation between closest ranks.
fn percentile(sorted: &[f64], pct: f64) -> f64 {
    let rank = pct / 100.0 * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    let fraction = rank - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * fraction
}

fn density_curve(sorted: &[f64], bin_width: f64) -> Vec<(f64, f64)> {
    let n = sorted.len();
    if n < 2 {
        return Vec::new();
    }

    let mean = sorted.iter().sum::<f64>() / n as f64;
    let variance = sorted
        .iter()
        .map(|value| (value - mean).powi(2))
        .sum::<f64>()
        / (n - 1) as f64;
    let bandwidth = variance.sqrt() * (n as f64).powf(-0.2);
    if bandwidth <= 0.0 || !bandwidth.is_finite() {
        return Vec::new();
    }

    let low = sorted[0];
    let high = sorted[n - 1];
    let last_index = (DENSITY_GRID_POINTS - 1) as f64;
    let norm = bandwidth * (2.0 * PI).sqrt();

    (0..DENSITY_GRID_POINTS)
        .map(|index| {
            let x = low + (high - low) * index as f64 / last_index;
            let kernel_sum: f64 = sorted
                .iter()
                .map(|value| (-0.5 * ((x - value) / bandwidth).powi(2)).exp())
                .sum();
            (x, kernel_sum / norm * bin_width)
        })
        .collect()
}

pub(super) fn draw(
    path: &Path,
    size: (u32, u32),
    histogram: &PayRateHistogram,
) -> Result<(), ChartError> {
    let root = canvas(path, size);
    root.fill(&WHITE)?;

    let (x_min, x_max) = match (histogram.bins.first(), histogram.bins.last()) {
        (Some(first), Some(last)) => (first.lower, last.upper),
        _ => (0.0, 1.0),
    };
    let density_peak = histogram
        .density
        .iter()
        .map(|(_, y)| *y)
        .fold(0.0, f64::max);
    let y_max = count_axis_max(histogram.max_count()).max(density_peak * 1.05);

    let mut chart = ChartBuilder::on(&root)
        .caption("Distribution of Pay Rate", (FONT_FAMILY, 20))
        .margin(12)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(x_min..x_max, 0f64..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("Pay Rate")
        .y_desc("Count")
        .y_label_formatter(&|value| format!("{value:.0}"))
        .label_style((FONT_FAMILY, 11))
        .axis_desc_style((FONT_FAMILY, 13))
        .draw()?;

    chart.draw_series(histogram.bins.iter().map(|bin| {
        Rectangle::new(
            [(bin.lower, 0.0), (bin.upper, bin.count as f64)],
            BAR_COLOR.mix(0.6).filled(),
        )
    }))?;

    if !histogram.density.is_empty() {
        chart.draw_series(LineSeries::new(
            histogram.density.iter().copied(),
            LINE_COLOR.stroke_width(2),
        ))?;
    }

    root.present()?;
    Ok(())
}
