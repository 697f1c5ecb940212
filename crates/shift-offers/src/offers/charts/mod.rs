mod monthly;
mod pay_rate;
mod slots;

use super::domain::OfferTable;
use super::output::{OutputDirectory, MONTHLY_OFFERS_CHART, PAY_RATE_CHART, SLOT_COUNTS_CHART};
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use plotters::style::{register_font, FontStyle};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::info;

pub use monthly::{monthly_offer_counts, YearMonth};
pub use pay_rate::{HistogramBin, PayRateHistogram};
pub use slots::{slot_counts, SlotCount, UNKNOWN_SLOT};

/// matplotlib's default 6.4in x 4.8in figure at 100 dpi.
pub const CANVAS_SIZE: (u32, u32) = (640, 480);

const FONT_FAMILY: &str = "sans-serif";
const FONT_BYTES: &[u8] = include_bytes!("../../../assets/DejaVuSans.ttf");

pub(crate) const BAR_COLOR: RGBColor = RGBColor(76, 114, 176);
pub(crate) const LINE_COLOR: RGBColor = RGBColor(49, 73, 112);

#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    #[error("output directory {} is not accessible: {source}", .path.display())]
    OutputDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("unable to load chart font: {0}")]
    Font(String),
    #[error("unable to draw chart: {0}")]
    Drawing(String),
}

impl<E> From<DrawingAreaErrorKind<E>> for ChartError
where
    E: std::error::Error + Send + Sync,
{
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        Self::Drawing(err.to_string())
    }
}

/// Renders the three offer distribution charts into an output directory.
///
/// Every chart only reads the table, so the charts can be drawn in any
/// order. Each call replaces the previous image of the same name.
#[derive(Debug, Clone)]
pub struct ChartRenderer {
    output: OutputDirectory,
    size: (u32, u32),
}

impl ChartRenderer {
    pub fn new(output: OutputDirectory) -> Self {
        Self {
            output,
            size: CANVAS_SIZE,
        }
    }

    pub fn render_pay_rate_distribution(&self, table: &OfferTable) -> Result<PathBuf, ChartError> {
        let histogram = PayRateHistogram::from_table(table);
        let path = self.target(PAY_RATE_CHART)?;
        pay_rate::draw(&path, self.size, &histogram)?;
        info!(
            path = %path.display(),
            samples = histogram.samples,
            bins = histogram.bins.len(),
            "rendered pay rate distribution"
        );
        Ok(path)
    }

    pub fn render_slot_counts(&self, table: &OfferTable) -> Result<PathBuf, ChartError> {
        let counts = slot_counts(table);
        let path = self.target(SLOT_COUNTS_CHART)?;
        let bars: Vec<(String, usize)> = counts
            .iter()
            .map(|entry| (entry.label.clone(), entry.count))
            .collect();
        draw_bar_chart(
            &path,
            self.size,
            BarChart {
                title: "Shift Counts by Slot",
                x_desc: "Slot",
                y_desc: "Count",
                bars: &bars,
            },
        )?;
        info!(path = %path.display(), slots = counts.len(), "rendered slot counts");
        Ok(path)
    }

    pub fn render_monthly_offers(&self, table: &OfferTable) -> Result<PathBuf, ChartError> {
        let counts = monthly_offer_counts(table);
        let path = self.target(MONTHLY_OFFERS_CHART)?;
        monthly::log_excluded_rows(table, &counts);
        let bars: Vec<(String, usize)> = counts
            .iter()
            .map(|(month, count)| (month.to_string(), *count))
            .collect();
        draw_bar_chart(
            &path,
            self.size,
            BarChart {
                title: "Offers per Month",
                x_desc: "Month",
                y_desc: "Number of Offers",
                bars: &bars,
            },
        )?;
        info!(path = %path.display(), months = counts.len(), "rendered monthly offers");
        Ok(path)
    }

    fn target(&self, file_name: &str) -> Result<PathBuf, ChartError> {
        let dir = self.output.path();
        match std::fs::metadata(dir) {
            Ok(meta) if meta.is_dir() => {}
            Ok(_) => {
                return Err(ChartError::OutputDirectory {
                    path: dir.to_path_buf(),
                    source: io::Error::other("not a directory"),
                })
            }
            Err(source) => {
                return Err(ChartError::OutputDirectory {
                    path: dir.to_path_buf(),
                    source,
                })
            }
        }

        ensure_font()?;
        Ok(self.output.artifact(file_name))
    }
}

fn ensure_font() -> Result<(), ChartError> {
    static REGISTERED: OnceLock<Result<(), String>> = OnceLock::new();
    REGISTERED
        .get_or_init(|| {
            register_font(FONT_FAMILY, FontStyle::Normal, FONT_BYTES)
                .map_err(|_| "bundled font data is invalid".to_string())
        })
        .clone()
        .map_err(ChartError::Font)
}

pub(crate) fn canvas(path: &Path, size: (u32, u32)) -> DrawingArea<BitMapBackend<'_>, Shift> {
    BitMapBackend::new(path, size).into_drawing_area()
}

pub(crate) fn count_axis_max(max_count: usize) -> f64 {
    if max_count == 0 {
        1.0
    } else {
        max_count as f64 * 1.05
    }
}

struct BarChart<'a> {
    title: &'a str,
    x_desc: &'a str,
    y_desc: &'a str,
    bars: &'a [(String, usize)],
}

/// One bar per category, categories at integer x positions.
fn draw_bar_chart(path: &Path, size: (u32, u32), chart: BarChart<'_>) -> Result<(), ChartError> {
    let root = canvas(path, size);
    root.fill(&WHITE)?;

    let slots = chart.bars.len().max(1);
    let y_max = count_axis_max(chart.bars.iter().map(|(_, count)| *count).max().unwrap_or(0));
    let labels: Vec<&str> = chart.bars.iter().map(|(label, _)| label.as_str()).collect();
    let label_for = |value: &f64| {
        let index = value.round();
        if (value - index).abs() > 1e-6 || index < 0.0 {
            return String::new();
        }
        labels
            .get(index as usize)
            .map(|label| label.to_string())
            .unwrap_or_default()
    };

    let mut cartesian = ChartBuilder::on(&root)
        .caption(chart.title, (FONT_FAMILY, 20))
        .margin(12)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(-0.5f64..(slots as f64 - 0.5), 0f64..y_max)?;

    cartesian
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(slots)
        .x_label_formatter(&label_for)
        .y_label_formatter(&|value| format!("{value:.0}"))
        .x_desc(chart.x_desc)
        .y_desc(chart.y_desc)
        .label_style((FONT_FAMILY, 11))
        .axis_desc_style((FONT_FAMILY, 13))
        .draw()?;

    cartesian.draw_series(chart.bars.iter().enumerate().map(|(index, (_, count))| {
        let center = index as f64;
        Rectangle::new(
            [(center - 0.4, 0.0), (center + 0.4, *count as f64)],
            BAR_COLOR.filled(),
        )
    }))?;

    root.present()?;
    Ok(())
}
