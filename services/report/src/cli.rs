use crate::render::{render_outcome, render_outcome_json};
use clap::Parser;
use shift_offers::config::{AppConfig, ReportConfig};
use shift_offers::error::AppError;
use shift_offers::pipeline::ReportPipeline;
use shift_offers::telemetry;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "shift-offer-report",
    about = "Summarize a shift-offer export into charts and a markdown report",
    version
)]
pub(crate) struct Cli {
    /// Override the configured spreadsheet (or CSV export) to read
    #[arg(long)]
    pub(crate) data_file: Option<PathBuf>,
    /// Override the directory the charts and summary.md are written to
    #[arg(long)]
    pub(crate) output_dir: Option<PathBuf>,
    /// Print the run outcome as JSON instead of a text digest
    #[arg(long)]
    pub(crate) json: bool,
}

impl Cli {
    fn apply(&mut self, report: &mut ReportConfig) {
        if let Some(data_file) = self.data_file.take() {
            report.data_file = data_file;
        }
        if let Some(output_dir) = self.output_dir.take() {
            report.output_dir = output_dir;
        }
    }
}

pub(crate) fn run() -> Result<(), AppError> {
    let mut cli = Cli::parse();
    let mut config = AppConfig::load()?;
    cli.apply(&mut config.report);

    telemetry::init(&config.telemetry)?;
    info!(
        ?config.environment,
        data_file = %config.report.data_file.display(),
        output_dir = %config.report.output_dir.display(),
        "starting shift offer report"
    );

    let outcome = ReportPipeline::new(config.report).run()?;

    if cli.json {
        println!("{}", render_outcome_json(&outcome)?);
    } else {
        print!("{}", render_outcome(&outcome));
    }

    info!(
        report = %outcome.artifacts.summary_report.display(),
        "shift offer report complete"
    );
    Ok(())
}
