use crate::config::ReportConfig;
use crate::error::AppError;
use crate::offers::report::write_summary_report;
use crate::offers::{
    ChartRenderer, MarketplaceRates, OfferLoader, OfferSummary, OfferTable, OutputDirectory,
};
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

/// Files written by one run, in the order they were produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportArtifacts {
    pub pay_rate_chart: PathBuf,
    pub slot_counts_chart: PathBuf,
    pub monthly_offers_chart: PathBuf,
    pub summary_report: PathBuf,
}

#[derive(Debug, Clone, Serialize)]
pub struct PipelineOutcome {
    pub summary: OfferSummary,
    pub rates: MarketplaceRates,
    pub artifacts: ReportArtifacts,
}

/// Batch job: output directory -> load -> summarize -> charts -> report.
///
/// Any failing step aborts the run; nothing is retried.
#[derive(Debug, Clone)]
pub struct ReportPipeline {
    config: ReportConfig,
}

impl ReportPipeline {
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    pub fn run(&self) -> Result<PipelineOutcome, AppError> {
        let output = OutputDirectory::ensure(&self.config.output_dir)?;
        let table = OfferLoader::from_path(&self.config.data_file)?;
        Self::publish(&table, &output)
    }

    /// Summarizes an already loaded table and writes every artifact.
    pub fn publish(table: &OfferTable, output: &OutputDirectory) -> Result<PipelineOutcome, AppError> {
        let summary = OfferSummary::from_table(table);
        let rates = MarketplaceRates::from_summary(&summary);
        info!(
            total_offers = summary.total_offers,
            claimed_offers = summary.claimed_offers,
            claim_rate = ?rates.claim_rate,
            cancellation_rate = ?rates.cancellation_rate,
            no_show_rate = ?rates.no_show_rate,
            worked_rate = ?rates.worked_rate,
            "summarized shift offers"
        );

        let renderer = ChartRenderer::new(output.clone());
        let pay_rate_chart = renderer.render_pay_rate_distribution(table)?;
        let slot_counts_chart = renderer.render_slot_counts(table)?;
        let monthly_offers_chart = renderer.render_monthly_offers(table)?;

        let summary_report = write_summary_report(output, &summary)?;
        info!(path = %summary_report.display(), "wrote summary report");

        Ok(PipelineOutcome {
            summary,
            rates,
            artifacts: ReportArtifacts {
                pay_rate_chart,
                slot_counts_chart,
                monthly_offers_chart,
                summary_report,
            },
        })
    }
}
