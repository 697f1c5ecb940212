use shift_offers::error::AppError;
use shift_offers::offers::report::humanize_key;
use shift_offers::pipeline::PipelineOutcome;
use std::fmt::Write;

pub(crate) fn render_outcome(outcome: &PipelineOutcome) -> String {
    let mut out = String::from("Shift offer report\n");

    out.push_str("\nMetrics\n");
    for (key, value) in outcome.summary.metrics() {
        let _ = writeln!(out, "- {}: {}", humanize_key(key), value);
    }

    let rates = &outcome.rates;
    out.push_str("\nRates\n");
    for (label, rate) in [
        ("Claim rate", rates.claim_rate),
        ("Cancellation rate", rates.cancellation_rate),
        ("No-show rate", rates.no_show_rate),
        ("Worked rate", rates.worked_rate),
    ] {
        let _ = writeln!(out, "- {label}: {}", format_rate(rate));
    }

    let artifacts = &outcome.artifacts;
    out.push_str("\nArtifacts\n");
    for path in [
        &artifacts.pay_rate_chart,
        &artifacts.slot_counts_chart,
        &artifacts.monthly_offers_chart,
        &artifacts.summary_report,
    ] {
        let _ = writeln!(out, "- {}", path.display());
    }
    out
}

pub(crate) fn render_outcome_json(outcome: &PipelineOutcome) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(outcome)?)
}

fn format_rate(rate: Option<f64>) -> String {
    match rate {
        Some(value) => format!("{:.1}%", value * 100.0),
        None => "n/a".to_string(),
    }
}
