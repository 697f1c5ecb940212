use super::output::{OutputDirectory, SUMMARY_REPORT};
use super::summary::OfferSummary;
use std::fmt::Write as _;
use std::io;
use std::path::PathBuf;

pub const REPORT_TITLE: &str = "Shift Offer Summary";

pub const CONCLUSIONS: &str = "These metrics provide insight into worker engagement, shift availability, \
and overall marketplace activity. High cancellation or no-show rates might \
indicate issues with shift fulfillment, while pay rate distribution helps \
identify competitive compensation ranges.";

pub fn render_summary_markdown(summary: &OfferSummary) -> String {
    let mut document = format!("# {REPORT_TITLE}\n\n");
    for (key, value) in summary.metrics() {
        let _ = writeln!(document, "- **{}**: {}", humanize_key(key), value);
    }
    document.push('\n');
    document.push_str("## Conclusions\n");
    document.push_str(CONCLUSIONS);
    document.push('\n');
    document
}

/// Writes `summary.md`, replacing any previous report.
pub fn write_summary_report(
    output: &OutputDirectory,
    summary: &OfferSummary,
) -> io::Result<PathBuf> {
    let path = output.artifact(SUMMARY_REPORT);
    std::fs::write(&path, render_summary_markdown(summary))?;
    Ok(path)
}

/// `no_show_offers` -> `No Show Offers`.
pub fn humanize_key(key: &str) -> String {
    key.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
