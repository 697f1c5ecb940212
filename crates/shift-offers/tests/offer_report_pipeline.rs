mod common;

use common::{text, write_workbook, Cell, Row, FEB_1_2024, JAN_1_2024};
use shift_offers::config::ReportConfig;
use shift_offers::offers::charts::{monthly_offer_counts, slot_counts, YearMonth};
use shift_offers::offers::output::{
    MONTHLY_OFFERS_CHART, PAY_RATE_CHART, SLOT_COUNTS_CHART, SUMMARY_REPORT,
};
use shift_offers::offers::{OfferColumn, OfferLoader, OfferSummary};
use shift_offers::pipeline::ReportPipeline;
use std::collections::BTreeSet;

fn sample_rows() -> Vec<Row> {
    vec![
        Row::offer("s1", "w1", "p1")
            .set(OfferColumn::ShiftStartAt, Cell::Date(JAN_1_2024 + 4.25))
            .set(OfferColumn::Slot, text("am"))
            .set(OfferColumn::ClaimedAt, Cell::Date(JAN_1_2024 + 1.5))
            .set(OfferColumn::IsVerified, Cell::Bool(true))
            .set(OfferColumn::IsNcns, Cell::Number(0.0))
            .set(OfferColumn::PayRate, Cell::Number(22.0)),
        Row::offer("s1", "w2", "p1")
            .set(OfferColumn::ShiftStartAt, Cell::Date(JAN_1_2024 + 4.25))
            .set(OfferColumn::Slot, text("am"))
            .set(OfferColumn::IsNcns, Cell::Number(1.0))
            .set(OfferColumn::PayRate, Cell::Number(24.5)),
        Row::offer("s2", "w1", "p2")
            .set(OfferColumn::ShiftStartAt, text("2024-02-10 19:00:00"))
            .set(OfferColumn::Slot, text("pm"))
            .set(OfferColumn::ClaimedAt, text("2024-02-01T12:00:00Z"))
            .set(OfferColumn::CanceledAt, text("not a timestamp"))
            .set(OfferColumn::IsNcns, Cell::Bool(true))
            .set(OfferColumn::PayRate, Cell::Number(30.0)),
        Row::offer("s3", "w3", "p2")
            .set(OfferColumn::Slot, text("noc"))
            .set(OfferColumn::DeletedAt, Cell::Date(FEB_1_2024))
            .set(OfferColumn::IsVerified, text("TRUE")),
    ]
}

#[test]
fn pipeline_writes_all_artifacts_from_workbook() {
    let dir = tempfile::tempdir().expect("tempdir");
    let data_file = write_workbook(dir.path(), "offers.xlsx", &sample_rows());
    let output_dir = dir.path().join("report_output");

    let outcome = ReportPipeline::new(ReportConfig {
        data_file,
        output_dir: output_dir.clone(),
    })
    .run()
    .expect("pipeline completes");

    assert_eq!(
        outcome.summary,
        OfferSummary {
            total_offers: 4,
            unique_workers: 3,
            unique_shifts: 3,
            unique_workplaces: 2,
            claimed_offers: 2,
            canceled_offers: 0,
            deleted_offers: 1,
            no_show_offers: 2,
            worked_offers: 2,
        }
    );
    assert_eq!(outcome.rates.claim_rate, Some(0.5));

    let report = std::fs::read_to_string(output_dir.join(SUMMARY_REPORT)).expect("report");
    assert!(report.starts_with("# Shift Offer Summary\n\n- **Total Offers**: 4\n"));
    assert!(report.contains("- **Unique Workplaces**: 2\n"));
    assert!(report.contains("- **No Show Offers**: 2\n"));
    assert!(report.contains("\n## Conclusions\nThese metrics provide insight"));

    for chart in [PAY_RATE_CHART, SLOT_COUNTS_CHART, MONTHLY_OFFERS_CHART] {
        let bytes = std::fs::read(output_dir.join(chart)).expect("chart exists");
        assert!(bytes.starts_with(b"\x89PNG"), "{chart} is a png");
    }
}

#[test]
fn rerunning_pipeline_is_idempotent() {
    let dir = tempfile::tempdir().expect("tempdir");
    let data_file = write_workbook(dir.path(), "offers.xlsx", &sample_rows());
    let output_dir = dir.path().join("out");
    let pipeline = ReportPipeline::new(ReportConfig {
        data_file,
        output_dir: output_dir.clone(),
    });

    pipeline.run().expect("first run");
    let first = std::fs::read(output_dir.join(SUMMARY_REPORT)).expect("first report");
    pipeline.run().expect("second run");
    let second = std::fs::read(output_dir.join(SUMMARY_REPORT)).expect("second report");
    assert_eq!(first, second);

    let files: BTreeSet<String> = std::fs::read_dir(&output_dir)
        .expect("listable")
        .map(|entry| entry.expect("entry").file_name().to_string_lossy().into_owned())
        .collect();
    let expected: BTreeSet<String> = [
        PAY_RATE_CHART,
        SLOT_COUNTS_CHART,
        MONTHLY_OFFERS_CHART,
        SUMMARY_REPORT,
    ]
    .into_iter()
    .map(str::to_string)
    .collect();
    assert_eq!(files, expected);
}

#[test]
fn monthly_counts_exclude_rows_without_shift_start() {
    let mut rows = Vec::new();
    for day in [3.0, 17.0] {
        rows.push(
            Row::offer("jan", "w", "p").set(OfferColumn::ShiftStartAt, Cell::Date(JAN_1_2024 + day)),
        );
    }
    for day in [0.0, 9.5, 27.0] {
        rows.push(
            Row::offer("feb", "w", "p").set(OfferColumn::ShiftStartAt, Cell::Date(FEB_1_2024 + day)),
        );
    }
    rows.push(Row::offer("none", "w", "p"));
    rows.push(Row::offer("bad", "w", "p").set(OfferColumn::ShiftStartAt, text("soon")));

    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_workbook(dir.path(), "offers.xlsx", &rows);
    let table = OfferLoader::from_path(path).expect("loads");
    assert_eq!(table.len(), 7);

    let counts = monthly_offer_counts(&table);
    assert_eq!(counts.len(), 2);
    assert_eq!(counts.get(&YearMonth::new(2024, 1)), Some(&2));
    assert_eq!(counts.get(&YearMonth::new(2024, 2)), Some(&3));
    assert_eq!(counts.values().sum::<usize>(), 5);
}

#[test]
fn malformed_canceled_at_loads_as_missing() {
    let rows = vec![
        Row::offer("s1", "w1", "p1").set(OfferColumn::CanceledAt, text("31/31/2024 25:00")),
        Row::offer("s2", "w2", "p1").set(OfferColumn::CanceledAt, text("2024-03-04 10:00:00")),
    ];
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_workbook(dir.path(), "offers.xlsx", &rows);

    let table = OfferLoader::from_path(path).expect("malformed dates do not fail the load");
    assert!(table.records()[0].canceled_at.is_none());
    assert!(table.records()[1].canceled_at.is_some());

    let summary = OfferSummary::from_table(&table);
    assert_eq!(summary.canceled_offers, 1);
    assert_eq!(summary.total_offers, 2);
}

#[test]
fn summary_properties_hold_for_loaded_table() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_workbook(dir.path(), "offers.xlsx", &sample_rows());
    let table = OfferLoader::from_path(path).expect("loads");

    let summary = OfferSummary::from_table(&table);
    assert_eq!(summary.total_offers as usize, table.len());
    assert!(summary.unique_workers <= summary.total_offers);
    assert!(summary.unique_shifts <= summary.total_offers);
    assert!(summary.unique_workplaces <= summary.total_offers);

    let unclaimed = table
        .iter()
        .filter(|record| record.claimed_at.is_none())
        .count() as u64;
    assert_eq!(summary.claimed_offers + unclaimed, summary.total_offers);
    assert_eq!(summary, OfferSummary::from_table(&table));
}

#[test]
fn slots_include_unknown_category() {
    let rows = vec![
        Row::offer("s1", "w1", "p1").set(OfferColumn::Slot, text("am")),
        Row::offer("s2", "w1", "p1"),
        Row::offer("s3", "w1", "p1").set(OfferColumn::Slot, text("am")),
    ];
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_workbook(dir.path(), "offers.xlsx", &rows);
    let table = OfferLoader::from_path(path).expect("loads");

    let counts = slot_counts(&table);
    assert_eq!(counts.len(), 2);
    assert_eq!(counts[0].label, "am");
    assert_eq!(counts[0].count, 2);
    assert_eq!(counts[1].count, 1);
}
