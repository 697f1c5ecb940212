use crate::offers::domain::OfferTable;
use chrono::Datelike;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use tracing::warn;

/// Calendar month; orders chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Offers grouped by the month of `shift_start_at`.
///
/// Rows without a shift start cannot be placed in a month and are left out.
pub fn monthly_offer_counts(table: &OfferTable) -> BTreeMap<YearMonth, usize> {
    let mut counts = BTreeMap::new();
    for start in table.iter().filter_map(|record| record.shift_start_at) {
        *counts
            .entry(YearMonth::new(start.year(), start.month()))
            .or_insert(0) += 1;
    }
    counts
}

pub(super) fn log_excluded_rows(table: &OfferTable, counts: &BTreeMap<YearMonth, usize>) {
    let grouped: usize = counts.values().sum();
    let excluded = table.len() - grouped;
    if excluded > 0 {
        warn!(
            excluded,
            "offers without a shift start are left out of the monthly chart"
        );
    }
}
