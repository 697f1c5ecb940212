use super::domain::OfferTable;
use serde::Serialize;
use std::collections::HashSet;

/// Scalar marketplace counts for one offer table.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OfferSummary {
    pub total_offers: u64,
    pub unique_workers: u64,
    pub unique_shifts: u64,
    pub unique_workplaces: u64,
    pub claimed_offers: u64,
    pub canceled_offers: u64,
    pub deleted_offers: u64,
    pub no_show_offers: u64,
    pub worked_offers: u64,
}

impl OfferSummary {
    pub fn from_table(table: &OfferTable) -> Self {
        let mut workers = HashSet::new();
        let mut shifts = HashSet::new();
        let mut workplaces = HashSet::new();
        let mut summary = Self::default();

        for record in table {
            summary.total_offers += 1;
            insert_identifier(&mut workers, &record.worker_id);
            insert_identifier(&mut shifts, &record.shift_id);
            insert_identifier(&mut workplaces, &record.workplace_id);
            summary.claimed_offers += u64::from(record.claimed_at.is_some());
            summary.canceled_offers += u64::from(record.canceled_at.is_some());
            summary.deleted_offers += u64::from(record.deleted_at.is_some());
            summary.no_show_offers += u64::from(record.is_ncns);
            summary.worked_offers += u64::from(record.is_verified);
        }

        summary.unique_workers = workers.len() as u64;
        summary.unique_shifts = shifts.len() as u64;
        summary.unique_workplaces = workplaces.len() as u64;
        summary
    }

    /// Metric keys and values in report order.
    pub fn metrics(&self) -> [(&'static str, u64); 9] {
        [
            ("total_offers", self.total_offers),
            ("unique_workers", self.unique_workers),
            ("unique_shifts", self.unique_shifts),
            ("unique_workplaces", self.unique_workplaces),
            ("claimed_offers", self.claimed_offers),
            ("canceled_offers", self.canceled_offers),
            ("deleted_offers", self.deleted_offers),
            ("no_show_offers", self.no_show_offers),
            ("worked_offers", self.worked_offers),
        ]
    }
}

fn insert_identifier<'a>(seen: &mut HashSet<&'a str>, value: &'a str) {
    if !value.is_empty() {
        seen.insert(value);
    }
}
