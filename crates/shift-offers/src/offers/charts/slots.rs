use crate::offers::domain::OfferTable;
use serde::Serialize;
use std::collections::HashMap;

/// Category used for offers without a slot value.
pub const UNKNOWN_SLOT: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotCount {
    pub label: String,
    pub count: usize,
}

/// Offers per slot in order of first appearance. Missing slots are counted
/// under [`UNKNOWN_SLOT`].
pub fn slot_counts(table: &OfferTable) -> Vec<SlotCount> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<SlotCount> = Vec::new();

    for record in table {
        let label = record.slot.as_deref().unwrap_or(UNKNOWN_SLOT);
        match positions.get(label) {
            Some(&index) => counts[index].count += 1,
            None => {
                positions.insert(label, counts.len());
                counts.push(SlotCount {
                    label: label.to_string(),
                    count: 1,
                });
            }
        }
    }

    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::offers::domain::OfferRecord;

    fn with_slot(slot: Option<&str>) -> OfferRecord {
        OfferRecord {
            slot: slot.map(str::to_string),
            ..OfferRecord::default()
        }
    }

    #[test]
    fn counts_keep_first_appearance_order() {
        let table: OfferTable = [Some("pm"), Some("am"), Some("pm"), None, Some("noc")]
            .into_iter()
            .map(with_slot)
            .collect();

        let counts = slot_counts(&table);
        let pairs: Vec<(&str, usize)> = counts
            .iter()
            .map(|entry| (entry.label.as_str(), entry.count))
            .collect();
        assert_eq!(
            pairs,
            vec![("pm", 2), ("am", 1), (UNKNOWN_SLOT, 1), ("noc", 1)]
        );
    }

    #[test]
    fn every_row_is_counted() {
        let table: OfferTable = [None, None, Some("am")].into_iter().map(with_slot).collect();
        let total: usize = slot_counts(&table).iter().map(|entry| entry.count).sum();
        assert_eq!(total, table.len());
    }

    #[test]
    fn empty_table_has_no_categories() {
        assert!(slot_counts(&OfferTable::default()).is_empty());
    }
}
