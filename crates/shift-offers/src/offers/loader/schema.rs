use super::cell::RawCell;
use super::LoadError;
use crate::offers::domain::{OfferColumn, OfferRecord};

/// Counts cells that held a value but could not be coerced into a timestamp.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CoercionStats {
    pub(crate) unparsed_timestamps: usize,
}

pub(crate) fn check_width(row: usize, found: usize) -> Result<(), LoadError> {
    if found == OfferColumn::COUNT {
        Ok(())
    } else {
        Err(LoadError::Schema {
            row,
            expected: OfferColumn::COUNT,
            found,
        })
    }
}

/// Maps a width-checked row onto the fixed offer schema by position.
pub(crate) fn build_record(cells: &[RawCell], stats: &mut CoercionStats) -> OfferRecord {
    debug_assert_eq!(cells.len(), OfferColumn::COUNT);
    let cell = |column: OfferColumn| column_cell(cells, column);
    let mut timestamp = |column: OfferColumn| {
        let raw = column_cell(cells, column);
        let parsed = raw.to_timestamp();
        if parsed.is_none() && !raw.is_empty() {
            stats.unparsed_timestamps += 1;
        }
        parsed
    };

    OfferRecord {
        shift_start_at: timestamp(OfferColumn::ShiftStartAt),
        shift_created_at: timestamp(OfferColumn::ShiftCreatedAt),
        offer_viewed_at: timestamp(OfferColumn::OfferViewedAt),
        claimed_at: timestamp(OfferColumn::ClaimedAt),
        deleted_at: timestamp(OfferColumn::DeletedAt),
        canceled_at: timestamp(OfferColumn::CanceledAt),
        shift_id: cell(OfferColumn::ShiftId).to_identifier(),
        worker_id: cell(OfferColumn::WorkerId).to_identifier(),
        workplace_id: cell(OfferColumn::WorkplaceId).to_identifier(),
        duration: cell(OfferColumn::Duration).to_number(),
        slot: cell(OfferColumn::Slot).to_category(),
        is_verified: cell(OfferColumn::IsVerified).to_flag(),
        is_ncns: cell(OfferColumn::IsNcns).to_flag(),
        pay_rate: cell(OfferColumn::PayRate).to_number(),
        charge_rate: cell(OfferColumn::ChargeRate).to_number(),
    }
}

fn column_cell(cells: &[RawCell], column: OfferColumn) -> &RawCell {
    &cells[column as usize]
}
