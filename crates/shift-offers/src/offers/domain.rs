use chrono::NaiveDateTime;
use serde::Serialize;

/// Raw column positions of a shift-offer export. Columns are matched by
/// position only; header text in the source is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OfferColumn {
    ShiftId,
    WorkerId,
    WorkplaceId,
    ShiftStartAt,
    ShiftCreatedAt,
    OfferViewedAt,
    Duration,
    Slot,
    ClaimedAt,
    DeletedAt,
    IsVerified,
    CanceledAt,
    IsNcns,
    PayRate,
    ChargeRate,
}

impl OfferColumn {
    pub const COUNT: usize = 15;

    pub const fn ordered() -> [Self; Self::COUNT] {
        [
            Self::ShiftId,
            Self::WorkerId,
            Self::WorkplaceId,
            Self::ShiftStartAt,
            Self::ShiftCreatedAt,
            Self::OfferViewedAt,
            Self::Duration,
            Self::Slot,
            Self::ClaimedAt,
            Self::DeletedAt,
            Self::IsVerified,
            Self::CanceledAt,
            Self::IsNcns,
            Self::PayRate,
            Self::ChargeRate,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::ShiftId => "SHIFT_ID",
            Self::WorkerId => "WORKER_ID",
            Self::WorkplaceId => "WORKPLACE_ID",
            Self::ShiftStartAt => "SHIFT_START_AT",
            Self::ShiftCreatedAt => "SHIFT_CREATED_AT",
            Self::OfferViewedAt => "OFFER_VIEWED_AT",
            Self::Duration => "DURATION",
            Self::Slot => "SLOT",
            Self::ClaimedAt => "CLAIMED_AT",
            Self::DeletedAt => "DELETED_AT",
            Self::IsVerified => "IS_VERIFIED",
            Self::CanceledAt => "CANCELED_AT",
            Self::IsNcns => "IS_NCNS",
            Self::PayRate => "PAY_RATE",
            Self::ChargeRate => "CHARGE_RATE",
        }
    }

    pub const fn is_timestamp(self) -> bool {
        matches!(
            self,
            Self::ShiftStartAt
                | Self::ShiftCreatedAt
                | Self::OfferViewedAt
                | Self::ClaimedAt
                | Self::DeletedAt
                | Self::CanceledAt
        )
    }
}

/// One shift offer extended to one worker.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OfferRecord {
    pub shift_id: String,
    pub worker_id: String,
    pub workplace_id: String,
    pub shift_start_at: Option<NaiveDateTime>,
    pub shift_created_at: Option<NaiveDateTime>,
    pub offer_viewed_at: Option<NaiveDateTime>,
    pub duration: Option<f64>,
    pub slot: Option<String>,
    pub claimed_at: Option<NaiveDateTime>,
    pub deleted_at: Option<NaiveDateTime>,
    pub is_verified: bool,
    pub canceled_at: Option<NaiveDateTime>,
    pub is_ncns: bool,
    pub pay_rate: Option<f64>,
    pub charge_rate: Option<f64>,
}

/// Loaded offers, read-only once built.
#[derive(Debug, Clone, Default)]
pub struct OfferTable {
    records: Vec<OfferRecord>,
}

impl OfferTable {
    pub fn new(records: Vec<OfferRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[OfferRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, OfferRecord> {
        self.records.iter()
    }
}

impl FromIterator<OfferRecord> for OfferTable {
    fn from_iter<I: IntoIterator<Item = OfferRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a OfferTable {
    type Item = &'a OfferRecord;
    type IntoIter = std::slice::Iter<'a, OfferRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
