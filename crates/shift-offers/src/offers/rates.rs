use super::summary::OfferSummary;
use serde::Serialize;

/// Ratios derived from an [`OfferSummary`].
///
/// Claim rate is measured against all offers; the remaining rates are
/// measured against claimed offers. A rate is `None` when its denominator
/// is zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MarketplaceRates {
    pub claim_rate: Option<f64>,
    pub cancellation_rate: Option<f64>,
    pub no_show_rate: Option<f64>,
    pub worked_rate: Option<f64>,
}

impl MarketplaceRates {
    pub fn from_summary(summary: &OfferSummary) -> Self {
        Self {
            claim_rate: ratio(summary.claimed_offers, summary.total_offers),
            cancellation_rate: ratio(summary.canceled_offers, summary.claimed_offers),
            no_show_rate: ratio(summary.no_show_offers, summary.claimed_offers),
            worked_rate: ratio(summary.worked_offers, summary.claimed_offers),
        }
    }
}

fn ratio(numerator: u64, denominator: u64) -> Option<f64> {
    (denominator > 0).then(|| numerator as f64 / denominator as f64)
}
