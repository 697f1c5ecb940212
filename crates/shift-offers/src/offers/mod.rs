pub mod charts;
pub mod domain;
pub mod loader;
pub mod output;
pub mod rates;
pub mod report;
pub mod summary;

pub use charts::{ChartError, ChartRenderer};
pub use domain::{OfferColumn, OfferRecord, OfferTable};
pub use loader::{LoadError, OfferLoader};
pub use output::OutputDirectory;
pub use rates::MarketplaceRates;
pub use summary::OfferSummary;
