pub mod config;
pub mod error;
pub mod offers;
pub mod pipeline;
pub mod telemetry;
