//! Data models for parts, records, and configuration.

pub mod config;
pub mod part;
pub mod record;

pub use config::PartlogConfig;
pub use part::{Category, Manufacturer, PartDetails};
pub use record::PartRecord;
