//! Core library for industrial parts label processing.
//!
//! This crate provides:
//! - Rule-based field extraction from OCR'd part label text
//!   (manufacturer, part number, serial number, category, specs)
//! - Part record assembly and a JSON-backed record store
//! - Configuration models for the surrounding tools
//!
//! The OCR engine itself is an external collaborator: this library starts
//! from decoded text and trusts whatever it receives, including garbage.
//! Extraction is total and never fails; unrecognized fields come back as
//! sentinel values.

pub mod error;
pub mod extract;
pub mod models;
pub mod store;

pub use error::{PartlogError, Result, StoreError};
pub use extract::{extract, LabelParser, PartLabelParser};
pub use models::config::PartlogConfig;
pub use models::part::{Category, Manufacturer, PartDetails};
pub use models::record::PartRecord;
pub use store::RecordStore;
