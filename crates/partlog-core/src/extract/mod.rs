//! Label field extraction module.

mod parser;
pub mod rules;

pub use parser::{extract, PartLabelParser};

use crate::models::part::PartDetails;

/// Trait for label text parsers.
///
/// Parsing is total: every input, including the empty string, yields a
/// fully-populated [`PartDetails`] with sentinel defaults for anything the
/// patterns could not find.
pub trait LabelParser {
    /// Parse raw OCR text into structured part details.
    fn parse(&self, text: &str) -> PartDetails;
}
