//! Part data models: manufacturers, categories, and extraction results.

use serde::{Deserialize, Serialize};

/// Sentinel rendered for fields no pattern matched.
pub const NOT_FOUND: &str = "Not Found";

/// Sentinel rendered for absent optional fields.
pub const NOT_AVAILABLE: &str = "N/A";

/// Known manufacturers, in detection priority order.
///
/// When a label mentions more than one brand, the one earlier in [`ALL`]
/// wins regardless of where it appears in the text.
///
/// [`ALL`]: Manufacturer::ALL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Manufacturer {
    Beckhoff,
    Schneider,
    Puls,
    Siemens,
    Skf,
    Fag,
    Nsk,
    Timken,
    Telemecanique,
}

impl Manufacturer {
    /// The ordered detection list. List order is the tie-break, not
    /// position in the scanned text.
    pub const ALL: [Manufacturer; 9] = [
        Manufacturer::Beckhoff,
        Manufacturer::Schneider,
        Manufacturer::Puls,
        Manufacturer::Siemens,
        Manufacturer::Skf,
        Manufacturer::Fag,
        Manufacturer::Nsk,
        Manufacturer::Timken,
        Manufacturer::Telemecanique,
    ];

    /// Lower-case substring that identifies this brand in OCR text.
    pub fn keyword(&self) -> &'static str {
        match self {
            Manufacturer::Beckhoff => "beckhoff",
            Manufacturer::Schneider => "schneider",
            Manufacturer::Puls => "puls",
            Manufacturer::Siemens => "siemens",
            Manufacturer::Skf => "skf",
            Manufacturer::Fag => "fag",
            Manufacturer::Nsk => "nsk",
            Manufacturer::Timken => "timken",
            Manufacturer::Telemecanique => "telemecanique",
        }
    }

    /// Canonical brand label for display and export.
    pub fn name(&self) -> &'static str {
        match self {
            Manufacturer::Beckhoff => "Beckhoff",
            Manufacturer::Schneider => "Schneider",
            Manufacturer::Puls => "PULS",
            Manufacturer::Siemens => "Siemens",
            Manufacturer::Skf => "SKF",
            Manufacturer::Fag => "FAG",
            Manufacturer::Nsk => "NSK",
            Manufacturer::Timken => "Timken",
            Manufacturer::Telemecanique => "Telemecanique",
        }
    }

    /// Whether this brand primarily makes rolling bearings.
    ///
    /// Used by the bearing classification rule: a bearing-shaped numeric
    /// code from one of these brands is classified as a bearing even when
    /// the word "bearing" is missing from the label.
    pub fn is_bearing_maker(&self) -> bool {
        matches!(
            self,
            Manufacturer::Skf | Manufacturer::Fag | Manufacturer::Nsk | Manufacturer::Timken
        )
    }
}

impl std::fmt::Display for Manufacturer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Part category, mutually exclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Bearing")]
    Bearing,

    #[serde(rename = "Hose / Fitting")]
    HoseFitting,

    #[serde(rename = "Power Supply")]
    PowerSupply,

    #[serde(rename = "Network Module")]
    NetworkModule,

    #[serde(rename = "Contactor")]
    Contactor,

    #[serde(rename = "Electrical")]
    Electrical,

    #[default]
    #[serde(rename = "Uncategorized")]
    Uncategorized,
}

impl Category {
    /// Display label for this category.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Bearing => "Bearing",
            Category::HoseFitting => "Hose / Fitting",
            Category::PowerSupply => "Power Supply",
            Category::NetworkModule => "Network Module",
            Category::Contactor => "Contactor",
            Category::Electrical => "Electrical",
            Category::Uncategorized => "Uncategorized",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Structured result of parsing one label's OCR text.
///
/// Ephemeral: constructed fresh per extraction call and consumed to build a
/// [`PartRecord`](crate::models::record::PartRecord). Every field has a
/// defined default, so extraction is total over all inputs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartDetails {
    /// Detected manufacturer, if any brand keyword matched.
    pub manufacturer: Option<Manufacturer>,

    /// Extracted part number token, if any pattern matched.
    pub part_no: Option<String>,

    /// Serial number captured after a "Ser.Nr." label, verbatim.
    pub serial_number: Option<String>,

    /// Classified category.
    pub category: Category,

    /// Matched specification tokens, deduplicated, first-occurrence order.
    pub specs: Vec<String>,
}

impl PartDetails {
    /// Manufacturer label, or the not-found sentinel.
    pub fn manufacturer_label(&self) -> &str {
        self.manufacturer.map(|m| m.name()).unwrap_or(NOT_FOUND)
    }

    /// Part number, or the not-found sentinel.
    pub fn part_no_label(&self) -> &str {
        self.part_no.as_deref().unwrap_or(NOT_FOUND)
    }

    /// Serial number, or "N/A".
    pub fn serial_label(&self) -> &str {
        self.serial_number.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    /// Specs joined with ", ", or "N/A" when none matched.
    pub fn specs_label(&self) -> String {
        if self.specs.is_empty() {
            NOT_AVAILABLE.to_string()
        } else {
            self.specs.join(", ")
        }
    }
}
