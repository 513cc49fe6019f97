//! Persisted part record model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::part::{Category, PartDetails, NOT_AVAILABLE, NOT_FOUND};

/// A logged part, assembled from a [`PartDetails`] plus identity metadata.
///
/// `id`, `date`, and `raw_data` are fixed at creation; `store_code` and
/// `notes` are the only fields a user may edit afterwards (the store API
/// enforces this). Field names serialize in camelCase to stay compatible
/// with the legacy browser log format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartRecord {
    /// Creation identifier, monotonically distinct per creation event.
    pub id: u64,

    /// Date the record was created.
    pub date: NaiveDate,

    /// Part number, or "Not Found".
    pub part_no: String,

    /// Manufacturer label, or "Not Found".
    pub manufacturer: String,

    /// Serial number, or "N/A".
    pub serial_number: String,

    /// Comma-joined specification tokens, or "N/A".
    pub specs: String,

    /// Classified category label.
    pub category: String,

    /// User-assigned storage location code.
    #[serde(default)]
    pub store_code: String,

    /// Freeform user notes.
    #[serde(default)]
    pub notes: String,

    /// Original OCR text, retained verbatim for audit.
    pub raw_data: String,
}

impl PartRecord {
    /// Assemble a record from an extraction result and the raw OCR text.
    pub fn from_details(id: u64, date: NaiveDate, details: &PartDetails, raw_text: &str) -> Self {
        Self {
            id,
            date,
            part_no: details.part_no_label().to_string(),
            manufacturer: details.manufacturer_label().to_string(),
            serial_number: details.serial_label().to_string(),
            specs: details.specs_label(),
            category: details.category.label().to_string(),
            store_code: String::new(),
            notes: String::new(),
            raw_data: raw_text.to_string(),
        }
    }

    /// Build a record directly from a barcode/QR-scanned part number,
    /// bypassing text extraction. All other extracted fields take their
    /// defaults.
    pub fn from_scanned_code(id: u64, date: NaiveDate, code: &str) -> Self {
        Self {
            id,
            date,
            part_no: code.to_string(),
            manufacturer: NOT_FOUND.to_string(),
            serial_number: NOT_AVAILABLE.to_string(),
            specs: NOT_AVAILABLE.to_string(),
            category: Category::Uncategorized.label().to_string(),
            store_code: String::new(),
            notes: String::new(),
            raw_data: format!("Scanned Barcode: {}", code),
        }
    }

    /// Case-insensitive substring match across every field, used by
    /// store search.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        if query.is_empty() {
            return true;
        }

        self.id.to_string().contains(&query)
            || self.date.to_string().contains(&query)
            || self.part_no.to_lowercase().contains(&query)
            || self.manufacturer.to_lowercase().contains(&query)
            || self.serial_number.to_lowercase().contains(&query)
            || self.specs.to_lowercase().contains(&query)
            || self.category.to_lowercase().contains(&query)
            || self.store_code.to_lowercase().contains(&query)
            || self.notes.to_lowercase().contains(&query)
            || self.raw_data.to_lowercase().contains(&query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::part::{Category, Manufacturer};
    use pretty_assertions::assert_eq;

    fn sample_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    #[test]
    fn test_from_details_renders_sentinels() {
        let record = PartRecord::from_details(1, sample_date(), &PartDetails::default(), "garbled");
        assert_eq!(record.part_no, "Not Found");
        assert_eq!(record.manufacturer, "Not Found");
        assert_eq!(record.serial_number, "N/A");
        assert_eq!(record.specs, "N/A");
        assert_eq!(record.category, "Uncategorized");
        assert_eq!(record.raw_data, "garbled");
    }

    #[test]
    fn test_from_details_populated() {
        let details = PartDetails {
            manufacturer: Some(Manufacturer::Skf),
            part_no: Some("6205-2RS".to_string()),
            serial_number: Some("A12345".to_string()),
            category: Category::Bearing,
            specs: vec!["24V".to_string()],
        };
        let record = PartRecord::from_details(7, sample_date(), &details, "raw");
        assert_eq!(record.manufacturer, "SKF");
        assert_eq!(record.part_no, "6205-2RS");
        assert_eq!(record.serial_number, "A12345");
        assert_eq!(record.specs, "24V");
        assert_eq!(record.category, "Bearing");
    }

    #[test]
    fn test_from_scanned_code_defaults() {
        let record = PartRecord::from_scanned_code(2, sample_date(), "XJ-900");
        assert_eq!(record.part_no, "XJ-900");
        assert_eq!(record.manufacturer, "Not Found");
        assert_eq!(record.serial_number, "N/A");
        assert_eq!(record.specs, "N/A");
        assert_eq!(record.category, "Uncategorized");
        assert_eq!(record.raw_data, "Scanned Barcode: XJ-900");
    }

    #[test]
    fn test_matches_any_field() {
        let mut record = PartRecord::from_scanned_code(3, sample_date(), "XJ-900");
        record.notes = "shelf B".to_string();

        assert!(record.matches("xj-900"));
        assert!(record.matches("SHELF"));
        assert!(record.matches("scanned"));
        assert!(record.matches(""));
        assert!(!record.matches("bearing"));
    }

    #[test]
    fn test_camel_case_serialization() {
        let record = PartRecord::from_scanned_code(4, sample_date(), "XJ-900");
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"partNo\""));
        assert!(json.contains("\"serialNumber\""));
        assert!(json.contains("\"storeCode\""));
        assert!(json.contains("\"rawData\""));
    }
}
