//! Manufacturer detection.

use crate::models::part::Manufacturer;

/// Detect the manufacturer by scanning the fixed brand list in order.
///
/// The first list entry whose keyword occurs anywhere in the lower-cased
/// text wins; list order is the tie-break when a label mentions several
/// brands, not position in the text.
pub fn detect_manufacturer(lower_text: &str) -> Option<Manufacturer> {
    Manufacturer::ALL
        .iter()
        .copied()
        .find(|m| lower_text.contains(m.keyword()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_single_brand() {
        assert_eq!(
            detect_manufacturer("skf explorer 6205"),
            Some(Manufacturer::Skf)
        );
        assert_eq!(
            detect_manufacturer("beckhoff automation"),
            Some(Manufacturer::Beckhoff)
        );
    }

    #[test]
    fn test_list_order_beats_text_order() {
        // SKF appears first in the text, but Siemens is earlier in the
        // canonical list.
        assert_eq!(
            detect_manufacturer("skf und siemens"),
            Some(Manufacturer::Siemens)
        );
    }

    #[test]
    fn test_substring_match_tolerates_noise() {
        // OCR often glues tokens together.
        assert_eq!(
            detect_manufacturer("xxtimkenxx"),
            Some(Manufacturer::Timken)
        );
    }

    #[test]
    fn test_none_when_no_brand() {
        assert_eq!(detect_manufacturer("unbranded hydraulic part"), None);
        assert_eq!(detect_manufacturer(""), None);
    }
}
