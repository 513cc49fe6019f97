//! Generic vendor part-number formats.

use super::patterns::GENERIC_PART_FORMATS;
use super::{Classification, ClassifyRule, RuleInput};
use crate::models::part::Category;

/// Last-resort part number extraction: an ordered list of vendor numbering
/// conventions tried in sequence, first matching format wins.
///
/// This rule never assigns a category itself. When a format matches, the
/// part leaves with the token but stays uncategorized until the backfill
/// stage weighs keyword and spec evidence.
pub struct GenericFormatsRule;

impl ClassifyRule for GenericFormatsRule {
    fn name(&self) -> &'static str {
        "generic"
    }

    fn classify(&self, input: &RuleInput<'_>) -> Option<Classification> {
        let part_no = GENERIC_PART_FORMATS
            .iter()
            .find_map(|pattern| pattern.find(input.raw))
            .map(|m| m.as_str().to_string())?;

        Some(Classification {
            category: Category::Uncategorized,
            part_no: Some(part_no),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn part_no(raw: &str) -> Option<String> {
        let lower = raw.to_lowercase();
        GenericFormatsRule
            .classify(&RuleInput {
                raw,
                lower: &lower,
                manufacturer: None,
            })
            .and_then(|c| c.part_no)
    }

    #[test]
    fn test_beckhoff_coupler() {
        assert_eq!(part_no("Beckhoff EK1100 EtherCAT"), Some("EK1100".to_string()));
    }

    #[test]
    fn test_puls_supply() {
        assert_eq!(part_no("PULS QS10.241 output"), Some("QS10.241".to_string()));
    }

    #[test]
    fn test_spaced_numeric_code() {
        assert_eq!(
            part_no("Telemecanique 0298 530 01 16"),
            Some("0298 530 01 16".to_string())
        );
    }

    #[test]
    fn test_siemens_contactor() {
        assert_eq!(part_no("SIRIUS 3RT2015-1BB41"), Some("3RT2015-1BB41".to_string()));
    }

    #[test]
    fn test_format_order_wins_over_text_order() {
        // The catch-all format would match "AB1234" first in the text, but
        // the EK format is earlier in the list.
        assert_eq!(part_no("AB1234 then EK5678"), Some("EK5678".to_string()));
    }

    #[test]
    fn test_no_format_matches() {
        assert_eq!(part_no("completely unreadable smudge"), None);
        assert_eq!(part_no(""), None);
    }
}
