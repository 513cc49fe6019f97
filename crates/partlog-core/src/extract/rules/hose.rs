//! Hose / fitting classification rule.

use super::patterns::{HOSE_KEYWORDS, HOSE_PART};
use super::{Classification, ClassifyRule, RuleInput};
use crate::models::part::Category;

/// Classifies hoses and fittings by keyword evidence: the word "hose" or a
/// nominal-diameter/pressure-class marker ("dn", "pn") anywhere in the
/// lower-cased text.
///
/// The category is assigned on keyword evidence alone; a part number is a
/// secondary attempt (6+ character alphanumeric-hyphen token) and may
/// legitimately come up empty.
pub struct HoseRule;

impl ClassifyRule for HoseRule {
    fn name(&self) -> &'static str {
        "hose"
    }

    fn classify(&self, input: &RuleInput<'_>) -> Option<Classification> {
        if !HOSE_KEYWORDS.iter().any(|kw| input.lower.contains(kw)) {
            return None;
        }

        Some(Classification {
            category: Category::HoseFitting,
            part_no: HOSE_PART.find(input.raw).map(|m| m.as_str().to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(raw: &str) -> Option<Classification> {
        let lower = raw.to_lowercase();
        HoseRule.classify(&RuleInput {
            raw,
            lower: &lower,
            manufacturer: None,
        })
    }

    #[test]
    fn test_hose_with_part_number() {
        let result = classify("Hydraulic hose EN853-2SN DN12").unwrap();
        assert_eq!(result.category, Category::HoseFitting);
        assert_eq!(result.part_no.as_deref(), Some("EN853-2SN"));
    }

    #[test]
    fn test_keyword_without_part_number() {
        // Category sticks even with no extractable token.
        let result = classify("hose DN50 PN16").unwrap();
        assert_eq!(result.category, Category::HoseFitting);
        assert_eq!(result.part_no, None);
    }

    #[test]
    fn test_diameter_marker_alone() {
        let result = classify("fitting dn25").unwrap();
        assert_eq!(result.category, Category::HoseFitting);
    }

    #[test]
    fn test_no_keyword_passes() {
        assert!(classify("siemens contactor 3RT2015").is_none());
    }
}
