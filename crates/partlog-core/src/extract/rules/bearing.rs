//! Bearing classification rule.

use super::patterns::BEARING_CODE;
use super::{Classification, ClassifyRule, RuleInput};
use crate::models::part::Category;

/// Classifies rolling bearings: a 4-5 digit code with an optional sealing
/// suffix (2RS or ZZ, hyphen optional), backed up by either the word
/// "bearing" in the text or a known bearing manufacturer.
///
/// Both conditions are required. A bare numeric code without bearing
/// context falls through to the later rules, where it may still end up as
/// a generic or uncategorized part.
pub struct BearingRule;

impl ClassifyRule for BearingRule {
    fn name(&self) -> &'static str {
        "bearing"
    }

    fn classify(&self, input: &RuleInput<'_>) -> Option<Classification> {
        let code = BEARING_CODE.captures(input.raw)?;

        let has_context = input.lower.contains("bearing")
            || input
                .manufacturer
                .map(|m| m.is_bearing_maker())
                .unwrap_or(false);
        if !has_context {
            return None;
        }

        Some(Classification {
            category: Category::Bearing,
            part_no: Some(code[1].to_uppercase()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::part::Manufacturer;

    fn input<'a>(raw: &'a str, lower: &'a str, m: Option<Manufacturer>) -> RuleInput<'a> {
        RuleInput {
            raw,
            lower,
            manufacturer: m,
        }
    }

    #[test]
    fn test_code_with_bearing_word() {
        let result = BearingRule
            .classify(&input(
                "Deep groove Bearing 6205-2rs",
                "deep groove bearing 6205-2rs",
                None,
            ))
            .unwrap();
        // Matched token is upper-cased.
        assert_eq!(result.category, Category::Bearing);
        assert_eq!(result.part_no.as_deref(), Some("6205-2RS"));
    }

    #[test]
    fn test_code_with_bearing_manufacturer() {
        let result = BearingRule
            .classify(&input("FAG 22216", "fag 22216", Some(Manufacturer::Fag)))
            .unwrap();
        assert_eq!(result.category, Category::Bearing);
        assert_eq!(result.part_no.as_deref(), Some("22216"));
    }

    #[test]
    fn test_code_without_context_passes() {
        assert!(BearingRule
            .classify(&input("item 6205", "item 6205", None))
            .is_none());
        assert!(BearingRule
            .classify(&input("siemens 6205", "siemens 6205", Some(Manufacturer::Siemens)))
            .is_none());
    }

    #[test]
    fn test_context_without_code_passes() {
        assert!(BearingRule
            .classify(&input("SKF bearing, code unreadable", "skf bearing, code unreadable", Some(Manufacturer::Skf)))
            .is_none());
    }
}
