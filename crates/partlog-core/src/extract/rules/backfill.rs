//! Category backfill for parts the classification chain left uncategorized.

use super::patterns::BACKFILL_KEYWORDS;
use crate::models::part::Category;

/// Infer a category from keyword evidence and extracted specs.
///
/// Runs only when the classification chain produced no category. Keyword
/// groups are checked in fixed order and the first hit wins; failing that,
/// a spec token carrying a voltage or current unit marks the part as
/// generically electrical.
pub fn backfill_category(lower_text: &str, specs: &[String]) -> Option<Category> {
    for (keywords, category) in BACKFILL_KEYWORDS.iter() {
        if keywords.iter().any(|kw| lower_text.contains(kw)) {
            return Some(*category);
        }
    }

    // Spec tokens keep the label's original case, and unit suffixes are
    // printed upper-case on real labels.
    if specs.iter().any(|s| s.contains('V') || s.contains('A')) {
        return Some(Category::Electrical);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn specs(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_power_supply_keyword() {
        assert_eq!(
            backfill_category("24v power supply unit", &[]),
            Some(Category::PowerSupply)
        );
    }

    #[test]
    fn test_network_module_keywords() {
        assert_eq!(
            backfill_category("ethercat coupler", &[]),
            Some(Category::NetworkModule)
        );
        assert_eq!(
            backfill_category("junction box", &[]),
            Some(Category::NetworkModule)
        );
    }

    #[test]
    fn test_contactor_keywords() {
        assert_eq!(
            backfill_category("motor contactor", &[]),
            Some(Category::Contactor)
        );
        assert_eq!(
            backfill_category("man-mtr-cntlr size 0", &[]),
            Some(Category::Contactor)
        );
    }

    #[test]
    fn test_keyword_order_wins() {
        // "power supply" group is checked before the network group.
        assert_eq!(
            backfill_category("ethercat power supply", &[]),
            Some(Category::PowerSupply)
        );
    }

    #[test]
    fn test_electrical_via_spec_units() {
        assert_eq!(
            backfill_category("nondescript module", &specs(&["24V"])),
            Some(Category::Electrical)
        );
        assert_eq!(
            backfill_category("nondescript module", &specs(&["2A"])),
            Some(Category::Electrical)
        );
    }

    #[test]
    fn test_no_evidence() {
        assert_eq!(backfill_category("mystery item", &[]), None);
        // Pressure-only specs carry no voltage/current unit.
        assert_eq!(backfill_category("mystery item", &specs(&["250 bar"])), None);
    }
}
