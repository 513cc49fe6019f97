//! Rule-chain label parser.

use tracing::debug;

use crate::models::part::PartDetails;

use super::rules::{
    backfill_category, default_rules, detect_manufacturer, extract_serial, extract_specs,
    ClassifyRule, RuleInput,
};
use super::LabelParser;

/// Parses noisy OCR label text into a [`PartDetails`] through five ordered
/// stages: manufacturer detection, serial detection, part-number/category
/// classification, specification extraction, and category backfill.
///
/// Stateless and side-effect free; a single parser may be shared across
/// threads and calls are idempotent.
pub struct PartLabelParser {
    rules: Vec<Box<dyn ClassifyRule>>,
}

impl PartLabelParser {
    /// Create a parser with the default classification chain.
    pub fn new() -> Self {
        Self {
            rules: default_rules(),
        }
    }

    /// Replace the classification chain. Rules keep their list order and
    /// the first match wins.
    pub fn with_rules(mut self, rules: Vec<Box<dyn ClassifyRule>>) -> Self {
        self.rules = rules;
        self
    }
}

impl Default for PartLabelParser {
    fn default() -> Self {
        Self::new()
    }
}

impl LabelParser for PartLabelParser {
    fn parse(&self, text: &str) -> PartDetails {
        let lower = text.to_lowercase();
        let mut details = PartDetails::default();

        details.manufacturer = detect_manufacturer(&lower);
        details.serial_number = extract_serial(text);

        let input = RuleInput {
            raw: text,
            lower: &lower,
            manufacturer: details.manufacturer,
        };

        if let Some((name, classification)) = self
            .rules
            .iter()
            .find_map(|rule| rule.classify(&input).map(|c| (rule.name(), c)))
        {
            debug!(rule = name, category = %classification.category, "label classified");
            details.category = classification.category;
            details.part_no = classification.part_no;
        }

        details.specs = extract_specs(text);

        if details.category == crate::models::part::Category::Uncategorized {
            if let Some(category) = backfill_category(&lower, &details.specs) {
                details.category = category;
            }
        }

        debug!(
            manufacturer = details.manufacturer_label(),
            part_no = details.part_no_label(),
            category = %details.category,
            "parsed label text ({} chars)",
            text.len()
        );

        details
    }
}

/// Parse label text with the default rule chain.
pub fn extract(text: &str) -> PartDetails {
    PartLabelParser::new().parse(text)
}
