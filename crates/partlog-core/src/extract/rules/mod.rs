//! Rule-based field extractors for industrial part labels.
//!
//! Part number / category classification is an ordered chain of
//! [`ClassifyRule`] objects. The chain is evaluated in list order and
//! short-circuits on the first rule that produces a [`Classification`],
//! which keeps the branches mutually exclusive: a bearing-shaped numeric
//! code is claimed by the bearing rule before a generic alphanumeric
//! pattern can consume it.

pub mod backfill;
pub mod bearing;
pub mod generic;
pub mod hose;
pub mod manufacturer;
pub mod patterns;
pub mod serial;
pub mod specs;

pub use backfill::backfill_category;
pub use bearing::BearingRule;
pub use generic::GenericFormatsRule;
pub use hose::HoseRule;
pub use manufacturer::detect_manufacturer;
pub use serial::extract_serial;
pub use specs::extract_specs;

use crate::models::part::{Category, Manufacturer};

/// Input shared by all classification rules: the raw text, its lower-cased
/// form (computed once), and the already-detected manufacturer.
#[derive(Debug)]
pub struct RuleInput<'a> {
    /// OCR text, verbatim.
    pub raw: &'a str,
    /// Lower-cased OCR text for keyword scans.
    pub lower: &'a str,
    /// Manufacturer detected in an earlier stage, if any.
    pub manufacturer: Option<Manufacturer>,
}

/// Outcome of a classification rule: a category, and possibly a part
/// number. A rule may set the category without finding a part number.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    /// Category this rule assigns.
    pub category: Category,
    /// Part number extracted within this branch, if any.
    pub part_no: Option<String>,
}

/// A single mutually-exclusive classification branch.
pub trait ClassifyRule: Send + Sync {
    /// Rule name for diagnostics.
    fn name(&self) -> &'static str;

    /// Apply the rule; `None` passes evaluation to the next rule in the
    /// chain.
    fn classify(&self, input: &RuleInput<'_>) -> Option<Classification>;
}

/// The default classification chain, in priority order:
/// bearing, hose/fitting, generic vendor formats.
pub fn default_rules() -> Vec<Box<dyn ClassifyRule>> {
    vec![
        Box::new(BearingRule),
        Box::new(HoseRule),
        Box::new(GenericFormatsRule),
    ]
}
