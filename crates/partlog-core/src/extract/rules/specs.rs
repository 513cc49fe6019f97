//! Technical specification extraction.

use super::patterns::SPEC_PATTERNS;

/// Extract specification tokens (voltages, currents, power, frequency,
/// temperature, pressure ratings, nominal-diameter codes).
///
/// Each pattern scans the raw text independently and may yield several
/// matches. Matches are unioned across patterns in first-occurrence order,
/// then exact-string duplicates are dropped while insertion order is kept.
pub fn extract_specs(text: &str) -> Vec<String> {
    let mut specs: Vec<String> = Vec::new();

    for pattern in SPEC_PATTERNS.iter() {
        for m in pattern.find_iter(text) {
            let token = m.as_str();
            if !specs.iter().any(|s| s == token) {
                specs.push(token.to_string());
            }
        }
    }

    specs
}
