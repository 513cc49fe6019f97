//! Serial number extraction.

use super::patterns::SERIAL_NUMBER;

/// Extract a serial number: the non-space token following a "Ser.Nr."
/// label, captured verbatim. The label match is case-insensitive and
/// tolerates missing dots and colons.
pub fn extract_serial(text: &str) -> Option<String> {
    SERIAL_NUMBER
        .captures(text)
        .map(|caps| caps[1].to_string())
}
