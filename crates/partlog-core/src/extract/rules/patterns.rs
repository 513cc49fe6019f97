//! Regex patterns and keyword tables for label field extraction.
//!
//! Everything here is ordered data: rules scan these tables in sequence, so
//! adding or reordering an entry changes priority without touching
//! extraction logic. The expressions are deliberately permissive about
//! case, punctuation, and whitespace because OCR output is noisy; false
//! positives are traded against recall.

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::part::Category;

lazy_static! {
    // Serial number after a "Ser.Nr." label, punctuation-tolerant.
    pub static ref SERIAL_NUMBER: Regex = Regex::new(
        r"(?i)Ser\.?\s*Nr\.?\s*:?\s*(\S+)"
    ).unwrap();

    // Bearing codes: 4-5 digit numeric with an optional sealing suffix.
    // The suffix alternation is literal; the hyphen before it is optional.
    pub static ref BEARING_CODE: Regex = Regex::new(
        r"(?i)\b(\d{4,5}(?:-?2RS|-?ZZ)?)\b"
    ).unwrap();

    // Hose/fitting part numbers: alphanumeric-and-hyphen, 6+ characters.
    // Case-sensitive: hose part codes are printed upper-case.
    pub static ref HOSE_PART: Regex = Regex::new(
        r"\b([A-Z0-9-]{6,})\b"
    ).unwrap();

    // Generic part number formats, one per vendor numbering convention,
    // tried in order. First match wins.
    pub static ref GENERIC_PART_FORMATS: Vec<Regex> = vec![
        // Beckhoff EtherCAT couplers/junctions (EK1100)
        Regex::new(r"(?i)\b(EK\d{4})\b").unwrap(),
        // PULS power supplies (QS10.241)
        Regex::new(r"(?i)\b(QS\d{1,2}\.\d{3})\b").unwrap(),
        // Telemecanique spaced numeric codes (0298 530 01 16)
        Regex::new(r"\b\d{4}\s\d{3}\s\d{2}\s\d{2}\b").unwrap(),
        // Siemens contactors (3RT2015-1BB41)
        Regex::new(r"(?i)\b3RT[A-Z0-9-]+\b").unwrap(),
        // Catch-all letters-then-digits vendor code
        Regex::new(r"(?i)\b([A-Z]{2,3}\d{2,}[A-Z0-9-]*)\b").unwrap(),
    ];

    // Technical specification tokens, scanned globally over the raw text.
    pub static ref SPEC_PATTERNS: Vec<Regex> = vec![
        // Unit-suffixed electrical/thermal values (24V, 2.5A, 0,75KW, 50HZ, 80°C, 24DC)
        Regex::new(r"(?i)\b\d+[.,]?\d*\s*(V|A|KW|HZ|°C|DC)\b").unwrap(),
        // Nominal diameter / pressure class codes (DN50, PN 16)
        Regex::new(r"(?i)\b(DN\s*\d+|PN\s*\d+)\b").unwrap(),
        // Pressure values (250 bar, 3000psi)
        Regex::new(r"(?i)\b(\d+\s*bar|\d+\s*psi)\b").unwrap(),
    ];
}

/// Keywords that route a label into the hose/fitting branch. Substring
/// matched against the lower-cased text.
pub const HOSE_KEYWORDS: [&str; 3] = ["hose", "dn", "pn"];

/// Evidence keywords for category backfill, in priority order. The first
/// group with any matching keyword wins.
pub const BACKFILL_KEYWORDS: [(&[&str], Category); 3] = [
    (&["power supply"], Category::PowerSupply),
    (&["junction", "ethercat"], Category::NetworkModule),
    (&["contactor", "man-mtr-cntlr"], Category::Contactor),
];
