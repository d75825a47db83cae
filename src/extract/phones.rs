//! US phone number extraction
//!
//! A candidate regex finds phone-shaped substrings under US formatting
//! conventions; each candidate must independently pass libphonenumber
//! validation before it is accepted and normalized to E.164. The candidate
//! scan is deliberately loose — validation is the gate.

use once_cell::sync::Lazy;
use phonenumber::country::Id;
use phonenumber::Mode;
use regex::Regex;
use std::collections::HashSet;

// Optional +1/1 country prefix, then 3-3-4 digit groups with common separators
static CANDIDATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:\+?1[\s.\-]?)?\(?\d{3}\)?[\s.\-]?\d{3}[\s.\-]?\d{4}")
        .expect("phone candidate pattern is valid")
});

/// Scans text for valid US phone numbers, normalized to E.164
///
/// Candidates that fail validation (impossible area codes, wrong lengths)
/// yield no extraction. Results are deduplicated in match order, so the same
/// number written two ways appears once.
pub fn extract_phone_numbers(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut found = Vec::new();

    for m in CANDIDATE_RE.find_iter(text) {
        let Ok(parsed) = phonenumber::parse(Some(Id::US), m.as_str()) else {
            continue;
        };
        if !phonenumber::is_valid(&parsed) {
            continue;
        }

        let e164 = parsed.format().mode(Mode::E164).to_string();
        if seen.insert(e164.clone()) {
            found.push(e164);
        }
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_formatted_us_number() {
        assert_eq!(
            extract_phone_numbers("Call us at (415) 555-2671 today"),
            vec!["+14155552671"]
        );
    }

    #[test]
    fn test_extracts_number_with_country_code() {
        assert_eq!(
            extract_phone_numbers("dial +1 415 555 2671 now"),
            vec!["+14155552671"]
        );
    }

    #[test]
    fn test_extracts_dotted_number() {
        assert_eq!(
            extract_phone_numbers("fax: 415.555.2671"),
            vec!["+14155552671"]
        );
    }

    #[test]
    fn test_invalid_area_code_yields_nothing() {
        // NANP area codes cannot start with 0 or 1
        assert!(extract_phone_numbers("id 123-456-7890").is_empty());
        assert!(extract_phone_numbers("ref 012-345-6789").is_empty());
    }

    #[test]
    fn test_same_number_two_formats_deduplicated() {
        let text = "(415) 555-2671 or 415.555.2671";
        assert_eq!(extract_phone_numbers(text), vec!["+14155552671"]);
    }

    #[test]
    fn test_multiple_distinct_numbers() {
        let text = "SF: (415) 555-2671, NY: (212) 555-0142";
        assert_eq!(
            extract_phone_numbers(text),
            vec!["+14155552671", "+12125550142"]
        );
    }

    #[test]
    fn test_plain_prose_yields_nothing() {
        assert!(extract_phone_numbers("no numbers to see here").is_empty());
    }
}
