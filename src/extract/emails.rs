//! Domain-scoped email extraction
//!
//! Emails are scanned from raw page text, not parsed markup, so addresses in
//! scripts, attributes, or plain text are all caught. Only addresses at the
//! crawl's root domain are ever captured.

use regex::Regex;
use std::collections::HashSet;

/// Builds the email pattern for a root domain
///
/// The domain half of the pattern is fixed to the escaped root domain, so
/// `foo@other.com` never matches a crawl of `example.com`.
pub fn domain_email_regex(root_domain: &str) -> Regex {
    let pattern = format!(r"[a-zA-Z0-9._%+-]+@{}", regex::escape(root_domain));
    Regex::new(&pattern).expect("escaped domain forms a valid pattern")
}

/// Scans text for emails at the root domain, deduplicated in match order
pub fn extract_emails(re: &Regex, text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut found = Vec::new();

    for m in re.find_iter(text) {
        let email = m.as_str().to_string();
        if seen.insert(email.clone()) {
            found.push(email);
        }
    }

    found
}
