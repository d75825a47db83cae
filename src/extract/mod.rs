//! Extraction module for contact artifacts
//!
//! Given one fetched page, the extractor produces candidate emails, phone
//! numbers, social-media profile links, and outbound links. Everything here
//! is pure: candidates are deduplicated per page, and the store performs the
//! authoritative dedup against already-recorded artifacts at merge time.

mod emails;
mod links;
mod phones;
mod social;

pub use emails::{domain_email_regex, extract_emails};
pub use links::{anchor_hrefs, resolve_links};
pub use phones::extract_phone_numbers;
pub use social::extract_social_links;

use regex::Regex;
use scraper::Html;
use url::Url;

/// Everything pulled out of a single fetched page
#[derive(Debug, Default, Clone)]
pub struct PageArtifacts {
    /// Emails at the root domain, deduplicated per page
    pub emails: Vec<String>,

    /// Valid US phone numbers in E.164 form, deduplicated per page
    pub phones: Vec<String>,

    /// Social-profile links, at most one per platform, in platform order
    pub social_links: Vec<String>,

    /// Anchor targets resolved against the page's own URL
    pub outbound_links: Vec<String>,
}

/// Per-crawl extractor
///
/// Holds the domain-scoped email pattern so it compiles once for the whole
/// run.
pub struct Extractor {
    email_re: Regex,
}

impl Extractor {
    /// Creates an extractor scoped to a root domain
    pub fn new(root_domain: &str) -> Self {
        Self {
            email_re: domain_email_regex(root_domain),
        }
    }

    /// Extracts contact artifacts and outbound links from one page
    ///
    /// Markup is parsed leniently; whatever structure is parseable is used.
    /// Emails and phones are scanned from the raw body text, social links
    /// from the raw anchor targets, outbound links from anchor targets
    /// resolved against `page_url`.
    pub fn extract(&self, body: &str, page_url: &Url) -> PageArtifacts {
        let document = Html::parse_document(body);
        let hrefs = anchor_hrefs(&document);

        PageArtifacts {
            emails: extract_emails(&self.email_re, body),
            phones: extract_phone_numbers(body),
            social_links: extract_social_links(&hrefs),
            outbound_links: resolve_links(&hrefs, page_url),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_full_page() {
        let html = r#"<html><body>
            <p>Reach us at sales@example.com or (415) 555-2671.</p>
            <a href="/about">About</a>
            <a href="https://www.instagram.com/acme/">Instagram</a>
        </body></html>"#;

        let extractor = Extractor::new("example.com");
        let page_url = Url::parse("https://example.com/").unwrap();
        let artifacts = extractor.extract(html, &page_url);

        assert_eq!(artifacts.emails, vec!["sales@example.com"]);
        assert_eq!(artifacts.phones, vec!["+14155552671"]);
        assert_eq!(
            artifacts.social_links,
            vec!["https://www.instagram.com/acme/"]
        );
        assert!(artifacts
            .outbound_links
            .contains(&"https://example.com/about".to_string()));
    }

    #[test]
    fn test_extract_tolerates_broken_markup() {
        let html = "<html><body><p>info@example.com<div><a href='/x'>";

        let extractor = Extractor::new("example.com");
        let page_url = Url::parse("https://example.com/").unwrap();
        let artifacts = extractor.extract(html, &page_url);

        assert_eq!(artifacts.emails, vec!["info@example.com"]);
        assert_eq!(
            artifacts.outbound_links,
            vec!["https://example.com/x"]
        );
    }
}
