//! Anchor collection and outbound link resolution

use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use url::Url;

static ANCHOR_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a[href]").expect("anchor selector is valid"));

/// Collects the raw href value of every anchor in a document
pub fn anchor_hrefs(document: &Html) -> Vec<String> {
    document
        .select(&ANCHOR_SELECTOR)
        .filter_map(|element| element.value().attr("href"))
        .map(|href| href.trim().to_string())
        .filter(|href| !href.is_empty())
        .collect()
}

/// Resolves anchor targets against the page's own URL
///
/// Relative targets become absolute; unresolvable ones are dropped. Only
/// http(s) results survive, so `mailto:`, `tel:`, and `javascript:` targets
/// fall out here rather than reaching the link filter.
pub fn resolve_links(hrefs: &[String], page_url: &Url) -> Vec<String> {
    hrefs
        .iter()
        .filter_map(|href| page_url.join(href).ok())
        .filter(|resolved| resolved.scheme() == "http" || resolved.scheme() == "https")
        .map(|resolved| resolved.to_string())
        .collect()
}
