//! Frontier admission predicate and the social-link clean transform

use crate::url::strip_www;
use url::Url;

/// Path extensions that mark a URL as a non-HTML asset
const SKIP_EXTENSIONS: [&str; 11] = [
    ".jpg", ".jpeg", ".png", ".gif", ".pdf", ".docx", ".zip", ".mp4", ".mp3", ".webp", ".webm",
];

/// Decides whether a URL is an acceptable internal crawl target
///
/// A candidate is accepted iff all of the following hold:
///
/// 1. the raw URL string contains none of `#`, `?`, `&` — URLs carrying a
///    query string or fragment are rejected outright, not normalized away
/// 2. its host, with any leading "www." stripped, equals the root domain
/// 3. its path does not end in a known non-HTML extension
///
/// # Arguments
///
/// * `raw` - The absolute URL string to test
/// * `root` - The crawl's root domain (lowercase, no leading "www.")
pub fn is_internal_link(raw: &str, root: &str) -> bool {
    if raw.contains(['#', '?', '&']) {
        return false;
    }

    let Ok(parsed) = Url::parse(raw) else {
        return false;
    };
    let Some(host) = parsed.host_str() else {
        return false;
    };
    if strip_www(&host.to_lowercase()) != root {
        return false;
    }

    let path = parsed.path().to_lowercase();
    !SKIP_EXTENSIONS.iter().any(|ext| path.ends_with(ext))
}

/// Strips query and fragment from a URL, keeping scheme, host, and path
///
/// Used only when comparing social-link candidates; frontier admission goes
/// through [`is_internal_link`] instead. Returns `None` for unparseable
/// input.
pub fn clean_url(raw: &str) -> Option<String> {
    let mut url = Url::parse(raw.trim()).ok()?;
    url.set_query(None);
    url.set_fragment(None);
    Some(url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_internal_page() {
        assert!(is_internal_link("https://example.com/about", "example.com"));
    }

    #[test]
    fn test_accepts_www_variant() {
        assert!(is_internal_link(
            "https://www.example.com/about",
            "example.com"
        ));
    }

    #[test]
    fn test_rejects_query_string() {
        assert!(!is_internal_link(
            "https://example.com/about?x=1",
            "example.com"
        ));
    }

    #[test]
    fn test_rejects_fragment() {
        assert!(!is_internal_link(
            "https://example.com/about#team",
            "example.com"
        ));
    }

    #[test]
    fn test_rejects_ampersand_anywhere() {
        assert!(!is_internal_link(
            "https://example.com/a&b",
            "example.com"
        ));
    }

    #[test]
    fn test_rejects_subdomain() {
        assert!(!is_internal_link(
            "https://sub.example.com/about",
            "example.com"
        ));
    }

    #[test]
    fn test_rejects_other_domain() {
        assert!(!is_internal_link("https://other.com/about", "example.com"));
    }

    #[test]
    fn test_rejects_asset_extensions() {
        for url in [
            "https://example.com/logo.png",
            "https://example.com/brochure.pdf",
            "https://example.com/intro.mp4",
            "https://example.com/photo.JPG",
        ] {
            assert!(!is_internal_link(url, "example.com"), "accepted {url}");
        }
    }

    #[test]
    fn test_rejects_relative_url() {
        assert!(!is_internal_link("/about", "example.com"));
    }

    #[test]
    fn test_accepts_host_with_port() {
        assert!(is_internal_link("http://127.0.0.1:8080/about", "127.0.0.1"));
    }

    #[test]
    fn test_clean_url_strips_query_and_fragment() {
        assert_eq!(
            clean_url("https://www.instagram.com/acme/?hl=en#top"),
            Some("https://www.instagram.com/acme/".to_string())
        );
    }

    #[test]
    fn test_clean_url_keeps_plain_url() {
        assert_eq!(
            clean_url("https://www.facebook.com/acme"),
            Some("https://www.facebook.com/acme".to_string())
        );
    }

    #[test]
    fn test_clean_url_rejects_relative() {
        assert_eq!(clean_url("/contact"), None);
    }
}
