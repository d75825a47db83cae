use url::Url;

/// Strips a single leading "www." label from a host
///
/// # Examples
///
/// ```
/// use contact_sweep::url::strip_www;
///
/// assert_eq!(strip_www("www.example.com"), "example.com");
/// assert_eq!(strip_www("example.com"), "example.com");
/// assert_eq!(strip_www("www2.example.com"), "www2.example.com");
/// ```
pub fn strip_www(host: &str) -> &str {
    host.strip_prefix("www.").unwrap_or(host)
}

/// Derives the crawl's root domain from a URL
///
/// The root domain is the host, lowercased, with any leading "www." stripped.
/// It scopes both crawl-target admission and email matching, and names the
/// durable record. Returns `None` if the URL has no host.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use contact_sweep::url::root_domain;
///
/// let url = Url::parse("https://www.Example.com/about").unwrap();
/// assert_eq!(root_domain(&url), Some("example.com".to_string()));
/// ```
pub fn root_domain(url: &Url) -> Option<String> {
    url.host_str()
        .map(|h| strip_www(&h.to_lowercase()).to_string())
}
