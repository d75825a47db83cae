use serde::{Deserialize, Serialize};

/// The durable crawl record for one root domain.
///
/// Field names and ordering are a stable contract: external collaborators poll
/// the persisted form of this struct for live progress and spreadsheet export.
/// Collections behave as sets (no duplicates) but keep insertion order for
/// output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrawlState {
    /// Phone numbers in E.164 form
    pub phone_numbers: Vec<String>,

    /// Email addresses at the root domain
    pub emails: Vec<String>,

    /// Pages scraped so far
    pub page_urls: Vec<String>,

    /// Social-media profile links, in platform priority order per page
    pub social_media: Vec<String>,

    /// Summary counters
    pub stats: CrawlStats,
}

/// Summary counters carried alongside the artifact collections.
///
/// Each counter equals the length of its collection at every persisted write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrawlStats {
    #[serde(rename = "TOTAL_PAGES_SCRAPED")]
    pub total_pages_scraped: u64,

    #[serde(rename = "EXTRACTED_EMAILS")]
    pub extracted_emails: u64,

    #[serde(rename = "EXTRACTED_PHONE_NUMBERS")]
    pub extracted_phone_numbers: u64,

    #[serde(rename = "TOTAL_SOCIAL_MEDIA_LINKS")]
    pub total_social_media_links: u64,

    /// Elapsed wall-clock seconds of the most recent run
    #[serde(rename = "TIME_TAKEN_TO_SCRAPE")]
    pub time_taken_to_scrape: f64,
}

impl CrawlState {
    /// Creates an empty state with all counters at zero
    pub fn new() -> Self {
        Self {
            phone_numbers: Vec::new(),
            emails: Vec::new(),
            page_urls: Vec::new(),
            social_media: Vec::new(),
            stats: CrawlStats {
                total_pages_scraped: 0,
                extracted_emails: 0,
                extracted_phone_numbers: 0,
                total_social_media_links: 0,
                time_taken_to_scrape: 0.0,
            },
        }
    }

    /// Checks the counter invariant: every counter matches the length of its
    /// collection
    pub fn counters_consistent(&self) -> bool {
        self.stats.total_pages_scraped == self.page_urls.len() as u64
            && self.stats.extracted_emails == self.emails.len() as u64
            && self.stats.extracted_phone_numbers == self.phone_numbers.len() as u64
            && self.stats.total_social_media_links == self.social_media.len() as u64
    }
}

impl Default for CrawlState {
    fn default() -> Self {
        Self::new()
    }
}
