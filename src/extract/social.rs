//! Social-media profile link extraction
//!
//! Anchor targets are cleaned (query and fragment stripped) and tested
//! against an ordered table of per-platform URL shapes. Per page, only the
//! first match per platform is kept, and results come out in platform
//! priority order.

use crate::url::clean_url;
use once_cell::sync::Lazy;
use regex::Regex;

/// Platform slots, in output priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Platform {
    Instagram = 0,
    LinkedIn = 1,
    Pinterest = 2,
    Youtube = 3,
    Twitter = 4,
    Facebook = 5,
}

const PLATFORM_COUNT: usize = 6;

// Profile URL shapes. Both YouTube shapes collapse into the one youtube slot.
static PLATFORM_PATTERNS: Lazy<Vec<(Platform, Regex)>> = Lazy::new(|| {
    [
        (
            Platform::Instagram,
            r"^https://www\.instagram\.com/[a-z0-9._%+-]+/?$",
        ),
        (
            Platform::LinkedIn,
            r"^https://www\.linkedin\.com/(?:company|in)/[a-z0-9._%+-]+/?$",
        ),
        (
            Platform::Pinterest,
            r"^https://www\.pinterest\.com/[a-z0-9._%+-]+/?$",
        ),
        (
            Platform::Youtube,
            r"^https://www\.youtube\.com/c/[a-zA-Z0-9._%+-]+/?$",
        ),
        (
            Platform::Youtube,
            r"^https://www\.youtube\.com/@[a-zA-Z0-9._%+-]+/?$",
        ),
        (
            Platform::Twitter,
            r"^https://(?:www\.)?twitter\.com/[a-zA-Z0-9._%+-]+/?$",
        ),
        (
            Platform::Facebook,
            r"^https://www\.facebook\.com/[a-zA-Z0-9._%+-]+/?$",
        ),
    ]
    .into_iter()
    .map(|(platform, pattern)| {
        (
            platform,
            Regex::new(pattern).expect("platform pattern is valid"),
        )
    })
    .collect()
});

/// Picks social-profile links out of a page's anchor targets
///
/// Each target is cleaned before matching. The first matching URL per
/// platform wins for this page; the store still deduplicates the returned
/// URLs against everything recorded on earlier pages.
pub fn extract_social_links(hrefs: &[String]) -> Vec<String> {
    let mut slots: [Option<String>; PLATFORM_COUNT] = Default::default();

    for href in hrefs {
        let Some(cleaned) = clean_url(href) else {
            continue;
        };

        for (platform, re) in PLATFORM_PATTERNS.iter() {
            let slot = &mut slots[*platform as usize];
            if slot.is_none() && re.is_match(&cleaned) {
                *slot = Some(cleaned.clone());
            }
        }
    }

    slots.into_iter().flatten().collect()
}
