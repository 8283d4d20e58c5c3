// ABOUTME: OpenGraph metadata provider matching og:-prefixed meta tags.
// ABOUTME: Highest-priority built-in provider (priority 1).

use scraper::ElementRef;

use super::{attr, scrape_meta_tag, MetadataProvider, ScrapedData};

/// Prefix carried by Open Graph properties, stripped to form keys.
pub const OG_PREFIX: &str = "og:";

/// Extracts Open Graph metadata from `<meta property="og:...">` tags.
#[derive(Debug, Default)]
pub struct OpenGraphProvider;

impl OpenGraphProvider {
    pub fn new() -> Self {
        Self
    }
}

impl MetadataProvider for OpenGraphProvider {
    fn name(&self) -> &str {
        "openGraph"
    }

    fn priority(&self) -> i32 {
        1
    }

    fn can_handle(&self, el: &ElementRef) -> bool {
        el.value().name() == "meta"
            && (attr(el, "property").starts_with(OG_PREFIX)
                || attr(el, "name").starts_with(OG_PREFIX))
    }

    fn scrape(&self, el: &ElementRef) -> Option<ScrapedData> {
        if !self.can_handle(el) {
            return None;
        }

        scrape_meta_tag(el, OG_PREFIX)
    }
}
