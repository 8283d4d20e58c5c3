// ABOUTME: Provider for non-meta elements: title, h1, and icon/canonical links.
// ABOUTME: Lowest-priority built-in provider (priority 4).

use scraper::ElementRef;

use super::{attr, text_content, MetadataProvider, ScrapedData};

/// Extracts metadata from `<title>`, `<h1>`, and `<link>` elements whose
/// `rel` is exactly `icon`, `shortcut icon`, or `canonical`.
#[derive(Debug, Default)]
pub struct OtherElementsProvider;

impl OtherElementsProvider {
    pub fn new() -> Self {
        Self
    }
}

impl MetadataProvider for OtherElementsProvider {
    fn name(&self) -> &str {
        "other"
    }

    fn priority(&self) -> i32 {
        4
    }

    fn can_handle(&self, el: &ElementRef) -> bool {
        match el.value().name() {
            "title" | "h1" => true,
            "link" => matches!(attr(el, "rel"), "icon" | "shortcut icon" | "canonical"),
            _ => false,
        }
    }

    fn scrape(&self, el: &ElementRef) -> Option<ScrapedData> {
        if !self.can_handle(el) {
            return None;
        }

        match el.value().name() {
            "title" => {
                let content = text_content(el);
                if content.is_empty() {
                    return None;
                }
                Some(ScrapedData {
                    key: "title".to_string(),
                    value: content,
                })
            }
            "h1" => {
                let content = text_content(el);
                if content.is_empty() {
                    return None;
                }
                Some(ScrapedData {
                    key: "firstHeading".to_string(),
                    value: content,
                })
            }
            "link" => {
                let rel = attr(el, "rel");
                let href = attr(el, "href");
                if rel.is_empty() || href.is_empty() {
                    return None;
                }
                // Canonical links resolve under the `url` key; icons keep
                // their rel value verbatim.
                let key = match rel {
                    "icon" | "shortcut icon" => rel,
                    "canonical" => "url",
                    _ => return None,
                };
                Some(ScrapedData {
                    key: key.to_string(),
                    value: href.to_string(),
                })
            }
            _ => None,
        }
    }
}
