// ABOUTME: Twitter Card metadata provider matching twitter:-prefixed meta tags.
// ABOUTME: Second-priority built-in provider (priority 2).

use scraper::ElementRef;

use super::{attr, scrape_meta_tag, MetadataProvider, ScrapedData};

/// Prefix carried by Twitter Card properties, stripped to form keys.
pub const TWITTER_PREFIX: &str = "twitter:";

/// Extracts Twitter Card metadata from `<meta name="twitter:...">` tags.
#[derive(Debug, Default)]
pub struct TwitterProvider;

impl TwitterProvider {
    pub fn new() -> Self {
        Self
    }
}

impl MetadataProvider for TwitterProvider {
    fn name(&self) -> &str {
        "twitter"
    }

    fn priority(&self) -> i32 {
        2
    }

    fn can_handle(&self, el: &ElementRef) -> bool {
        el.value().name() == "meta"
            && (attr(el, "property").starts_with(TWITTER_PREFIX)
                || attr(el, "name").starts_with(TWITTER_PREFIX))
    }

    fn scrape(&self, el: &ElementRef) -> Option<ScrapedData> {
        if !self.can_handle(el) {
            return None;
        }

        scrape_meta_tag(el, TWITTER_PREFIX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    fn first_element<'a>(doc: &'a Html, selector: &str) -> ElementRef<'a> {
        let sel = Selector::parse(selector).unwrap();
        doc.select(&sel).next().unwrap()
    }

    #[test]
    fn identity() {
        let p = TwitterProvider::new();
        assert_eq!(p.name(), "twitter");
        assert_eq!(p.priority(), 2);
    }

    #[test]
    fn handles_twitter_name() {
        let doc = Html::parse_document(r#"<meta name="twitter:card" content="summary">"#);
        let el = first_element(&doc, "meta");
        assert!(TwitterProvider::new().can_handle(&el));
    }

    #[test]
    fn rejects_og_meta() {
        let doc = Html::parse_document(r#"<meta property="og:title" content="T">"#);
        let el = first_element(&doc, "meta");
        assert!(!TwitterProvider::new().can_handle(&el));
    }

    #[test]
    fn scrape_strips_prefix() {
        let doc = Html::parse_document(r#"<meta name="twitter:site" content="@example">"#);
        let el = first_element(&doc, "meta");
        let data = TwitterProvider::new().scrape(&el).unwrap();
        assert_eq!(data.key, "site");
        assert_eq!(data.value, "@example");
    }

    #[test]
    fn scrape_without_content_yields_nothing() {
        let doc = Html::parse_document(r#"<meta name="twitter:card">"#);
        let el = first_element(&doc, "meta");
        assert!(TwitterProvider::new().scrape(&el).is_none());
    }
}
