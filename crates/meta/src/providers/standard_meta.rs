// ABOUTME: Standard meta tag provider for unprefixed name/property meta tags.
// ABOUTME: Third-priority built-in provider (priority 3).

use scraper::ElementRef;

use super::opengraph::OG_PREFIX;
use super::twitter::TWITTER_PREFIX;
use super::{attr, scrape_meta_tag, MetadataProvider, ScrapedData};

/// Extracts standard metadata from `<meta>` tags carrying a `name` or
/// `property` attribute that is neither Open Graph nor Twitter prefixed.
#[derive(Debug, Default)]
pub struct StandardMetaProvider;

impl StandardMetaProvider {
    pub fn new() -> Self {
        Self
    }
}

impl MetadataProvider for StandardMetaProvider {
    fn name(&self) -> &str {
        "meta"
    }

    fn priority(&self) -> i32 {
        3
    }

    fn can_handle(&self, el: &ElementRef) -> bool {
        if el.value().name() != "meta" {
            return false;
        }

        let name = attr(el, "name");
        let property = attr(el, "property");

        (!name.is_empty() || !property.is_empty())
            && !name.starts_with(OG_PREFIX)
            && !name.starts_with(TWITTER_PREFIX)
            && !property.starts_with(OG_PREFIX)
            && !property.starts_with(TWITTER_PREFIX)
    }

    fn scrape(&self, el: &ElementRef) -> Option<ScrapedData> {
        if !self.can_handle(el) {
            return None;
        }

        // No prefix to strip; keys are kept verbatim.
        scrape_meta_tag(el, "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use scraper::{Html, Selector};

    fn first_element<'a>(doc: &'a Html, selector: &str) -> ElementRef<'a> {
        let sel = Selector::parse(selector).unwrap();
        doc.select(&sel).next().unwrap()
    }

    #[test]
    fn identity() {
        let p = StandardMetaProvider::new();
        assert_eq!(p.name(), "meta");
        assert_eq!(p.priority(), 3);
    }

    #[test]
    fn handles_named_meta() {
        let doc = Html::parse_document(r#"<meta name="description" content="d">"#);
        let el = first_element(&doc, "meta");
        assert!(StandardMetaProvider::new().can_handle(&el));
    }

    #[test]
    fn handles_property_meta() {
        let doc = Html::parse_document(r#"<meta property="article:author" content="a">"#);
        let el = first_element(&doc, "meta");
        assert!(StandardMetaProvider::new().can_handle(&el));
    }

    #[test]
    fn rejects_prefixed_meta() {
        let og = Html::parse_document(r#"<meta property="og:title" content="T">"#);
        let tw = Html::parse_document(r#"<meta name="twitter:card" content="summary">"#);
        let p = StandardMetaProvider::new();
        assert!(!p.can_handle(&first_element(&og, "meta")));
        assert!(!p.can_handle(&first_element(&tw, "meta")));
    }

    #[test]
    fn rejects_attributeless_meta() {
        let doc = Html::parse_document(r#"<meta charset="utf-8">"#);
        let el = first_element(&doc, "meta");
        assert!(!StandardMetaProvider::new().can_handle(&el));
    }

    #[test]
    fn scrape_keeps_key_verbatim() {
        let doc = Html::parse_document(r#"<meta name="description" content="about us">"#);
        let el = first_element(&doc, "meta");
        let data = StandardMetaProvider::new().scrape(&el).unwrap();
        assert_eq!(data.key, "description");
        assert_eq!(data.value, "about us");
    }
}
