// ABOUTME: Provider trait and shared extraction helpers for metadata providers.
// ABOUTME: Defines MetadataProvider, ScrapedData, and the ProviderData aggregation maps.

//! Metadata extraction providers.
//!
//! A provider is a named, prioritized strategy that recognizes certain DOM
//! element shapes and extracts a single key/value pair from matching
//! elements. Lower priority numbers take precedence, both for element-level
//! dispatch and key-level value resolution (see [`registry`]).

use scraper::ElementRef;
use std::collections::HashMap;

pub mod loader;
pub mod opengraph;
pub mod other_elements;
pub mod registry;
pub mod standard_meta;
pub mod twitter;

pub use loader::{available_providers, load_defaults, load_from_names};
pub use opengraph::OpenGraphProvider;
pub use other_elements::OtherElementsProvider;
pub use registry::{ProviderRegistry, ScrapedElement};
pub use standard_meta::StandardMetaProvider;
pub use twitter::TwitterProvider;

/// Values accumulated by a single provider: key -> insertion-ordered values.
pub type ProviderValues = HashMap<String, Vec<String>>;

/// All accumulated data, partitioned by provider name.
pub type ProviderData = HashMap<String, ProviderValues>;

/// A single key/value pair extracted from one element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapedData {
    pub key: String,
    pub value: String,
}

/// A named, prioritized metadata extraction strategy.
///
/// `can_handle` must return true for every element `scrape` can extract
/// from, but `scrape` may still yield `None` for an element it claims to
/// handle (e.g. a meta tag missing its content attribute). That is not an
/// error, only "no data".
pub trait MetadataProvider: Send + Sync {
    /// The provider's unique name, used as its partition key in [`ProviderData`].
    fn name(&self) -> &str;

    /// The provider's priority. Lower numbers win.
    fn priority(&self) -> i32;

    /// Whether this provider recognizes the given element.
    fn can_handle(&self, el: &ElementRef) -> bool;

    /// Extracts at most one key/value pair from a recognized element.
    fn scrape(&self, el: &ElementRef) -> Option<ScrapedData>;

    /// Resolves a value for `key` from this provider's accumulated values.
    ///
    /// The default implementation returns the first value recorded for the
    /// key, which is what all built-in providers use.
    fn get_value(&self, key: &str, values: &ProviderValues) -> Option<String> {
        values.get(key).and_then(|v| v.first()).cloned()
    }
}

/// Returns an attribute value, or "" when the attribute is absent.
pub(crate) fn attr<'a>(el: &ElementRef<'a>, name: &str) -> &'a str {
    el.value().attr(name).unwrap_or("")
}

/// Concatenated text of all descendant text nodes, trimmed.
pub(crate) fn text_content(el: &ElementRef) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// Shared meta tag extraction used by the OpenGraph, Twitter, and standard
/// meta providers: reads `property`, falling back to `name`; pairs it with
/// `content`; strips `prefix` from the matched attribute to form the key.
/// Yields `None` when either side is empty.
pub(crate) fn scrape_meta_tag(el: &ElementRef, prefix: &str) -> Option<ScrapedData> {
    let mut property = attr(el, "property");
    if property.is_empty() {
        property = attr(el, "name");
    }

    let content = attr(el, "content");

    if property.is_empty() || content.is_empty() {
        return None;
    }

    let key = property.strip_prefix(prefix).unwrap_or(property);

    Some(ScrapedData {
        key: key.to_string(),
        value: content.to_string(),
    })
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
    fn attr_returns_empty_for_missing() {
        let doc = Html::parse_document(r#"<meta name="a" content="b">"#);
        let el = first_element(&doc, "meta");
        assert_eq!(attr(&el, "name"), "a");
        assert_eq!(attr(&el, "property"), "");
    }

    #[test]
    fn text_content_concatenates_and_trims() {
        let doc = Html::parse_document("<h1>  Hello <b>World</b>  </h1>");
        let el = first_element(&doc, "h1");
        assert_eq!(text_content(&el), "Hello World");
    }

    #[test]
    fn scrape_meta_tag_prefers_property_over_name() {
        let doc =
            Html::parse_document(r#"<meta property="og:title" name="other" content="val">"#);
        let el = first_element(&doc, "meta");
        let data = scrape_meta_tag(&el, "og:").unwrap();
        assert_eq!(data.key, "title");
        assert_eq!(data.value, "val");
    }

    #[test]
    fn scrape_meta_tag_falls_back_to_name() {
        let doc = Html::parse_document(r#"<meta name="og:image" content="pic.png">"#);
        let el = first_element(&doc, "meta");
        let data = scrape_meta_tag(&el, "og:").unwrap();
        assert_eq!(data.key, "image");
        assert_eq!(data.value, "pic.png");
    }

    #[test]
    fn scrape_meta_tag_requires_content() {
        let doc = Html::parse_document(r#"<meta property="og:title">"#);
        let el = first_element(&doc, "meta");
        assert!(scrape_meta_tag(&el, "og:").is_none());
    }

    #[test]
    fn scrape_meta_tag_empty_prefix_keeps_key() {
        let doc = Html::parse_document(r#"<meta name="description" content="about">"#);
        let el = first_element(&doc, "meta");
        let data = scrape_meta_tag(&el, "").unwrap();
        assert_eq!(data.key, "description");
    }

    #[test]
    fn default_get_value_returns_first() {
        struct Fixed;
        impl MetadataProvider for Fixed {
            fn name(&self) -> &str {
                "fixed"
            }
            fn priority(&self) -> i32 {
                1
            }
            fn can_handle(&self, _el: &ElementRef) -> bool {
                false
            }
            fn scrape(&self, _el: &ElementRef) -> Option<ScrapedData> {
                None
            }
        }

        let mut values = ProviderValues::new();
        values.insert(
            "title".to_string(),
            vec!["first".to_string(), "second".to_string()],
        );

        let provider = Fixed;
        assert_eq!(provider.get_value("title", &values), Some("first".to_string()));
        assert_eq!(provider.get_value("missing", &values), None);
    }
}
