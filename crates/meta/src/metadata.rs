// ABOUTME: Aggregated scrape result with per-provider data partitions and feed links.
// ABOUTME: Accessors apply cross-provider fallback chains via the registry.

use std::sync::Arc;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::providers::{ProviderData, ProviderRegistry, ProviderValues};

static EMPTY_VALUES: Lazy<ProviderValues> = Lazy::new(ProviderValues::new);

/// A discovered RSS/Atom alternate-link record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Feed {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub feed_type: String,
    pub href: String,
}

/// Aggregated, queryable scrape output for one document.
///
/// Holds all scraped key/value data partitioned by provider name, plus an
/// ordered list of discovered feed links. The derived accessors resolve
/// values across providers in priority order through the attached registry.
#[derive(Debug, Clone, Default)]
pub struct Metadata {
    provider_data: ProviderData,
    registry: Option<Arc<ProviderRegistry>>,
    /// Feed links in document order of discovery, duplicates retained.
    pub feeds: Vec<Feed>,
}

impl Metadata {
    /// Creates a result bound to `registry`, with one empty data partition
    /// per registered provider so later lookups never miss a partition.
    pub fn new(registry: Arc<ProviderRegistry>) -> Self {
        let mut provider_data = ProviderData::new();
        for provider in registry.providers() {
            provider_data.insert(provider.name().to_string(), ProviderValues::new());
        }

        Self {
            provider_data,
            registry: Some(registry),
            feeds: Vec::new(),
        }
    }

    /// Appends `value` under `provider_name`/`key`, creating the partition
    /// for provider names that were not registered at construction.
    pub fn add_data(&mut self, provider_name: &str, key: &str, value: &str) {
        self.provider_data
            .entry(provider_name.to_string())
            .or_default()
            .entry(key.to_string())
            .or_default()
            .push(value.to_string());
    }

    fn resolve_value(&self, key: &str) -> Option<String> {
        self.registry
            .as_ref()?
            .resolve_value(key, &self.provider_data)
    }

    /// The page title, falling back to the first heading.
    pub fn title(&self) -> Option<String> {
        self.resolve_value("title")
            .or_else(|| self.resolve_value("firstHeading"))
    }

    /// The page description.
    pub fn description(&self) -> Option<String> {
        self.resolve_value("description")
    }

    /// The page image URL.
    pub fn image(&self) -> Option<String> {
        self.resolve_value("image")
    }

    /// The canonical URL.
    pub fn url(&self) -> Option<String> {
        self.resolve_value("url")
    }

    /// The site name. Twitter uses `site` instead of `site_name`.
    pub fn site_name(&self) -> Option<String> {
        self.resolve_value("site_name")
            .or_else(|| self.resolve_value("site"))
    }

    /// The favicon URL, defaulting to `/favicon.ico` when no icon link was
    /// found. The only accessor with a guaranteed value.
    pub fn favicon(&self) -> String {
        self.resolve_value("icon")
            .or_else(|| self.resolve_value("shortcut icon"))
            .unwrap_or_else(|| "/favicon.ico".to_string())
    }

    /// Raw key/values map for one provider; empty map when absent.
    pub fn provider_data(&self, provider_name: &str) -> &ProviderValues {
        self.provider_data
            .get(provider_name)
            .unwrap_or(&EMPTY_VALUES)
    }

    /// Open Graph partition.
    pub fn open_graph(&self) -> &ProviderValues {
        self.provider_data("openGraph")
    }

    /// Twitter Card partition.
    pub fn twitter_card(&self) -> &ProviderValues {
        self.provider_data("twitter")
    }

    /// Standard meta tag partition.
    pub fn meta(&self) -> &ProviderValues {
        self.provider_data("meta")
    }

    /// Other-elements partition.
    pub fn other(&self) -> &ProviderValues {
        self.provider_data("other")
    }

    /// The full accumulation, partitioned by provider name.
    pub fn raw(&self) -> &ProviderData {
        &self.provider_data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::load_defaults;
    use pretty_assertions::assert_eq;

    fn metadata() -> Metadata {
        Metadata::new(Arc::new(ProviderRegistry::new(load_defaults())))
    }

    #[test]
    fn partitions_are_pre_initialized() {
        let m = metadata();
        assert_eq!(m.raw().len(), 4);
        assert!(m.open_graph().is_empty());
        assert!(m.twitter_card().is_empty());
    }

    #[test]
    fn add_data_preserves_insertion_order() {
        let mut m = metadata();
        m.add_data("openGraph", "image", "first.png");
        m.add_data("openGraph", "image", "second.png");
        assert_eq!(
            m.open_graph().get("image").unwrap(),
            &vec!["first.png".to_string(), "second.png".to_string()]
        );
    }

    #[test]
    fn add_data_creates_ad_hoc_partitions() {
        let mut m = metadata();
        m.add_data("custom", "k", "v");
        assert_eq!(m.provider_data("custom").get("k").unwrap(), &vec!["v".to_string()]);
    }

    #[test]
    fn title_falls_back_to_first_heading() {
        let mut m = metadata();
        m.add_data("openGraph", "title", "T");
        m.add_data("other", "firstHeading", "H");
        assert_eq!(m.title(), Some("T".to_string()));

        let mut m = metadata();
        m.add_data("other", "firstHeading", "H");
        assert_eq!(m.title(), Some("H".to_string()));
    }

    #[test]
    fn site_name_falls_back_to_twitter_site() {
        let mut m = metadata();
        m.add_data("twitter", "site", "@handle");
        assert_eq!(m.site_name(), Some("@handle".to_string()));

        m.add_data("openGraph", "site_name", "Example");
        assert_eq!(m.site_name(), Some("Example".to_string()));
    }

    #[test]
    fn favicon_prefers_icon_then_shortcut_then_default() {
        let mut m = metadata();
        assert_eq!(m.favicon(), "/favicon.ico");

        m.add_data("other", "shortcut icon", "/legacy.ico");
        assert_eq!(m.favicon(), "/legacy.ico");

        m.add_data("other", "icon", "/modern.png");
        assert_eq!(m.favicon(), "/modern.png");
    }

    #[test]
    fn unattached_metadata_resolves_nothing() {
        let mut m = Metadata::default();
        m.add_data("openGraph", "title", "T");
        assert_eq!(m.title(), None);
        assert_eq!(m.favicon(), "/favicon.ico");
    }

    #[test]
    fn provider_data_for_unknown_name_is_empty() {
        let m = metadata();
        assert!(m.provider_data("nope").is_empty());
    }

    #[test]
    fn feed_serialization_omits_missing_title() {
        let feed = Feed {
            title: None,
            feed_type: "application/rss+xml".to_string(),
            href: "/f.xml".to_string(),
        };
        let json = serde_json::to_string(&feed).unwrap();
        assert_eq!(json, r#"{"type":"application/rss+xml","href":"/f.xml"}"#);
    }
}
