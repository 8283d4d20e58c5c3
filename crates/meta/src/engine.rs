// ABOUTME: Scraping engine walking the DOM once per targeted tag family.
// ABOUTME: Accumulates registry hits and feed links into a Metadata result.

//! The scraping engine.
//!
//! A [`Scraper`] executes five depth-first passes over the parsed document,
//! in fixed order: meta tags, the title tag, h1 headings, link tags with a
//! `rel` attribute, and feed links. Each pass forwards matching elements to
//! the provider registry and records hits in the [`Metadata`] result.
//!
//! The link and feed passes both visit `<link>` elements: a
//! `<link rel="alternate">` is seen by the provider pass (where no built-in
//! claims it) and again by the feed pass.

use std::sync::Arc;

use ego_tree::NodeRef;
use scraper::{ElementRef, Html, Node};
use tracing::debug;

use crate::error::ScrapeError;
use crate::metadata::{Feed, Metadata};
use crate::providers::{load_defaults, load_from_names, MetadataProvider, ProviderRegistry};

/// The metadata scraping engine.
///
/// Engines hold only a registry reference and are cheap to construct; use
/// one engine per concurrent scrape.
pub struct Scraper {
    registry: Arc<ProviderRegistry>,
}

impl Scraper {
    /// Creates a scraper owning the given registry.
    pub fn new(registry: ProviderRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    /// Creates a scraper sharing an existing registry.
    pub fn with_registry(registry: Arc<ProviderRegistry>) -> Self {
        Self { registry }
    }

    /// Creates a scraper with the default built-in providers.
    pub fn with_defaults() -> Self {
        Self::new(ProviderRegistry::new(load_defaults()))
    }

    /// Creates a scraper with a custom provider list.
    pub fn with_providers(providers: Vec<Box<dyn MetadataProvider>>) -> Self {
        Self::new(ProviderRegistry::new(providers))
    }

    /// Creates a scraper from built-in provider names; an empty slice
    /// selects the full default set.
    pub fn with_provider_names<S: AsRef<str>>(names: &[S]) -> Result<Self, ScrapeError> {
        Ok(Self::new(ProviderRegistry::new(load_from_names(names)?)))
    }

    /// The registry backing this scraper.
    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    /// Extracts metadata from a parsed document.
    ///
    /// `None` fails with [`ScrapeError::NilDocument`] and yields no partial
    /// result. Otherwise every key/value any provider recognized ends up in
    /// the returned [`Metadata`], partitioned by provider name.
    pub fn scrape(&self, doc: Option<&Html>) -> Result<Metadata, ScrapeError> {
        let doc = doc.ok_or(ScrapeError::NilDocument)?;

        let mut result = Metadata::new(Arc::clone(&self.registry));

        self.scrape_meta_tags(doc, &mut result);
        self.scrape_title_tag(doc, &mut result);
        self.scrape_heading_tags(doc, &mut result);
        self.scrape_link_tags(doc, &mut result);
        self.scrape_feed_links(doc, &mut result);

        Ok(result)
    }

    fn scrape_meta_tags(&self, doc: &Html, result: &mut Metadata) {
        let mut hits = 0usize;
        for_each_element(doc.tree.root(), &mut |el| {
            if el.value().name() == "meta" {
                hits += usize::from(self.scrape_from_element(&el, result));
            }
        });
        debug!(pass = "meta", hits, "pass complete");
    }

    fn scrape_title_tag(&self, doc: &Html, result: &mut Metadata) {
        let mut hits = 0usize;
        for_each_element(doc.tree.root(), &mut |el| {
            if el.value().name() == "title" {
                hits += usize::from(self.scrape_from_element(&el, result));
            }
        });
        debug!(pass = "title", hits, "pass complete");
    }

    fn scrape_heading_tags(&self, doc: &Html, result: &mut Metadata) {
        let mut hits = 0usize;
        for_each_element(doc.tree.root(), &mut |el| {
            if el.value().name() == "h1" {
                hits += usize::from(self.scrape_from_element(&el, result));
            }
        });
        debug!(pass = "heading", hits, "pass complete");
    }

    fn scrape_link_tags(&self, doc: &Html, result: &mut Metadata) {
        let mut hits = 0usize;
        for_each_element(doc.tree.root(), &mut |el| {
            if el.value().name() == "link" && el.value().attr("rel").is_some() {
                hits += usize::from(self.scrape_from_element(&el, result));
            }
        });
        debug!(pass = "link", hits, "pass complete");
    }

    fn scrape_feed_links(&self, doc: &Html, result: &mut Metadata) {
        for_each_element(doc.tree.root(), &mut |el| {
            if el.value().name() != "link" || el.value().attr("rel") != Some("alternate") {
                return;
            }

            let href = el.value().attr("href").unwrap_or("");
            if href.is_empty() {
                return;
            }

            let title = el
                .value()
                .attr("title")
                .filter(|t| !t.is_empty())
                .map(str::to_string);
            let feed_type = el.value().attr("type").unwrap_or("").to_string();

            result.feeds.push(Feed {
                title,
                feed_type,
                href: href.to_string(),
            });
        });
        debug!(feeds = result.feeds.len(), "feed pass complete");
    }

    fn scrape_from_element(&self, el: &ElementRef, result: &mut Metadata) -> bool {
        match self.registry.scrape_from_element(el) {
            Some(hit) => {
                result.add_data(hit.provider.name(), &hit.data.key, &hit.data.value);
                true
            }
            None => false,
        }
    }
}

/// Depth-first walk from `node`, visiting every element in document order.
fn for_each_element<'a, F: FnMut(ElementRef<'a>)>(node: NodeRef<'a, Node>, visit: &mut F) {
    if let Some(el) = ElementRef::wrap(node) {
        visit(el);
    }
    for child in node.children() {
        for_each_element(child, &mut *visit);
    }
}

/// Scrapes a document with the default providers.
pub fn scrape_document(doc: Option<&Html>) -> Result<Metadata, ScrapeError> {
    Scraper::with_defaults().scrape(doc)
}

/// Scrapes a document with providers selected by built-in name.
pub fn scrape_document_with_names<S: AsRef<str>>(
    doc: Option<&Html>,
    names: &[S],
) -> Result<Metadata, ScrapeError> {
    Scraper::with_provider_names(names)?.scrape(doc)
}
