// ABOUTME: Main library entry point for the pagemeta metadata scraper.
// ABOUTME: Re-exports the public API: Scraper, Metadata, Feed, ProviderRegistry, ScrapeError.

//! pagemeta - structured metadata extraction from parsed HTML documents.
//!
//! This crate extracts titles, descriptions, images, Open Graph tags,
//! Twitter Card tags, canonical URLs, favicons, and RSS/Atom feed links
//! from a document parsed with [`scraper`], using a prioritized set of
//! pluggable extraction providers.
//!
//! # Example
//!
//! ```
//! use pagemeta::Scraper;
//! use scraper::Html;
//!
//! let doc = Html::parse_document(
//!     r#"<head><meta property="og:title" content="Hello"></head>"#,
//! );
//! let result = Scraper::with_defaults().scrape(Some(&doc)).unwrap();
//! assert_eq!(result.title().as_deref(), Some("Hello"));
//! ```

pub mod engine;
pub mod error;
pub mod metadata;
pub mod providers;

pub use crate::engine::{scrape_document, scrape_document_with_names, Scraper};
pub use crate::error::ScrapeError;
pub use crate::metadata::{Feed, Metadata};
pub use crate::providers::{
    available_providers, load_defaults, load_from_names, MetadataProvider, OpenGraphProvider,
    OtherElementsProvider, ProviderData, ProviderRegistry, ProviderValues, ScrapedData,
    ScrapedElement, StandardMetaProvider, TwitterProvider,
};
