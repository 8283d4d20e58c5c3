// ABOUTME: Error types for metadata scraping operations.
// ABOUTME: Provides ScrapeError enum with NilDocument and UnknownProvider variants.

use thiserror::Error;

/// Errors that can occur while assembling providers or scraping a document.
///
/// Missing attributes, empty content, and keys absent from every provider
/// are not errors; they surface as `None` from the relevant accessor.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Scrape was invoked without a parsed document.
    #[error("HTML document cannot be nil")]
    NilDocument,

    /// A provider was requested by a name outside the known set.
    #[error("unknown provider: {0}")]
    UnknownProvider(String),
}
