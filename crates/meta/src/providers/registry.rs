// ABOUTME: Priority-ordered provider registry with element dispatch and value resolution.
// ABOUTME: Providers are stable-sorted ascending by priority on construction and mutation.

use std::fmt;

use scraper::ElementRef;

use super::{MetadataProvider, ProviderData, ScrapedData};

/// A successful element-level extraction: which provider fired and what it
/// produced.
pub struct ScrapedElement<'a> {
    pub provider: &'a dyn MetadataProvider,
    pub data: ScrapedData,
}

/// Ordered collection of providers with priority-based dispatch.
///
/// The registry is read-only during a scrape and may be shared across
/// engine instances; mutation must not overlap an in-flight scrape.
pub struct ProviderRegistry {
    providers: Vec<Box<dyn MetadataProvider>>,
}

impl ProviderRegistry {
    /// Builds a registry from `providers`, stable-sorted ascending by
    /// priority. Equal priorities keep their relative input order.
    pub fn new(mut providers: Vec<Box<dyn MetadataProvider>>) -> Self {
        providers.sort_by_key(|p| p.priority());
        Self { providers }
    }

    /// All registered providers in priority order.
    pub fn providers(&self) -> &[Box<dyn MetadataProvider>] {
        &self.providers
    }

    /// Attempts to extract metadata from `el` using the registered providers.
    ///
    /// The first provider whose `can_handle` accepts the element gets the
    /// only attempt: if its `scrape` yields nothing, the element is skipped
    /// entirely rather than offered to lower-priority providers. Fallback
    /// across providers happens per key in [`resolve_value`], not here.
    ///
    /// [`resolve_value`]: ProviderRegistry::resolve_value
    pub fn scrape_from_element(&self, el: &ElementRef) -> Option<ScrapedElement<'_>> {
        let provider = self.providers.iter().find(|p| p.can_handle(el))?;
        provider.scrape(el).map(|data| ScrapedElement {
            provider: provider.as_ref(),
            data,
        })
    }

    /// Resolves a value for `key` by asking each provider, in priority
    /// order, against its own partition of `provider_data`. First hit wins.
    pub fn resolve_value(&self, key: &str, provider_data: &ProviderData) -> Option<String> {
        for provider in &self.providers {
            if let Some(values) = provider_data.get(provider.name()) {
                if let Some(value) = provider.get_value(key, values) {
                    return Some(value);
                }
            }
        }
        None
    }

    /// Adds a provider and re-sorts by priority.
    pub fn add_provider(&mut self, provider: Box<dyn MetadataProvider>) {
        self.providers.push(provider);
        self.providers.sort_by_key(|p| p.priority());
    }

    /// Removes the first provider with the given name, if any.
    pub fn remove_provider(&mut self, name: &str) {
        if let Some(pos) = self.providers.iter().position(|p| p.name() == name) {
            self.providers.remove(pos);
        }
    }

    /// Looks up a provider by name, first match in priority order.
    pub fn get_provider(&self, name: &str) -> Option<&dyn MetadataProvider> {
        self.providers
            .iter()
            .find(|p| p.name() == name)
            .map(|p| p.as_ref())
    }
}

impl fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field(
                "providers",
                &self.providers.iter().map(|p| p.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
