// ABOUTME: Loader for assembling the built-in provider set, whole or by name.
// ABOUTME: Unknown names fail; an empty name list falls back to the defaults.

use crate::error::ScrapeError;

use super::{
    MetadataProvider, OpenGraphProvider, OtherElementsProvider, StandardMetaProvider,
    TwitterProvider,
};

/// The default provider set: all four built-ins.
pub fn load_defaults() -> Vec<Box<dyn MetadataProvider>> {
    vec![
        Box::new(OpenGraphProvider::new()),
        Box::new(TwitterProvider::new()),
        Box::new(StandardMetaProvider::new()),
        Box::new(OtherElementsProvider::new()),
    ]
}

/// Assembles providers from a list of built-in names.
///
/// An unrecognized name fails with [`ScrapeError::UnknownProvider`] and no
/// fallback; an empty list falls back to the full default set.
pub fn load_from_names<S: AsRef<str>>(
    names: &[S],
) -> Result<Vec<Box<dyn MetadataProvider>>, ScrapeError> {
    if names.is_empty() {
        return Ok(load_defaults());
    }

    let mut providers: Vec<Box<dyn MetadataProvider>> = Vec::with_capacity(names.len());
    for name in names {
        let provider: Box<dyn MetadataProvider> = match name.as_ref() {
            "openGraph" => Box::new(OpenGraphProvider::new()),
            "twitter" => Box::new(TwitterProvider::new()),
            "meta" => Box::new(StandardMetaProvider::new()),
            "other" => Box::new(OtherElementsProvider::new()),
            unknown => return Err(ScrapeError::UnknownProvider(unknown.to_string())),
        };
        providers.push(provider);
    }

    Ok(providers)
}

/// Names of the available built-in providers.
pub fn available_providers() -> &'static [&'static str] {
    &["openGraph", "twitter", "meta", "other"]
}
