use http::HeaderMap;
use indexmap::IndexMap;

use crate::constants::INTERNAL_HEADERS;
use crate::result::ContextError;

/// Sealed, case-insensitive snapshot of the incoming request headers.
///
/// Internal routing-protocol headers are stripped before sealing. The view
/// never mutates the raw map it was built from; its own mutators exist only
/// to fail loudly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderView {
    entries: IndexMap<String, Vec<String>>,
}

impl HeaderView {
    /// Builds a sealed view from the raw header map.
    pub fn build(raw: &HeaderMap) -> Self {
        let mut entries: IndexMap<String, Vec<String>> = IndexMap::with_capacity(raw.keys_len());

        for (name, value) in raw {
            let name = name.as_str().to_ascii_lowercase();
            if INTERNAL_HEADERS.contains(&name.as_str()) {
                continue;
            }

            let value = String::from_utf8_lossy(value.as_bytes()).into_owned();
            entries.entry(name).or_default().push(value);
        }

        Self { entries }
    }

    /// Combined value for `name`, joining duplicates with `", "`.
    pub fn get(&self, name: &str) -> Option<String> {
        self.entries
            .get(&name.to_ascii_lowercase())
            .map(|values| values.join(", "))
    }

    /// Every value received for `name`, in the order they arrived.
    pub fn get_all(&self, name: &str) -> &[String] {
        self.entries
            .get(&name.to_ascii_lowercase())
            .map_or(&[], Vec::as_slice)
    }

    pub fn has(&self, name: &str) -> bool {
        self.entries.contains_key(&name.to_ascii_lowercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(name, values)` pairs.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }

    /// Sealed: always fails with [`ContextError::ImmutableHeaders`].
    pub fn insert(&self, _name: &str, _value: &str) -> Result<(), ContextError> {
        Err(ContextError::ImmutableHeaders)
    }

    /// Sealed: always fails with [`ContextError::ImmutableHeaders`].
    pub fn append(&self, _name: &str, _value: &str) -> Result<(), ContextError> {
        Err(ContextError::ImmutableHeaders)
    }

    /// Sealed: always fails with [`ContextError::ImmutableHeaders`].
    pub fn delete(&self, _name: &str) -> Result<(), ContextError> {
        Err(ContextError::ImmutableHeaders)
    }
}

#[cfg(test)]
#[path = "headers_test.rs"]
mod headers_test;
