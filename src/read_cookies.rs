use cookie::Cookie;

use crate::cookie_jar::CookieJar;
use crate::result::ContextError;

/// Sealed view over the request's cookies.
///
/// Contents are fixed at seal time; later writes through the mutable sink
/// are never reflected here.
#[derive(Debug, Clone)]
pub struct ReadOnlyCookies {
    jar: CookieJar,
}

impl ReadOnlyCookies {
    pub fn seal(jar: CookieJar) -> Self {
        Self { jar }
    }

    /// Last entry named `name` on the incoming request.
    pub fn get(&self, name: &str) -> Option<&Cookie<'static>> {
        self.jar.get(name)
    }

    pub fn get_all(&self) -> &[Cookie<'static>] {
        self.jar.get_all()
    }

    pub fn has(&self, name: &str) -> bool {
        self.jar.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.jar.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jar.is_empty()
    }

    /// Sealed: always fails with [`ContextError::ImmutableCookies`].
    pub fn set(&self, _cookie: Cookie<'static>) -> Result<(), ContextError> {
        Err(ContextError::ImmutableCookies)
    }

    /// Sealed: always fails with [`ContextError::ImmutableCookies`].
    pub fn delete(&self, _name: &str) -> Result<(), ContextError> {
        Err(ContextError::ImmutableCookies)
    }

    /// Sealed: always fails with [`ContextError::ImmutableCookies`].
    pub fn clear(&self) -> Result<(), ContextError> {
        Err(ContextError::ImmutableCookies)
    }
}

#[cfg(test)]
#[path = "read_cookies_test.rs"]
mod read_cookies_test;
