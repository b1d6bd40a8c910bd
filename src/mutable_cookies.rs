use std::sync::{Mutex, MutexGuard, PoisonError};

use cookie::Cookie;

use crate::cookie_jar::CookieJar;
use crate::options::CookieUpdateFn;

/// Mutable cookie sink for the request.
///
/// Every mutation updates the jar and synchronously reports the full
/// serialized `Set-Cookie` list to the registered hook; consumers replace
/// their outgoing `Set-Cookie` values rather than appending.
pub struct MutableCookies {
    jar: Mutex<CookieJar>,
    on_change: Option<CookieUpdateFn>,
}

impl MutableCookies {
    pub fn new(jar: CookieJar, on_change: Option<CookieUpdateFn>) -> Self {
        Self {
            jar: Mutex::new(jar),
            on_change,
        }
    }

    /// Last stored entry named `name`, cloned out of the jar.
    pub fn get(&self, name: &str) -> Option<Cookie<'static>> {
        self.lock().get(name).cloned()
    }

    pub fn get_all(&self) -> Vec<Cookie<'static>> {
        self.lock().get_all().to_vec()
    }

    pub fn has(&self, name: &str) -> bool {
        self.lock().get(name).is_some()
    }

    /// Stores `cookie` and reports the updated `Set-Cookie` list.
    pub fn set(&self, cookie: Cookie<'static>) {
        let mut jar = self.lock();
        jar.set(cookie);
        self.notify(&jar);
    }

    /// Replaces `name` with a removal cookie so clients clear it.
    pub fn delete(&self, name: &str) {
        let mut removal = Cookie::new(name.to_owned(), "");
        removal.make_removal();

        let mut jar = self.lock();
        jar.set(removal);
        self.notify(&jar);
    }

    /// Empties the jar and reports the now-empty list.
    pub fn clear(&self) {
        let mut jar = self.lock();
        jar.clear();
        self.notify(&jar);
    }

    /// Current serialized `Set-Cookie` lines.
    pub fn to_set_cookie_strings(&self) -> Vec<String> {
        self.lock().to_set_cookie_strings()
    }

    fn lock(&self) -> MutexGuard<'_, CookieJar> {
        self.jar.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn notify(&self, jar: &CookieJar) {
        if let Some(on_change) = &self.on_change {
            on_change(&jar.to_set_cookie_strings());
        }
    }
}

#[cfg(test)]
#[path = "mutable_cookies_test.rs"]
mod mutable_cookies_test;
