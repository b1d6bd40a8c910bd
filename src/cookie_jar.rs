use cookie::Cookie;
use http::HeaderMap;
use tracing::debug;

use crate::constants::header;
use crate::result::ContextError;

/// Ordered cookie collection backing both the sealed view and the sink.
///
/// Lookup by name returns the most recently stored entry; all entries are
/// retained in arrival order for serialization.
#[derive(Debug, Clone, Default)]
pub struct CookieJar {
    cookies: Vec<Cookie<'static>>,
}

impl CookieJar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses the request `cookie` header(s); malformed pairs are skipped.
    pub fn parse(raw: &HeaderMap) -> Self {
        let mut jar = Self::new();

        for value in raw.get_all(header::COOKIE) {
            let value = String::from_utf8_lossy(value.as_bytes());
            for pair in value.split(';') {
                let pair = pair.trim();
                if pair.is_empty() {
                    continue;
                }

                match parse_directive(pair) {
                    Ok(cookie) => jar.cookies.push(cookie),
                    Err(error) => debug!(%error, "skipping malformed cookie pair"),
                }
            }
        }

        jar
    }

    /// Stores `cookie`, overwriting the entry it would shadow on lookup.
    pub fn set(&mut self, cookie: Cookie<'static>) {
        match self
            .cookies
            .iter_mut()
            .rev()
            .find(|existing| existing.name() == cookie.name())
        {
            Some(existing) => *existing = cookie,
            None => self.cookies.push(cookie),
        }
    }

    /// Removes every entry named `name`; returns whether any was present.
    pub fn delete(&mut self, name: &str) -> bool {
        let before = self.cookies.len();
        self.cookies.retain(|cookie| cookie.name() != name);
        before != self.cookies.len()
    }

    pub fn clear(&mut self) {
        self.cookies.clear();
    }

    /// Last stored entry named `name`.
    pub fn get(&self, name: &str) -> Option<&Cookie<'static>> {
        self.cookies.iter().rev().find(|cookie| cookie.name() == name)
    }

    pub fn get_all(&self) -> &[Cookie<'static>] {
        &self.cookies
    }

    pub fn len(&self) -> usize {
        self.cookies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty()
    }

    /// Serializes every entry as a `Set-Cookie` line, in storage order.
    pub fn to_set_cookie_strings(&self) -> Vec<String> {
        self.cookies.iter().map(Cookie::to_string).collect()
    }
}

/// Parses one cookie directive, either a bare `name=value` pair or a full
/// `Set-Cookie` line with attributes.
pub(crate) fn parse_directive(directive: &str) -> Result<Cookie<'static>, ContextError> {
    Cookie::parse(directive.to_owned())
        .map_err(|_| ContextError::MalformedCookieDirective(directive.to_string()))
}

#[cfg(test)]
#[path = "cookie_jar_test.rs"]
mod cookie_jar_test;
