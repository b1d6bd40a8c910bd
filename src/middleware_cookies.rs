use http::HeaderMap;
use tracing::debug;

use crate::constants::header;
use crate::cookie_jar::{CookieJar, parse_directive};
use crate::util::split_set_cookie_string;

/// Applies middleware-injected `Set-Cookie` directives to `jar`.
///
/// Middleware signals cookies it set for this request through the
/// `x-middleware-set-cookie` header; merging them here lets later reads see
/// those cookies as if they had arrived on the original request. Absent
/// signal header means no-op.
pub(crate) fn merge_middleware_cookies(raw: &HeaderMap, jar: &mut CookieJar) {
    let joined = raw
        .get_all(header::MIDDLEWARE_SET_COOKIE)
        .iter()
        .map(|value| String::from_utf8_lossy(value.as_bytes()))
        .collect::<Vec<_>>()
        .join(", ");
    if joined.is_empty() {
        return;
    }

    for directive in split_set_cookie_string(&joined) {
        match parse_directive(&directive) {
            Ok(cookie) => jar.set(cookie),
            Err(error) => debug!(%error, "skipping malformed middleware cookie directive"),
        }
    }
}

#[cfg(test)]
#[path = "middleware_cookies_test.rs"]
mod middleware_cookies_test;
