use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use cookie::{Cookie, SameSite};
use http::HeaderMap;
use subtle::ConstantTimeEq;
use tracing::warn;

use crate::constants::{cookie_name, header};
use crate::mutable_cookies::MutableCookies;
use crate::options::PreviewProps;
use crate::read_cookies::ReadOnlyCookies;
use crate::result::ContextError;

/// How the draft-mode flag was arrived at for this request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftModeState {
    Disabled,
    /// The request carried a valid bypass cookie.
    EnabledByCookie,
    /// Enabled during this request via [`DraftMode::enable`].
    EnabledExplicitly,
}

/// Per-request draft-mode flag, gated by the preview credential and
/// persisted through the mutable cookie sink.
pub struct DraftMode {
    state: Mutex<DraftModeState>,
    preview: Option<PreviewProps>,
    mutable_cookies: Arc<MutableCookies>,
}

impl DraftMode {
    pub(crate) fn new(
        preview: Option<PreviewProps>,
        raw: &HeaderMap,
        cookies: &ReadOnlyCookies,
        mutable_cookies: Arc<MutableCookies>,
    ) -> Self {
        let state = initial_state(preview.as_ref(), raw, cookies);

        Self {
            state: Mutex::new(state),
            preview,
            mutable_cookies,
        }
    }

    pub fn is_enabled(&self) -> bool {
        !matches!(self.state(), DraftModeState::Disabled)
    }

    pub fn state(&self) -> DraftModeState {
        *self.lock()
    }

    /// Turns draft mode on and persists the bypass cookie.
    pub fn enable(&self) -> Result<(), ContextError> {
        let Some(preview) = &self.preview else {
            return Err(ContextError::PreviewCredentialsUnavailable);
        };

        self.mutable_cookies
            .set(bypass_cookie(preview.preview_mode_id.clone()));
        *self.lock() = DraftModeState::EnabledExplicitly;
        Ok(())
    }

    /// Turns draft mode off and tells the client to clear the bypass cookie.
    pub fn disable(&self) {
        let mut removal = bypass_cookie(String::new());
        removal.make_removal();

        self.mutable_cookies.set(removal);
        *self.lock() = DraftModeState::Disabled;
    }

    fn lock(&self) -> MutexGuard<'_, DraftModeState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn initial_state(
    preview: Option<&PreviewProps>,
    raw: &HeaderMap,
    cookies: &ReadOnlyCookies,
) -> DraftModeState {
    let Some(preview) = preview else {
        return DraftModeState::Disabled;
    };
    let Some(bypass) = cookies.get(cookie_name::PRERENDER_BYPASS) else {
        return DraftModeState::Disabled;
    };

    // On-demand revalidation must render published content even when a
    // bypass cookie is present.
    if is_on_demand_revalidate(raw, preview) {
        return DraftModeState::Disabled;
    }

    if credential_matches(bypass.value(), &preview.preview_mode_id) {
        DraftModeState::EnabledByCookie
    } else {
        warn!(
            error = %ContextError::InvalidPreviewCredential,
            "ignoring bypass cookie"
        );
        DraftModeState::Disabled
    }
}

fn is_on_demand_revalidate(raw: &HeaderMap, preview: &PreviewProps) -> bool {
    raw.get(header::PRERENDER_REVALIDATE)
        .map(|value| String::from_utf8_lossy(value.as_bytes()))
        .is_some_and(|value| credential_matches(&value, &preview.preview_mode_id))
}

fn bypass_cookie(value: String) -> Cookie<'static> {
    Cookie::build((cookie_name::PRERENDER_BYPASS, value))
        .http_only(true)
        .same_site(SameSite::None)
        .secure(true)
        .path("/")
        .build()
}

fn credential_matches(candidate: &str, expected: &str) -> bool {
    candidate.as_bytes().ct_eq(expected.as_bytes()).into()
}

#[cfg(test)]
#[path = "draft_mode_test.rs"]
mod draft_mode_test;
