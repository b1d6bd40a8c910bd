use std::sync::Arc;

/// Hook invoked synchronously with the full serialized `Set-Cookie` list
/// after every mutation of the request's mutable cookies.
pub type CookieUpdateFn = Arc<dyn Fn(&[String]) + Send + Sync>;

/// Preview credentials gating draft mode.
///
/// When absent from [`RenderOptions`], draft mode is permanently disabled
/// for the request. Key material is opaque to this crate; only the
/// preview-mode id is compared here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewProps {
    pub preview_mode_id: String,
    pub preview_mode_signing_key: String,
    pub preview_mode_encryption_key: String,
}

/// Render-time options supplied by the caller of
/// [`with_request_store`](crate::with_request_store).
#[derive(Clone, Default)]
pub struct RenderOptions {
    /// Overrides the default response-header write path for cookie updates.
    pub on_update_cookies: Option<CookieUpdateFn>,
    pub preview_props: Option<PreviewProps>,
}
