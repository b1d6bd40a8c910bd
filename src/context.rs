use std::any::Any;
use std::sync::Arc;

use http::HeaderMap;

use crate::options::RenderOptions;

/// Outgoing-response surface the cookie sink writes through.
///
/// `set_header` replaces the named header's values wholesale; the list it
/// receives is the full current state, never a delta.
pub trait ResponseHeaders: Send + Sync {
    fn set_header(&self, name: &str, values: &[String]);
}

/// Opaque cross-request render cache handle, passed through to the store.
pub type SharedRenderCache = Arc<dyn Any + Send + Sync>;

/// Routing-resolved URL parts for an inbound request.
#[derive(Debug, Clone, Default)]
pub struct UrlParts {
    pub pathname: String,
    /// Search part of the URL, absent when the request did not carry one.
    pub search: Option<String>,
}

/// Per-request inputs captured immediately before the bound callback runs.
///
/// `res` is present for page renders and absent in the API-route and
/// middleware shapes, where cookie writes go through
/// [`RenderOptions::on_update_cookies`] or nowhere at all.
#[derive(Clone, Default)]
pub struct RequestContext {
    /// Case-insensitive header map of the incoming request.
    pub headers: HeaderMap,
    /// Live response handle, when one exists.
    pub res: Option<Arc<dyn ResponseHeaders>>,
    pub url: UrlParts,
    pub render_opts: Option<RenderOptions>,
    /// Cache-invalidation tags implied by the route; defaults to empty.
    pub implicit_tags: Option<Vec<String>>,
    pub is_hmr_refresh: bool,
    /// Injected explicitly; there is no process-wide fallback.
    pub shared_render_cache: Option<SharedRenderCache>,
}
