use std::sync::Arc;

use http::HeaderMap;
use once_cell::sync::OnceCell;

use crate::constants::header;
use crate::context::{RequestContext, ResponseHeaders, SharedRenderCache};
use crate::cookie_jar::CookieJar;
use crate::draft_mode::DraftMode;
use crate::headers::HeaderView;
use crate::middleware_cookies::merge_middleware_cookies;
use crate::mutable_cookies::MutableCookies;
use crate::options::{CookieUpdateFn, RenderOptions};
use crate::read_cookies::ReadOnlyCookies;

/// URL identity of the request; `search` is empty when absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestUrl {
    pub pathname: String,
    pub search: String,
}

/// Constructor inputs consumed by lazy materialization.
struct StoreInputs {
    headers: HeaderMap,
    res: Option<Arc<dyn ResponseHeaders>>,
    render_opts: RenderOptions,
}

/// Per-request store handed to the bound rendering callback.
///
/// `headers`, `cookies`, `mutable_cookies`, and `draft_mode` are one-shot
/// cells: computed on first access from the captured inputs, then returned
/// unchanged for the rest of the request.
pub struct RequestStore {
    url: RequestUrl,
    implicit_tags: Vec<String>,
    is_hmr_refresh: bool,
    shared_render_cache: Option<SharedRenderCache>,
    inputs: StoreInputs,
    headers: OnceCell<Arc<HeaderView>>,
    cookies: OnceCell<Arc<ReadOnlyCookies>>,
    mutable_cookies: OnceCell<Arc<MutableCookies>>,
    draft_mode: OnceCell<Arc<DraftMode>>,
}

impl RequestStore {
    pub fn new(ctx: RequestContext) -> Self {
        let RequestContext {
            headers,
            res,
            url,
            render_opts,
            implicit_tags,
            is_hmr_refresh,
            shared_render_cache,
        } = ctx;

        Self {
            url: RequestUrl {
                pathname: url.pathname,
                search: url.search.unwrap_or_default(),
            },
            implicit_tags: implicit_tags.unwrap_or_default(),
            is_hmr_refresh,
            shared_render_cache,
            inputs: StoreInputs {
                headers,
                res,
                render_opts: render_opts.unwrap_or_default(),
            },
            headers: OnceCell::new(),
            cookies: OnceCell::new(),
            mutable_cookies: OnceCell::new(),
            draft_mode: OnceCell::new(),
        }
    }

    pub fn url(&self) -> &RequestUrl {
        &self.url
    }

    pub fn implicit_tags(&self) -> &[String] {
        &self.implicit_tags
    }

    pub fn is_hmr_refresh(&self) -> bool {
        self.is_hmr_refresh
    }

    pub fn shared_render_cache(&self) -> Option<&SharedRenderCache> {
        self.shared_render_cache.as_ref()
    }

    /// Sealed header view, stripped of internal routing-protocol headers.
    pub fn headers(&self) -> &Arc<HeaderView> {
        self.headers
            .get_or_init(|| Arc::new(HeaderView::build(&self.inputs.headers)))
    }

    /// Sealed cookie view, including middleware-injected cookies.
    pub fn cookies(&self) -> &Arc<ReadOnlyCookies> {
        self.cookies.get_or_init(|| {
            let mut jar = CookieJar::parse(&self.inputs.headers);
            merge_middleware_cookies(&self.inputs.headers, &mut jar);
            Arc::new(ReadOnlyCookies::seal(jar))
        })
    }

    /// Mutable cookie sink, wired to the response handle unless render
    /// options supplied their own update hook.
    pub fn mutable_cookies(&self) -> &Arc<MutableCookies> {
        self.mutable_cookies.get_or_init(|| {
            let mut jar = CookieJar::parse(&self.inputs.headers);
            merge_middleware_cookies(&self.inputs.headers, &mut jar);
            Arc::new(MutableCookies::new(jar, self.cookie_update_hook()))
        })
    }

    /// Draft-mode provider, built over the two cookie cells it forces.
    pub fn draft_mode(&self) -> &Arc<DraftMode> {
        self.draft_mode.get_or_init(|| {
            let cookies = Arc::clone(self.cookies());
            let mutable_cookies = Arc::clone(self.mutable_cookies());

            Arc::new(DraftMode::new(
                self.inputs.render_opts.preview_props.clone(),
                &self.inputs.headers,
                &cookies,
                mutable_cookies,
            ))
        })
    }

    fn cookie_update_hook(&self) -> Option<CookieUpdateFn> {
        if let Some(hook) = &self.inputs.render_opts.on_update_cookies {
            return Some(Arc::clone(hook));
        }

        let res = self.inputs.res.clone()?;
        Some(Arc::new(move |cookies: &[String]| {
            res.set_header(header::SET_COOKIE, cookies);
        }))
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;
