pub mod header {
    /// Signal header carrying `Set-Cookie` directives injected by an
    /// upstream middleware stage for this request.
    pub const MIDDLEWARE_SET_COOKIE: &str = "x-middleware-set-cookie";
    /// Carries the preview-mode id on on-demand revalidation requests.
    pub const PRERENDER_REVALIDATE: &str = "x-prerender-revalidate";
    pub const COOKIE: &str = "cookie";
    pub const SET_COOKIE: &str = "set-cookie";
    pub const COMPONENT_PAYLOAD: &str = "x-component-payload";
    pub const ROUTER_STATE_TREE: &str = "x-router-state-tree";
    pub const ROUTER_PREFETCH: &str = "x-router-prefetch";
    pub const HMR_REFRESH: &str = "x-hmr-refresh";
    pub const ROUTER_URL: &str = "x-router-url";
}

pub mod cookie_name {
    /// Cookie persisting the draft-mode flag between requests.
    pub const PRERENDER_BYPASS: &str = "__prerender_bypass";
}

/// Internal routing-protocol headers stripped from the sealed header view
/// before application code can observe them.
pub const INTERNAL_HEADERS: [&str; 5] = [
    header::COMPONENT_PAYLOAD,
    header::ROUTER_STATE_TREE,
    header::ROUTER_PREFETCH,
    header::HMR_REFRESH,
    header::ROUTER_URL,
];
