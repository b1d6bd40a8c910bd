pub mod constants;

mod context;
mod cookie_jar;
mod draft_mode;
mod headers;
mod middleware_cookies;
mod mutable_cookies;
mod options;
mod read_cookies;
mod result;
mod scope;
mod store;
mod util;

pub use cookie::Cookie;

pub use context::{RequestContext, ResponseHeaders, SharedRenderCache, UrlParts};
pub use cookie_jar::CookieJar;
pub use draft_mode::{DraftMode, DraftModeState};
pub use headers::HeaderView;
pub use mutable_cookies::MutableCookies;
pub use options::{CookieUpdateFn, PreviewProps, RenderOptions};
pub use read_cookies::ReadOnlyCookies;
pub use result::ContextError;
pub use scope::{
    StoreKind, WorkUnitStore, active_request_store, active_work_store, with_request_store,
    with_work_store, with_work_store_sync,
};
pub use store::{RequestStore, RequestUrl};
