use std::future::Future;
use std::sync::Arc;

use crate::context::RequestContext;
use crate::store::RequestStore;

/// Discriminates the store variants a unit of work can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum StoreKind {
    Request,
}

/// Store bound to one unit of work.
///
/// Request handling today; the union leaves room for sibling prerender and
/// cache-revalidation variants.
#[derive(Clone)]
#[non_exhaustive]
pub enum WorkUnitStore {
    Request(Arc<RequestStore>),
}

impl WorkUnitStore {
    pub fn kind(&self) -> StoreKind {
        match self {
            Self::Request(_) => StoreKind::Request,
        }
    }

    pub fn as_request(&self) -> Option<&Arc<RequestStore>> {
        match self {
            Self::Request(store) => Some(store),
        }
    }
}

tokio::task_local! {
    static ACTIVE_STORE: WorkUnitStore;
}

/// Binds `store` for the full dynamic extent of `fut`, including every
/// suspension and resumption inside it.
///
/// The prior binding, if any, is restored on every exit path, panics
/// included. Nesting is legal: inner bindings shadow
/// outer ones and the outer binding is intact once the inner extent ends.
/// Tasks spawned from inside the extent start unbound; the binding travels
/// with the logical continuation chain, not with the worker pool.
pub async fn with_work_store<F, T>(store: WorkUnitStore, fut: F) -> T
where
    F: Future<Output = T>,
{
    ACTIVE_STORE.scope(store, fut).await
}

/// Synchronous counterpart of [`with_work_store`].
pub fn with_work_store_sync<F, T>(store: WorkUnitStore, f: F) -> T
where
    F: FnOnce() -> T,
{
    ACTIVE_STORE.sync_scope(store, f)
}

/// Innermost store bound to the current task, or `None` outside any extent.
pub fn active_work_store() -> Option<WorkUnitStore> {
    ACTIVE_STORE.try_with(WorkUnitStore::clone).ok()
}

/// Innermost request store bound to the current task, if any.
pub fn active_request_store() -> Option<Arc<RequestStore>> {
    ACTIVE_STORE
        .try_with(|store| store.as_request().cloned())
        .ok()
        .flatten()
}

/// Builds the request store for `ctx` and binds it while `f` runs.
///
/// The callback receives the same store that nested code can retrieve with
/// [`active_request_store`]; the store is discarded when the extent ends.
pub async fn with_request_store<F, Fut, T>(ctx: RequestContext, f: F) -> T
where
    F: FnOnce(Arc<RequestStore>) -> Fut,
    Fut: Future<Output = T>,
{
    let store = Arc::new(RequestStore::new(ctx));
    let fut = f(Arc::clone(&store));
    with_work_store(WorkUnitStore::Request(store), fut).await
}

#[cfg(test)]
#[path = "scope_test.rs"]
mod scope_test;
