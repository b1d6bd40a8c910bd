use super::*;
use std::panic::{AssertUnwindSafe, catch_unwind};

use crate::context::UrlParts;

fn store_for(pathname: &str) -> Arc<RequestStore> {
    Arc::new(RequestStore::new(RequestContext {
        url: UrlParts {
            pathname: pathname.to_string(),
            search: None,
        },
        ..RequestContext::default()
    }))
}

fn active_pathname() -> Option<String> {
    active_request_store().map(|store| store.url().pathname.clone())
}

mod active_work_store {
    use super::*;

    #[test]
    fn should_return_none_given_no_bound_extent() {
        assert!(active_work_store().is_none());
        assert!(active_request_store().is_none());
    }

    #[tokio::test]
    async fn should_return_bound_store_given_running_inside_extent() {
        let store = store_for("/a");

        let observed = with_work_store(WorkUnitStore::Request(Arc::clone(&store)), async {
            active_request_store()
        })
        .await;

        assert!(Arc::ptr_eq(&observed.unwrap(), &store));
    }

    #[tokio::test]
    async fn should_return_innermost_store_given_nested_extents() {
        let outer = store_for("/outer");
        let inner = store_for("/inner");

        with_work_store(WorkUnitStore::Request(outer), async {
            assert_eq!(active_pathname().as_deref(), Some("/outer"));

            with_work_store(WorkUnitStore::Request(inner), async {
                assert_eq!(active_pathname().as_deref(), Some("/inner"));
            })
            .await;

            // Inner extent ended; the outer binding is visible again.
            assert_eq!(active_pathname().as_deref(), Some("/outer"));
        })
        .await;

        assert!(active_work_store().is_none());
    }
}

mod with_work_store {
    use super::*;

    #[tokio::test]
    async fn should_keep_binding_given_suspension_inside_extent() {
        let store = store_for("/a");

        with_work_store(WorkUnitStore::Request(store), async {
            tokio::task::yield_now().await;
            assert_eq!(active_pathname().as_deref(), Some("/a"));
        })
        .await;
    }

    #[tokio::test]
    async fn should_isolate_bindings_given_concurrent_tasks() {
        let first = tokio::spawn(with_work_store(
            WorkUnitStore::Request(store_for("/first")),
            async {
                for _ in 0..8 {
                    tokio::task::yield_now().await;
                    assert_eq!(active_pathname().as_deref(), Some("/first"));
                }
            },
        ));
        let second = tokio::spawn(with_work_store(
            WorkUnitStore::Request(store_for("/second")),
            async {
                for _ in 0..8 {
                    tokio::task::yield_now().await;
                    assert_eq!(active_pathname().as_deref(), Some("/second"));
                }
            },
        ));

        first.await.unwrap();
        second.await.unwrap();
    }

    #[tokio::test]
    async fn should_restore_binding_given_extent_returns_error() {
        let result: Result<(), &str> =
            with_work_store(WorkUnitStore::Request(store_for("/a")), async {
                Err("render failed")
            })
            .await;

        assert_eq!(result, Err("render failed"));
        assert!(active_work_store().is_none());
    }

    #[tokio::test]
    async fn should_keep_outer_binding_given_spawned_extent_panics() {
        let outer = store_for("/outer");

        with_work_store(WorkUnitStore::Request(outer), async {
            let handle = tokio::spawn(with_work_store(
                WorkUnitStore::Request(store_for("/inner")),
                async {
                    panic!("render panicked");
                },
            ));

            assert!(handle.await.is_err());
            assert_eq!(active_pathname().as_deref(), Some("/outer"));
        })
        .await;
    }

    #[tokio::test]
    async fn should_not_leak_binding_given_task_spawned_inside_extent() {
        with_work_store(WorkUnitStore::Request(store_for("/a")), async {
            let handle = tokio::spawn(async { active_work_store().is_none() });

            // Spawned tasks start a fresh continuation chain, unbound.
            assert!(handle.await.unwrap());
        })
        .await;
    }
}

mod with_work_store_sync {
    use super::*;

    #[test]
    fn should_bind_for_closure_extent_when_called() {
        let store = store_for("/sync");

        let observed = with_work_store_sync(WorkUnitStore::Request(Arc::clone(&store)), || {
            active_request_store()
        });

        assert!(Arc::ptr_eq(&observed.unwrap(), &store));
        assert!(active_work_store().is_none());
    }

    #[test]
    fn should_restore_prior_binding_given_nested_sync_extents() {
        with_work_store_sync(WorkUnitStore::Request(store_for("/outer")), || {
            with_work_store_sync(WorkUnitStore::Request(store_for("/inner")), || {
                assert_eq!(active_pathname().as_deref(), Some("/inner"));
            });

            assert_eq!(active_pathname().as_deref(), Some("/outer"));
        });
    }

    #[test]
    fn should_restore_binding_given_closure_panics() {
        let result = catch_unwind(AssertUnwindSafe(|| {
            with_work_store_sync(WorkUnitStore::Request(store_for("/a")), || {
                panic!("render panicked");
            })
        }));

        assert!(result.is_err());
        assert!(active_work_store().is_none());
    }
}

mod with_request_store {
    use super::*;

    #[tokio::test]
    async fn should_hand_callback_the_bound_store_when_called() {
        let ctx = RequestContext {
            url: UrlParts {
                pathname: "/x".to_string(),
                search: None,
            },
            ..RequestContext::default()
        };

        with_request_store(ctx, |store| async move {
            let active = active_request_store().unwrap();

            assert!(Arc::ptr_eq(&active, &store));
            assert_eq!(store.url().pathname, "/x");
            assert_eq!(store.url().search, "");
        })
        .await;

        assert!(active_request_store().is_none());
    }

    #[tokio::test]
    async fn should_propagate_callback_error_after_restoring_binding() {
        let result: Result<(), &str> =
            with_request_store(RequestContext::default(), |_store| async { Err("boom") }).await;

        assert_eq!(result, Err("boom"));
        assert!(active_work_store().is_none());
    }
}

mod kind {
    use super::*;

    #[test]
    fn should_discriminate_request_variant_when_asked() {
        let store = WorkUnitStore::Request(store_for("/a"));

        assert_eq!(store.kind(), StoreKind::Request);
        assert!(store.as_request().is_some());
    }
}
