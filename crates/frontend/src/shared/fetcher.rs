//! Reactive wrapper around [`CollectionState`]: runs the fetch future and
//! records its outcome.

use contracts::shared::api_error::ApiError;
use contracts::shared::collection::CollectionState;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;

pub struct CollectionResource<T: Send + Sync + 'static> {
    pub state: RwSignal<CollectionState<T>>,
}

impl<T: Send + Sync + 'static> Clone for CollectionResource<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for CollectionResource<T> {}

impl<T: Clone + Send + Sync + 'static> CollectionResource<T> {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(CollectionState::new()),
        }
    }

    /// Run `fetch` unless offline. On failure the previous items stay.
    pub fn load<F, Fut>(&self, online: bool, what: &'static str, fetch: F)
    where
        F: FnOnce() -> Fut + 'static,
        Fut: Future<Output = Result<Vec<T>, ApiError>> + 'static,
    {
        let state = self.state;
        if !online {
            log::warn!("Offline, not loading {}", what);
            state.update(|s| s.go_offline());
            return;
        }

        state.update(|s| s.begin());
        spawn_local(async move {
            match fetch().await {
                Ok(items) => {
                    log::debug!("Loaded {} {}", items.len(), what);
                    let _ = state.try_update(|s| s.succeed(items));
                }
                Err(e) => {
                    log::error!("Failed to load {}: {}", what, e);
                    let _ = state.try_update(|s| s.fail(e.to_string()));
                }
            }
        });
    }

    pub fn items(&self) -> Vec<T> {
        self.state.with(|s| s.items.clone())
    }

    pub fn loading(&self) -> bool {
        self.state.with(|s| s.loading)
    }

    pub fn error(&self) -> Option<String> {
        self.state.with(|s| s.error.clone())
    }

    pub fn offline(&self) -> bool {
        self.state.with(|s| s.offline)
    }

    /// Local edit of the loaded items, e.g. after an update response
    pub fn update_items(&self, f: impl FnOnce(&mut Vec<T>)) {
        self.state.update(|s| f(&mut s.items));
    }
}

impl<T: Clone + Send + Sync + 'static> Default for CollectionResource<T> {
    fn default() -> Self {
        Self::new()
    }
}
