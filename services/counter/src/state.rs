use crate::infra::memory::WatchCounterStore;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone, Default)]
pub struct AppState {
    pub counter: WatchCounterStore,
}

impl AppState {
    pub fn new(initial_value: i64) -> Self {
        Self {
            counter: WatchCounterStore::new(initial_value),
        }
    }

    pub fn counter_store(&self) -> WatchCounterStore {
        self.counter.clone()
    }
}
