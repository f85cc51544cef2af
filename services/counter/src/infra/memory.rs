use std::sync::Arc;

use tokio::sync::watch;

use crate::domain::repository::CounterStore;
use crate::error::CounterServiceError;

/// Process-local counter shared by every connection. The value lives in a
/// watch channel, so updates are published in the order they were applied.
#[derive(Clone)]
pub struct WatchCounterStore {
    value: Arc<watch::Sender<i64>>,
}

impl WatchCounterStore {
    pub fn new(initial: i64) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self {
            value: Arc::new(tx),
        }
    }
}

impl Default for WatchCounterStore {
    fn default() -> Self {
        Self::new(0)
    }
}

impl CounterStore for WatchCounterStore {
    async fn get(&self) -> Result<i64, CounterServiceError> {
        Ok(*self.value.borrow())
    }

    async fn add(&self, delta: i64) -> Result<i64, CounterServiceError> {
        let mut result = Err(CounterServiceError::Overflow);
        // Runs under the channel's write lock; subscribers are only woken
        // when the value actually changed.
        self.value.send_if_modified(|v| match v.checked_add(delta) {
            Some(next) => {
                *v = next;
                result = Ok(next);
                true
            }
            None => false,
        });
        result
    }

    fn subscribe(&self) -> watch::Receiver<i64> {
        self.value.subscribe()
    }
}
