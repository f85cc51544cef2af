#![allow(async_fn_in_trait)]

use tokio::sync::watch;

use crate::error::CounterServiceError;

/// Storage for the shared counter value.
pub trait CounterStore: Send + Sync {
    async fn get(&self) -> Result<i64, CounterServiceError>;

    /// Add `delta` and return the new value. Fails with `Overflow` and leaves
    /// the value untouched when the result would leave the `i64` range.
    async fn add(&self, delta: i64) -> Result<i64, CounterServiceError>;

    /// Receiver that holds the current value and wakes on every change.
    fn subscribe(&self) -> watch::Receiver<i64>;
}
