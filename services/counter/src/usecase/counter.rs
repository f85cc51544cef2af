use tokio::sync::watch;

use crate::domain::repository::CounterStore;
use crate::domain::types::Step;
use crate::error::CounterServiceError;

// ── StepCounter ──────────────────────────────────────────────────────────────

pub struct StepCounterUseCase<S: CounterStore> {
    pub store: S,
}

impl<S: CounterStore> StepCounterUseCase<S> {
    pub async fn execute(&self, step: Step) -> Result<i64, CounterServiceError> {
        let value = self.store.add(step.delta()).await?;
        tracing::debug!(step = step.as_str(), value, "counter stepped");
        Ok(value)
    }
}

// ── GetCounter ───────────────────────────────────────────────────────────────

pub struct GetCounterUseCase<S: CounterStore> {
    pub store: S,
}

impl<S: CounterStore> GetCounterUseCase<S> {
    pub async fn execute(&self) -> Result<i64, CounterServiceError> {
        self.store.get().await
    }
}

// ── WatchCounter ─────────────────────────────────────────────────────────────

pub struct WatchCounterUseCase<S: CounterStore> {
    pub store: S,
}

impl<S: CounterStore> WatchCounterUseCase<S> {
    /// The receiver starts marked as seen; its current value is the first
    /// thing a subscriber should show.
    pub fn execute(&self) -> watch::Receiver<i64> {
        self.store.subscribe()
    }
}
