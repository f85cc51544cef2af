use std::convert::Infallible;

use axum::extract::State;
use axum::response::sse::{Event, KeepAlive, Sse};
use tokio_stream::wrappers::WatchStream;
use tokio_stream::{Stream, StreamExt};

use crate::domain::types::Step;
use crate::error::CounterServiceError;
use crate::state::AppState;
use crate::usecase::counter::{GetCounterUseCase, StepCounterUseCase, WatchCounterUseCase};

// Bodies are bare decimal numbers; `String` responds as text/plain.

async fn step(state: AppState, step: Step) -> Result<String, CounterServiceError> {
    let usecase = StepCounterUseCase {
        store: state.counter_store(),
    };
    let value = usecase.execute(step).await?;
    Ok(value.to_string())
}

// ── GET /up ──────────────────────────────────────────────────────────────────

pub async fn up(State(state): State<AppState>) -> Result<String, CounterServiceError> {
    step(state, Step::Up).await
}

// ── GET /down ────────────────────────────────────────────────────────────────

pub async fn down(State(state): State<AppState>) -> Result<String, CounterServiceError> {
    step(state, Step::Down).await
}

// ── GET /value ───────────────────────────────────────────────────────────────

pub async fn value(State(state): State<AppState>) -> Result<String, CounterServiceError> {
    let usecase = GetCounterUseCase {
        store: state.counter_store(),
    };
    Ok(usecase.execute().await?.to_string())
}

// ── GET /updates ─────────────────────────────────────────────────────────────

/// Server-sent events: the current value first, then every change.
pub async fn updates(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let usecase = WatchCounterUseCase {
        store: state.counter_store(),
    };
    let events = WatchStream::new(usecase.execute())
        .map(|value| Ok(Event::default().data(value.to_string())));
    Sse::new(events).keep_alive(KeepAlive::default())
}
