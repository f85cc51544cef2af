//! Fetch a plain-text resource over HTTP and render it into a display target.
//!
//! The target is injected by the caller, completion is an awaited future (or a
//! spawned task's `JoinHandle`), and failures come back as [`FetchError`]
//! instead of being dropped. The target is written exactly once, and only when
//! the server answers `200`.

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod infra;
pub mod usecase;

pub use error::FetchError;
