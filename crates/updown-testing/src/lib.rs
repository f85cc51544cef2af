//! Test utilities for updown crates.
//!
//! Provides `MockTextServer`, `RecordingTarget`, and `RefusedUrl`.
//! Import from dev-dependencies only — never in production code.

pub mod server;
pub mod target;

pub use server::{MockTextServer, RefusedUrl, Scripted};
pub use target::RecordingTarget;
