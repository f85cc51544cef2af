//! Shared plumbing for the updown service and client: env config helpers,
//! tracing setup, health handlers and the request-id layer.

pub mod config;
pub mod health;
pub mod middleware;
pub mod tracing;
