//! `updown` — call the counter service and print its answer.
//!
//! # Usage
//!
//! ```bash
//! # Increment against the default http://localhost:8000
//! updown up
//!
//! # Decrement against another host
//! updown --base-url http://counter:9000 down
//!
//! # Fetch any plain-text path
//! updown get /value
//! ```
//!
//! The body is printed on stdout only when the server answers 200. Anything
//! else, including a failed write to stdout, exits 1 with the reason on stderr.

use anyhow::Result;
use clap::Parser;

use updown_core::tracing::init_cli_tracing;
use updown_render::cli::{Args, main_with};

#[tokio::main]
async fn main() -> Result<()> {
    init_cli_tracing();
    main_with(Args::parse()).await
}
