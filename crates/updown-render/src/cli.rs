//! Argument parsing and the run loop behind the `updown` binary.

use std::io::Write;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::config::RenderConfig;
use crate::domain::source::TextSource;
use crate::domain::target::WriterTarget;
use crate::infra::http::HttpTextSource;
use crate::usecase::render::FetchAndRenderUseCase;

#[derive(Parser, Debug)]
#[command(name = "updown", about = "Fetch a counter value and print it")]
pub struct Args {
    /// Base URL of the counter service (overrides UPDOWN_BASE_URL)
    #[arg(long)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// GET /up
    Up,
    /// GET /down
    Down,
    /// GET an arbitrary path or absolute URL
    Get { url: String },
}

/// Resolve config and run `args.command` against the counter service,
/// printing the body to stdout.
pub async fn main_with(args: Args) -> Result<()> {
    let config = RenderConfig::from_env().with_override(args.base_url);
    let source = HttpTextSource::new(&config.base_url)
        .with_context(|| format!("bad base url {}", config.base_url))?;
    run(source, &args.command, std::io::stdout()).await?;
    Ok(())
}

/// Fetch for `command` and print the body as one line on `out`.
///
/// Fails when the fetch fails or when the line cannot be written, so the
/// process only exits 0 if the value actually reached `out`.
pub async fn run<S, W>(source: S, command: &Command, out: W) -> Result<W>
where
    S: TextSource,
    W: Write + Send,
{
    let usecase = FetchAndRenderUseCase {
        source,
        target: WriterTarget::new(out),
    };
    match command {
        Command::Up => usecase.up().await?,
        Command::Down => usecase.down().await?,
        Command::Get { url } => usecase.execute(url).await?,
    };
    usecase
        .target
        .check()
        .context("failed to print response")?;
    Ok(usecase.target.into_inner())
}
