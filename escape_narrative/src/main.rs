//! Escape the Rogue AI - console entry point.

use std::io;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use escape_narrative::{Config, Console, DEFAULT_LOG_FILTER};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they never interleave with the game text.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = Config::from_env();
    let world = config.load_world().context("failed to load world")?;
    let lore = config.load_lore().context("failed to load lore")?;

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());
    let ending = console.play(&world, &lore)?;

    tracing::info!(?ending, "Game finished");
    Ok(())
}
