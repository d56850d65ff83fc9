use std::fs::OpenOptions;
use std::path::Path;

use anyhow::{Context, Result};
use env_logger::{Env, Target};

/// Sends log records to `path`, filtered by `RUST_LOG` (default `info`).
///
/// The terminal belongs to the UI, so there is no console logging; without
/// a file the `log` macros stay no-ops.
pub fn init(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .try_init()
        .context("logger already initialised")?;

    log::info!("pomo {} starting", env!("CARGO_PKG_VERSION"));
    Ok(())
}
