use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};
use std::fs::OpenOptions;
use std::path::Path;

/// Sends log records to an append-only file. `RUST_LOG` overrides the default `debug` filter.
pub fn init(log_path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .with_context(|| format!("Failed to open log file: {:?}", log_path))?;

    Builder::from_env(Env::default().default_filter_or("debug"))
        .target(Target::Pipe(Box::new(file)))
        .try_init()
        .context("Failed to initialize logger")?;

    Ok(())
}
