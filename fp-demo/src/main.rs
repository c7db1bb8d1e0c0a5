//! Prints the sample results of the list algebra and the naturals stream.
//!
//! Run with: cargo run -p fp-demo
//!
//! Environment:
//! - `FP_DEMO_PREFIX`: how many naturals to print (default 3)
//! - `RUST_LOG`: log filter, logs go to stderr (default `warn`)

use std::io;

use anyhow::{Context, Result};
use fp_demo::DemoConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .init();

    let config = DemoConfig::from_env().context("failed to load demo configuration")?;
    info!(prefix_len = config.prefix_len, "configuration loaded");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    fp_demo::run(&config, &mut out).context("failed to write demo output")?;

    Ok(())
}
