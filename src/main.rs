use anyhow::Result;
use tracing::info;

use rookery_cli::{SessionConfig, Shell};

fn main() -> Result<()> {
    // Logs go to stderr so they do not interleave with the board on stdout.
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();
    info!(version = env!("CARGO_PKG_VERSION"), "rookery starting");
    Shell::new(SessionConfig::default()).run()?;
    Ok(())
}
