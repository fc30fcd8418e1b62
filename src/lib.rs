// mockpatch - patches mock declarations into test sources by literal replacement
// The target file is only ever read; patched text stays in memory

pub mod config;
pub mod error;
pub mod patch;
pub mod utils;

use anyhow::Result;
use tracing::info;

pub use config::PatchConfig;
pub use error::{PatchError, PatchResult};
pub use patch::{apply_rule, attempt_patch, PatchOutcome, PatchRule};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Entry point kept from the scratch workflow. Does nothing.
pub fn run() -> Result<()> {
    Ok(())
}

/// Initialize the logger
///
/// Logs always go to stderr so a preview on stdout stays clean.
/// `verbose` only changes the default filter; `RUST_LOG` still wins.
pub fn init_with_logger(ansi_colors: bool, verbose: bool) -> Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let default_filter = if verbose { "mockpatch=debug" } else { "mockpatch=warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    fmt::Subscriber::builder()
        .with_ansi(ansi_colors)
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(verbose)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logger: {}", e))?;

    info!("Initializing mockpatch v{}", version());
    Ok(())
}
