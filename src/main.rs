use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing::{debug, info};

use mockpatch::{attempt_patch, PatchConfig};

#[derive(Debug, Parser)]
#[command(name = "mockpatch", version, about = "Patch mock declarations into test sources")]
struct Cli {
    /// Project root the test directory is resolved against
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    /// Rule overrides (json, yaml or toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Placeholder entry point; does nothing
    Run,
    /// Show the change the rule would make, without writing it
    Preview,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = mockpatch::init_with_logger(std::io::stderr().is_terminal(), cli.verbose) {
        eprintln!("Warning: {}", e);
    }

    if let Err(e) = execute(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn execute(cli: Cli) -> Result<()> {
    debug!("CLI arguments: {:?}", cli);

    match cli.command.unwrap_or(Command::Run) {
        Command::Run => mockpatch::run(),
        Command::Preview => {
            let root = match cli.root {
                Some(root) => root,
                None => std::env::current_dir().context("Failed to determine current directory")?,
            };

            let config = PatchConfig::load_or_default(cli.config.as_deref())
                .context("Failed to load configuration")?;
            if cli.verbose {
                debug!("Effective configuration:\n{}", config.to_toml()?);
            }
            let target = config.target(&root);
            info!("Previewing patch for {}", target.display());

            let outcome = attempt_patch(&target, &config.rule)
                .with_context(|| format!("Failed to patch {}", target.display()))?;

            print!("{}", outcome);
            Ok(())
        }
    }
}
