//! roledeps - show what a role depends on and what depends on it
//!
//! Loads the dependency inventory of a source tree and prints the
//! resources reachable from a target in both directions.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;

use roledeps::cli::{self, ConfigSubcommand, QueryFlags};
use roledeps::config::ConfigLoader;

/// Show dependencies of a resource and the resources depending on it
#[derive(Parser, Debug)]
#[command(name = "roledeps")]
#[command(about = "Show what a resource depends on and what depends on it", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Args {
    /// Resource to inspect, as an MRN (ns__collection__role) or a path
    target: Option<String>,

    #[command(flatten)]
    flags: QueryFlags,

    /// Enable debug logging
    #[arg(long, short = 'd')]
    debug: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

/// Main commands
#[derive(Subcommand, Debug)]
enum Command {
    /// Configuration management
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
    /// Show version information
    Version,
}

fn main() -> Result<()> {
    let mut args = Args::parse();
    cli::init_logging(args.debug);

    match args.command.take() {
        Some(Command::Config { subcommand }) => return cli::handle_config_command(subcommand),
        Some(Command::Version) => {
            cli::display_version();
            return Ok(());
        }
        None => {}
    }

    let Some(target) = args.target.as_deref() else {
        return Err(anyhow::anyhow!(
            "missing <TARGET>; run `roledeps --help` for usage"
        ));
    };

    let config = ConfigLoader::load(args.flags.source.as_deref())
        .context("Failed to load configuration")?;
    let config = args.flags.apply(config);
    tracing::debug!(
        "Configuration loaded: source={}, depth={}, mrn={}, tree={}",
        config.source,
        config.depth,
        config.display.mrn,
        config.display.tree
    );

    let report = cli::run_query(target, &config)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    report
        .write_to(&mut out)
        .context("Failed to write query output")?;
    out.flush().context("Failed to write query output")?;

    Ok(())
}
