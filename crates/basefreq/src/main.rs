//! basefreq CLI
#![deny(unsafe_code)]

use basefreq::{Cli, Commands, commands};
use clap::Parser;
use tracing::debug;

mod observability;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.version_only {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // arg_required_else_help ensures we have --version-only or a subcommand
    let Some(command) = cli.command else {
        return Ok(());
    };

    observability::init(observability::env_filter(cli.quiet, cli.verbose))?;

    debug!(
        verbose = cli.verbose,
        quiet = cli.quiet,
        json = cli.json,
        "CLI initialized"
    );

    let result = match command {
        Commands::Filter(args) => commands::filter::cmd_filter(args, cli.json),
        Commands::Rank(args) => commands::rank::cmd_rank(args, cli.json),
    };
    if let Err(ref err) = result {
        tracing::error!(error = %err, "fatal error");
    }
    result
}
