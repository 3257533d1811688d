//! Library interface for the `basefreq` CLI.
//!
//! This crate exposes the CLI's argument parser and command structure as a
//! library, primarily for testing. The actual entry point is in `main.rs`.
//!
//! # Structure
//!
//! - [`Cli`] - The root argument parser (clap derive)
//! - [`Commands`] - Available subcommands
//! - [`commands`] - Command implementations

pub mod commands;

use clap::{Parser, Subcommand};

const ENV_HELP: &str = "\
ENVIRONMENT VARIABLES:
    RUST_LOG    Log filter (e.g., debug, basefreq=trace); overrides -q/-v
";

/// Command-line interface definition for basefreq.
#[derive(Parser)]
#[command(name = "basefreq")]
#[command(about = "Filter word-frequency lists down to five-letter base words", long_about = None)]
#[command(version, arg_required_else_help = true)]
#[command(after_long_help = ENV_HELP)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Print only the version number (for scripting)
    #[arg(long)]
    pub version_only: bool,

    /// Only print errors (suppresses warnings/info)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// More detail (repeatable; e.g. -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Output as JSON (for scripting)
    #[arg(long, global = true)]
    pub json: bool,
}

/// Available subcommands for the CLI.
#[derive(Subcommand)]
pub enum Commands {
    /// Filter to five-letter base words, keeping input order
    Filter(commands::filter::FilterArgs),

    /// Filter and sort by combined frequency, highest first
    Rank(commands::rank::RankArgs),
}
