//! Filter command - surviving base words in input order.

use camino::Utf8PathBuf;
use clap::Args;
use tracing::{debug, instrument};

use basefreq_core::{WordBuckets, aggregate};

/// Arguments for the `filter` subcommand.
#[derive(Args, Debug)]
pub struct FilterArgs {
    /// Frequency list to read; standard input when omitted or `-`.
    pub file: Option<Utf8PathBuf>,
}

/// Filter a frequency list, preserving input encounter order.
#[instrument(name = "cmd_filter", skip_all)]
pub fn cmd_filter(args: FilterArgs, global_json: bool) -> anyhow::Result<()> {
    let content = super::read_input(args.file.as_deref())?;
    let buckets = WordBuckets::from_reader(content.as_bytes())?;
    let entries = aggregate::collapse(&buckets);
    debug!(kept = entries.len(), seen = buckets.base_len(), "filtered");
    super::emit(&entries, global_json)
}
