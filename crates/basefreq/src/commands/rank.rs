//! Rank command - surviving base words by combined frequency.

use camino::Utf8PathBuf;
use clap::Args;
use tracing::{debug, instrument};

use basefreq_core::{WordBuckets, aggregate};

/// Arguments for the `rank` subcommand.
#[derive(Args, Debug)]
pub struct RankArgs {
    /// Frequency list to read; standard input when omitted or `-`.
    pub file: Option<Utf8PathBuf>,
}

/// Filter a frequency list and sort by combined frequency, highest first.
/// Ties order by word ascending.
#[instrument(name = "cmd_rank", skip_all)]
pub fn cmd_rank(args: RankArgs, global_json: bool) -> anyhow::Result<()> {
    let content = super::read_input(args.file.as_deref())?;
    let buckets = WordBuckets::from_reader(content.as_bytes())?;
    let entries = aggregate::rank(&buckets);
    debug!(kept = entries.len(), seen = buckets.base_len(), "ranked");
    super::emit(&entries, global_json)
}
