//! Command implementations.

use std::io::Read;

use anyhow::Context;
use basefreq_core::BaseWord;
use camino::Utf8Path;

pub mod filter;
pub mod rank;

/// Read the whole input, from a file or from standard input.
///
/// An omitted path or `-` means stdin. Everything is buffered before any
/// processing starts, so a later input error can abort with nothing emitted.
pub fn read_input(file: Option<&Utf8Path>) -> anyhow::Result<String> {
    match file {
        Some(path) if path.as_str() != "-" => std::fs::read_to_string(path.as_std_path())
            .with_context(|| format!("failed to read {path}")),
        _ => {
            let mut content = String::new();
            std::io::stdin()
                .read_to_string(&mut content)
                .context("failed to read standard input")?;
            Ok(content)
        }
    }
}

/// Print surviving words, one `word<TAB>frequency` line each, or as JSON.
///
/// `f64`'s `Display` is the shortest form that round-trips, so whole-number
/// frequencies print without a trailing `.0`.
pub fn emit(entries: &[BaseWord], json: bool) -> anyhow::Result<()> {
    use std::io::Write;

    if json {
        println!("{}", serde_json::to_string_pretty(entries)?);
        return Ok(());
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for entry in entries {
        writeln!(out, "{}\t{}", entry.word, entry.frequency)
            .context("failed to write to standard output")?;
    }
    Ok(())
}
