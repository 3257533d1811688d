//! Exclusion and frequency folding over bucketed words.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::buckets::WordBuckets;

/// A surviving 5-letter word with its combined frequency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseWord {
    /// The base word.
    pub word: String,
    /// Own frequency plus folded-in derived-form frequency.
    pub frequency: f64,
}

/// Lookup with a zero default, the folding primitive.
fn mass(map: &HashMap<String, f64>, key: &str) -> f64 {
    map.get(key).copied().unwrap_or(0.0)
}

/// Collapse buckets into surviving base words, in input encounter order.
///
/// A base word whose spelling plus `s` was seen as a 4-letter word plus `s`
/// is dropped outright, whatever its frequency. Every survivor picks up the
/// frequency mass of its derived spellings: `word + "s"` from the 6-letter
/// bucket, `word + "es"` from the 7-letter bucket, and for words ending in
/// `y`, the `ies` spelling from the (empty) `ies` bucket.
#[tracing::instrument(skip_all, fields(base = buckets.base_len()))]
pub fn collapse(buckets: &WordBuckets) -> Vec<BaseWord> {
    let mut out = Vec::with_capacity(buckets.base_order.len());

    for word in &buckets.base_order {
        let plural = format!("{word}s");
        if buckets.four_plus_s.contains(&plural) {
            tracing::debug!(word, "dropped: pluralization of a shorter word");
            continue;
        }

        let mut frequency = buckets.base[word];
        frequency += mass(&buckets.six_s, &plural);
        frequency += mass(&buckets.seven_es, &format!("{word}es"));
        if let Some(stem) = word.strip_suffix('y') {
            frequency += mass(&buckets.eight_ies, &format!("{stem}ies"));
        }

        out.push(BaseWord {
            word: word.clone(),
            frequency,
        });
    }

    out
}

/// Like [`collapse`], but sorted by combined frequency, highest first.
///
/// Ties break by word ascending, so the ordering is deterministic.
pub fn rank(buckets: &WordBuckets) -> Vec<BaseWord> {
    let mut out = collapse(buckets);
    out.sort_by(|a, b| {
        b.frequency
            .total_cmp(&a.frequency)
            .then_with(|| a.word.cmp(&b.word))
    });
    out
}
