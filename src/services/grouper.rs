// src/services/grouper.rs
//
// Version Grouper
//
// Re-derives the version substrings of each candidate file at the
// structural positions recorded from the probed path, then buckets the
// files whose substrings all agree. Positions after the padding token
// shift by the difference between the token's expanded width and its
// literal width; that correction lives in `adjusted_position` so it can
// be tested on its own.

use std::collections::BTreeMap;

use log::warn;

use crate::domain::pattern::{PaddingMatch, VersionMatch};

/// Map an offset in the probed path onto the corresponding offset in a
/// candidate path discovered through the synthesized glob expression.
///
/// Only positions strictly after the padding token's start are shifted;
/// everything before it is unaffected by the expansion.
pub fn adjusted_position(pos: usize, padding_match: Option<&PaddingMatch>) -> usize {
    match padding_match {
        Some(padding) if pos > padding.start => {
            (pos as isize + padding.width_delta()).max(0) as usize
        }
        _ => pos,
    }
}

/// Bucket candidate files by their shared version text.
///
/// A candidate whose re-derived version substrings disagree belongs to an
/// unrelated, coincidentally-matching path and is discarded. The key is
/// `None` when the probed path carried no version token at all; the
/// `BTreeMap` keeps buckets in key order with `None` first.
pub fn group(
    files: &[String],
    version_matches: &[VersionMatch],
    padding_match: Option<&PaddingMatch>,
) -> BTreeMap<Option<String>, Vec<String>> {
    let mut groups: BTreeMap<Option<String>, Vec<String>> = BTreeMap::new();

    'files: for file in files {
        let mut derived: Vec<&str> = Vec::with_capacity(version_matches.len());
        for m in version_matches {
            let start = adjusted_position(m.start, padding_match);
            let end = adjusted_position(m.end, padding_match);
            match file.get(start..end) {
                Some(text) => derived.push(text),
                None => {
                    warn!("Discarding candidate `{}`: version span out of range", file);
                    continue 'files;
                }
            }
        }

        if derived.windows(2).any(|pair| pair[0] != pair[1]) {
            warn!("Discarding candidate `{}`: version substrings disagree", file);
            continue;
        }

        let key = derived.last().map(|text| text.to_string());
        groups.entry(key).or_default().push(file.clone());
    }

    groups
}
