// src/services/globber.rs
//
// Glob Synthesizer + Disk Scanner
//
// Turns located tokens into a filesystem wildcard expression and expands
// it on disk. Substitutions are applied back-to-front so earlier spans
// are never shifted by length changes introduced behind them; version
// and padding wildcards happen to be length-neutral for versions today,
// but the ordering must not rely on that.

use std::path::Path;

use log::{debug, warn};

use crate::domain::pattern::{PaddingMatch, VersionMatch};
use crate::error::ScanResult;

/// Replace located tokens with `[0-9]` character classes.
///
/// ex: `v01_####.exr` -> `v[0-9][0-9]_[0-9][0-9][0-9][0-9].exr`
///
/// Version substitutions cover only the numeric sub-span (the `v` stays
/// literal); the padding substitution covers the whole token at its
/// expanded width. Returns the path unchanged when there are no matches.
pub fn to_glob(
    path: &str,
    version_matches: &[VersionMatch],
    padding_match: Option<&PaddingMatch>,
) -> String {
    let mut substitutions: Vec<(usize, usize, usize)> = version_matches
        .iter()
        .map(|m| (m.number_start, m.number_end, m.number_len()))
        .collect();
    if let Some(padding) = padding_match {
        substitutions.push((padding.start, padding.end, padding.width));
    }

    // Descending start order keeps untouched spans stable.
    substitutions.sort_by(|a, b| b.0.cmp(&a.0));

    let mut expr = path.to_string();
    for (start, end, width) in substitutions {
        expr.replace_range(start..end, &"[0-9]".repeat(width));
    }
    expr
}

/// Expand a wildcard expression on disk.
///
/// A relative expression with a `root` is resolved by joining the root
/// before globbing and stripping it from the hits afterward, so the
/// returned paths keep the shape of the input expression. No process
/// working-directory change is involved. An empty result is a normal
/// outcome.
pub fn scan(glob_expr: &str, root: Option<&Path>) -> ScanResult<Vec<String>> {
    let strip_root = root.filter(|_| Path::new(glob_expr).is_relative());
    let full_expr = match strip_root {
        Some(root) => root.join(glob_expr).to_string_lossy().into_owned(),
        None => glob_expr.to_string(),
    };

    let mut files = Vec::new();
    for entry in glob::glob(&full_expr)? {
        match entry {
            Ok(hit) => {
                let hit = match strip_root {
                    Some(root) => hit.strip_prefix(root).unwrap_or(&hit).to_path_buf(),
                    None => hit,
                };
                files.push(hit.to_string_lossy().into_owned());
            }
            Err(err) => warn!("Unreadable path during scan: {}", err),
        }
    }
    files.sort();

    debug!("Scanned `{}`: {} file(s)", full_expr, files.len());
    Ok(files)
}
