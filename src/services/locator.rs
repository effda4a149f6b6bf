// src/services/locator.rs
//
// Substring Locator
//
// Finds version and padding tokens in a path string and applies the
// ambiguity rules: version occurrences must agree with the trailing-most
// occurrence, padding patterns are tried in priority order and only the
// last occurrence of the winning pattern counts.

use crate::domain::pattern::{PaddingMatch, PaddingPattern, VersionMatch, VersionPattern};

/// Which part of the path padding tokens may occupy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingScope {
    /// Only occurrences inside the final path component count. Directory
    /// names regularly contain hash runs that are not frame tokens.
    FilenameOnly,

    /// Occurrences anywhere in the path count.
    FullPath,
}

/// Find every non-overlapping version occurrence, keeping only those
/// whose text equals the last occurrence's text.
///
/// A path like `shotA_v001/renders/v002_final.exr` carries two version
/// tokens; the trailing `v002` is authoritative and the mismatched
/// `v001` is dropped, not reported.
pub fn locate_versions(path: &str, pattern: &VersionPattern) -> Vec<VersionMatch> {
    let matches = pattern.find_all(path);
    let last_text = match matches.last() {
        Some(last) => last.text.clone(),
        None => return Vec::new(),
    };
    matches.into_iter().filter(|m| m.text == last_text).collect()
}

/// Find the authoritative padding token, if any.
///
/// Patterns are tried in priority order; the first that yields any
/// occurrence within `scope` wins with its *last* occurrence. Results
/// are never merged across patterns.
pub fn locate_padding(
    path: &str,
    patterns: &[PaddingPattern],
    scope: PaddingScope,
) -> Option<PaddingMatch> {
    let min_start = match scope {
        PaddingScope::FilenameOnly => filename_start(path),
        PaddingScope::FullPath => 0,
    };

    for pattern in patterns {
        let found = pattern
            .find_all(path)
            .into_iter()
            .filter(|m| m.start >= min_start)
            .last();
        if found.is_some() {
            return found;
        }
    }
    None
}

/// Byte offset of the final path component.
fn filename_start(path: &str) -> usize {
    path.rfind(['/', '\\']).map(|i| i + 1).unwrap_or(0)
}
