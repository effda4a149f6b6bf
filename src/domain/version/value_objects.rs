// src/domain/version/value_objects.rs
//
// Version Value Object
//
// The externally visible result unit of a scan. Pure, immutable data:
// no &mut self methods, no side effects, no I/O. The picker UI treats
// these as opaque tokens and reads them back through the scanner's
// accessor operations.

use serde::{Deserialize, Serialize};

/// One version bucket discovered on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Version {
    /// Original path with any frame token restored to its canonical
    /// literal form, e.g. `render_v003_####.exr`.
    pub padded_path: String,

    /// Full version string shared by every file in the bucket,
    /// e.g. `v003`. `None` when the path carries no version token.
    pub version_key: Option<String>,

    /// Literal on-disk frame substrings, e.g. `["0007", "0008"]`, in
    /// ascending file-enumeration order. Always empty for un-padded
    /// paths.
    pub frames: Vec<String>,
}

impl Version {
    pub fn new(padded_path: String, version_key: Option<String>, frames: Vec<String>) -> Self {
        Self {
            padded_path,
            version_key,
            frames,
        }
    }

    /// First and last frame as integers, when the bucket has frames and
    /// they parse as numbers.
    pub fn frame_range(&self) -> Option<(i64, i64)> {
        let first = self.frames.first()?.parse().ok()?;
        let last = self.frames.last()?.parse().ok()?;
        Some((first, last))
    }
}
