// src/scanner/mod.rs
//
// Version Scanner - the seam between the resolver and its consumers.
//
// A picker UI talks to `dyn VersionScanner` only: it passes `Version`
// records back into the accessor operations as opaque tokens and never
// inspects them itself. `DiskVersionScanner` is the production
// implementation; `StubVersionScanner` is a synthetic double for
// exercising consumers without a filesystem.

use std::path::PathBuf;

use crate::domain::elide::elide_middle;
use crate::domain::version::sequence::format_sequence;
use crate::domain::version::{frames, Version};
use crate::error::ScanResult;

mod disk;
mod stub;

pub use disk::DiskVersionScanner;
pub use stub::StubVersionScanner;

pub trait VersionScanner {
    // Scan --------------------------------------------------------------

    /// Scan for existing versions of `path` on disk.
    fn scan_versions(&self, path: &str) -> ScanResult<Vec<Version>>;

    // Version attributes ------------------------------------------------

    /// Display name of a version.
    fn version_name(&self, version: &Version) -> String {
        version
            .version_key
            .clone()
            .unwrap_or_else(|| "n/a".to_string())
    }

    /// Raw padded path of a version.
    fn version_path(&self, version: &Version) -> String {
        version.padded_path.clone()
    }

    /// Padded path resolved onto the scanner's root when relative.
    fn version_absolute_path(&self, version: &Version) -> PathBuf;

    /// Padded path with its frame range appended when frames exist,
    /// e.g. `name.####.exr 1-10` - the form host applications accept
    /// for sequence inputs.
    fn version_sequence(&self, version: &Version) -> String {
        match self.version_frame_range(version) {
            Some((first, last)) => format_sequence(&version.padded_path, first, last),
            None => version.padded_path.clone(),
        }
    }

    /// First and last frame as integers, when frames exist.
    fn version_frame_range(&self, version: &Version) -> Option<(i64, i64)> {
        version.frame_range()
    }

    /// Compact frame summary, e.g. `1-5 7 9-10`, or `n/a`.
    fn version_formatted_frames(&self, version: &Version) -> String {
        let frames: Vec<i64> = version
            .frames
            .iter()
            .filter_map(|frame| frame.parse().ok())
            .collect();
        if frames.is_empty() {
            return "n/a".to_string();
        }
        frames::format_frames(&frames, " ")
    }

    /// Modification time of the resolved file, formatted for display.
    fn version_formatted_date(&self, version: &Version) -> String;

    // Path modification -------------------------------------------------

    /// Substitute a new version string into an arbitrary path.
    fn replace_path_version(&self, path: &str, version_str: &str) -> String;

    // Display -----------------------------------------------------------

    /// Fixed-width, middle-elided multi-line summary of a version.
    fn version_repr(&self, version: &Version, max_len: usize) -> String {
        let name = self.version_name(version);
        let suffix_len = max_len.saturating_sub(15 + name.len());

        let frames = elide_middle(&self.version_formatted_frames(version), suffix_len);
        let path = elide_middle(&self.version_path(version), suffix_len);
        let date = elide_middle(&self.version_formatted_date(version), suffix_len);

        let blank = " ".repeat(name.len());
        format!(
            "| {} | frames: {} |\n| {} |   path: {} |\n| {} |   date: {} |",
            blank, frames, name, path, blank, date
        )
    }
}
