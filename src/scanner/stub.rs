// src/scanner/stub.rs
//
// Synthetic scanner for exercising consumers without a filesystem.
// Returns canned versions after an optional fixed delay simulating the
// cost of a real directory listing.

use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use crate::domain::version::Version;
use crate::error::ScanResult;

use super::VersionScanner;

pub struct StubVersionScanner {
    versions: Vec<Version>,
    delay: Duration,
}

impl StubVersionScanner {
    pub fn new(versions: Vec<Version>) -> Self {
        Self {
            versions,
            delay: Duration::ZERO,
        }
    }

    /// Simulated scan duration.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

impl VersionScanner for StubVersionScanner {
    fn scan_versions(&self, _path: &str) -> ScanResult<Vec<Version>> {
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
        Ok(self.versions.clone())
    }

    fn version_absolute_path(&self, version: &Version) -> PathBuf {
        PathBuf::from(&version.padded_path)
    }

    fn version_formatted_date(&self, _version: &Version) -> String {
        "n/a".to_string()
    }

    fn replace_path_version(&self, path: &str, _version_str: &str) -> String {
        path.to_string()
    }
}
