// src/scanner/disk.rs
//
// Production scanner: resolves versions against the real filesystem.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::domain::version::Version;
use crate::error::ScanResult;
use crate::services::locator::{locate_padding, locate_versions, PaddingScope};
use crate::services::Resolver;

use super::VersionScanner;

pub struct DiskVersionScanner {
    resolver: Resolver,
}

impl DiskVersionScanner {
    pub fn new(resolver: Resolver) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    fn absolute(&self, path: &str) -> PathBuf {
        let path = Path::new(path);
        match self.resolver.root_dir() {
            Some(root) if path.is_relative() => root.join(path),
            _ => path.to_path_buf(),
        }
    }

    /// Concrete file carrying the version's timestamp: the padded path
    /// with the last discovered frame substituted back in, when frames
    /// exist.
    fn timestamp_path(&self, version: &Version) -> PathBuf {
        let mut path = version.padded_path.clone();
        if let Some(frame) = version.frames.last() {
            let padding = locate_padding(
                &path,
                self.resolver.catalog().padding_patterns(),
                PaddingScope::FilenameOnly,
            );
            if let Some(m) = padding {
                path.replace_range(m.start..m.end, frame);
            }
        }
        self.absolute(&path)
    }
}

impl VersionScanner for DiskVersionScanner {
    fn scan_versions(&self, path: &str) -> ScanResult<Vec<Version>> {
        self.resolver.resolve(path)
    }

    fn version_absolute_path(&self, version: &Version) -> PathBuf {
        self.absolute(&version.padded_path)
    }

    fn version_formatted_date(&self, version: &Version) -> String {
        let path = self.timestamp_path(version);
        match std::fs::metadata(&path).and_then(|meta| meta.modified()) {
            Ok(modified) => DateTime::<Local>::from(modified)
                .format("%Y-%m-%d %H:%M")
                .to_string(),
            Err(_) => "n/a".to_string(),
        }
    }

    fn replace_path_version(&self, path: &str, version_str: &str) -> String {
        for pattern in self.resolver.catalog().version_patterns() {
            let matches = locate_versions(path, pattern);
            if matches.is_empty() {
                continue;
            }
            let mut result = path.to_string();
            for m in matches.iter().rev() {
                result.replace_range(m.start..m.end, version_str);
            }
            return result;
        }
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scanner() -> DiskVersionScanner {
        DiskVersionScanner::new(Resolver::default())
    }

    #[test]
    fn test_replace_path_version() {
        let scanner = scanner();
        assert_eq!(
            scanner.replace_path_version("01_v01.jpg", "v02"),
            "01_v02.jpg"
        );
        assert_eq!(
            scanner.replace_path_version("01_v01_01.jpg", "v02"),
            "01_v02_01.jpg"
        );
        assert_eq!(
            scanner.replace_path_version("v01_01.jpg", "v02"),
            "v02_01.jpg"
        );
    }

    #[test]
    fn test_replace_path_version_rewrites_every_agreeing_token() {
        let scanner = scanner();
        assert_eq!(
            scanner.replace_path_version("v01_01_v01.jpg", "v02"),
            "v02_01_v02.jpg"
        );
    }

    #[test]
    fn test_replace_path_version_skips_mismatched_tokens() {
        // Only tokens agreeing with the trailing-most text are rewritten.
        let scanner = scanner();
        assert_eq!(
            scanner.replace_path_version("v03_01_v01.jpg", "v02"),
            "v03_01_v02.jpg"
        );
    }

    #[test]
    fn test_replace_path_version_without_tokens() {
        let scanner = scanner();
        assert_eq!(
            scanner.replace_path_version("name_01.jpg", "v02"),
            "name_01.jpg"
        );
    }

    #[test]
    fn test_absolute_path_joins_root_for_relative() {
        let scanner =
            DiskVersionScanner::new(Resolver::default().with_root_dir("/projects/shot"));
        let version = Version::new("render_v01.exr".to_string(), Some("v01".to_string()), vec![]);
        assert_eq!(
            scanner.version_absolute_path(&version),
            PathBuf::from("/projects/shot/render_v01.exr")
        );

        let absolute = Version::new(
            "/elsewhere/render_v01.exr".to_string(),
            Some("v01".to_string()),
            vec![],
        );
        assert_eq!(
            scanner.version_absolute_path(&absolute),
            PathBuf::from("/elsewhere/render_v01.exr")
        );
    }

    #[test]
    fn test_formatted_date_of_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::File::create(dir.path().join("name_0003.exr")).unwrap();

        let scanner = DiskVersionScanner::new(Resolver::default().with_root_dir(dir.path()));
        let version = Version::new(
            "name_####.exr".to_string(),
            None,
            vec!["0003".to_string()],
        );

        let date = scanner.version_formatted_date(&version);
        assert_ne!(date, "n/a");
        // `%Y-%m-%d %H:%M`
        assert_eq!(date.len(), 16);
    }

    #[test]
    fn test_formatted_date_of_missing_file() {
        let scanner = scanner();
        let version = Version::new("missing_####.exr".to_string(), None, vec![]);
        assert_eq!(scanner.version_formatted_date(&version), "n/a");
    }
}
