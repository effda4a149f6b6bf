// src/services/resolver.rs
//
// Resolver - the version/frame-sequence pipeline.
//
// Locator -> Synthesizer -> Scanner -> Grouper -> Builder, one complete
// pass per `resolve(path)` call.
//
// CRITICAL RULES:
// - Deterministic: same path + same filesystem state => same output
// - Idempotent: running twice produces identical results
// - No process-global state; relative roots are joined, never chdir'd
// - Ordinary absence (no tokens, no files) is data, never an error

use std::path::{Path, PathBuf};

use log::debug;

use crate::domain::pattern::{PaddingMatch, PatternCatalog, VersionMatch};
use crate::domain::version::Version;
use crate::error::ScanResult;
use crate::services::locator::PaddingScope;
use crate::services::{builder, globber, grouper, locator};

/// How paths that carry no version token at all are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingVersionPolicy {
    /// Group discovered files under a single `None`-keyed bucket.
    #[default]
    NoneBucket,

    /// Treat the path as non-matching and resolve to an empty list.
    Discard,
}

/// Parsed decomposition of one probed path: the agreeing version
/// occurrences plus at most one padding occurrence. Created fresh per
/// `resolve` call and discarded with it.
#[derive(Debug, Clone)]
pub struct ResolvedPath {
    pub version_matches: Vec<VersionMatch>,
    pub padding_match: Option<PaddingMatch>,
}

/// The version/frame-sequence resolver.
pub struct Resolver {
    catalog: PatternCatalog,
    root_dir: Option<PathBuf>,
    missing_version_policy: MissingVersionPolicy,
}

impl Resolver {
    pub fn new(catalog: PatternCatalog) -> Self {
        Self {
            catalog,
            root_dir: None,
            missing_version_policy: MissingVersionPolicy::default(),
        }
    }

    /// Working-directory root used to resolve relative probe paths.
    pub fn with_root_dir(mut self, root_dir: impl Into<PathBuf>) -> Self {
        self.root_dir = Some(root_dir.into());
        self
    }

    pub fn with_missing_version_policy(mut self, policy: MissingVersionPolicy) -> Self {
        self.missing_version_policy = policy;
        self
    }

    pub fn catalog(&self) -> &PatternCatalog {
        &self.catalog
    }

    pub fn root_dir(&self) -> Option<&Path> {
        self.root_dir.as_deref()
    }

    /// Locate the authoritative version and padding tokens in a path.
    ///
    /// Version patterns are tried in catalog order and the first that
    /// yields any occurrence wins; padding patterns likewise,
    /// independently, restricted to the final path component.
    pub fn decompose(&self, path: &str) -> ResolvedPath {
        let mut version_matches = Vec::new();
        for pattern in self.catalog.version_patterns() {
            version_matches = locator::locate_versions(path, pattern);
            if !version_matches.is_empty() {
                break;
            }
        }

        let padding_match = locator::locate_padding(
            path,
            self.catalog.padding_patterns(),
            PaddingScope::FilenameOnly,
        );

        ResolvedPath {
            version_matches,
            padding_match,
        }
    }

    /// Scan for sibling versions of `path` that exist on disk.
    pub fn resolve(&self, path: &str) -> ScanResult<Vec<Version>> {
        if path.is_empty() {
            return Ok(Vec::new());
        }

        // Step 1: locate tokens.
        let resolved = self.decompose(path);

        if resolved.version_matches.is_empty()
            && self.missing_version_policy == MissingVersionPolicy::Discard
        {
            debug!("No version token in `{}`: discarded by policy", path);
            return Ok(Vec::new());
        }

        // Step 2: synthesize the wildcard expression.
        let glob_expr = globber::to_glob(
            path,
            &resolved.version_matches,
            resolved.padding_match.as_ref(),
        );
        debug!(
            "Resolved `{}` ({} version match(es), padding: {}) -> `{}`",
            path,
            resolved.version_matches.len(),
            resolved
                .padding_match
                .as_ref()
                .map(|m| m.text.as_str())
                .unwrap_or("none"),
            glob_expr
        );

        // Step 3: enumerate candidates.
        let files = globber::scan(&glob_expr, self.root_dir.as_deref())?;

        // Step 4: bucket self-consistent candidates.
        let groups = grouper::group(
            &files,
            &resolved.version_matches,
            resolved.padding_match.as_ref(),
        );

        // Step 5: build the ordered result.
        Ok(builder::build(&groups, resolved.padding_match.as_ref()))
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new(PatternCatalog::default())
    }
}
