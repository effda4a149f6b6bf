// src/domain/pattern/catalog.rs
//
// Pattern Catalog - process-wide, immutable recognizer configuration.
//
// Patterns are supplied as ordered lists and evaluated short-circuit:
// the first version pattern that yields any match wins, and likewise for
// padding patterns independently. Structural requirements (a capture
// group isolating the numeric part) are validated here, at registration
// time, so resolution itself can never hit a malformed pattern.

use regex::Regex;

use crate::error::{ScanError, ScanResult};

use super::matches::{PaddingMatch, VersionMatch};

// ============================================================================
// VERSION PATTERN
// ============================================================================

/// Recognizer for version tokens, e.g. `v1`, `v01`, `V003`.
///
/// Capture group 1 must isolate the numeric part of the token; the group
/// is required and its absence is a configuration error.
#[derive(Debug, Clone)]
pub struct VersionPattern {
    regex: Regex,
}

impl VersionPattern {
    pub fn new(source: &str) -> ScanResult<Self> {
        let regex = Regex::new(source)?;
        if regex.captures_len() < 2 {
            return Err(ScanError::MissingCaptureGroup {
                pattern: source.to_string(),
            });
        }
        Ok(Self { regex })
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// All non-overlapping occurrences in `path`, in ascending order.
    pub fn find_all(&self, path: &str) -> Vec<VersionMatch> {
        self.regex
            .captures_iter(path)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let number = caps.get(1)?;
                Some(VersionMatch {
                    start: whole.start(),
                    end: whole.end(),
                    number_start: number.start(),
                    number_end: number.end(),
                    text: whole.as_str().to_string(),
                })
            })
            .collect()
    }
}

// ============================================================================
// PADDING PATTERN
// ============================================================================

/// How a padding pattern resolves its expanded width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingStyle {
    /// Width is captured by group 1, e.g. the `4` in `%04d`.
    Printf,

    /// Width is the literal token length, e.g. 4 for `####`.
    Literal,
}

/// Recognizer for frame-padding tokens, tagged with its width style.
#[derive(Debug, Clone)]
pub struct PaddingPattern {
    regex: Regex,
    style: PaddingStyle,
}

impl PaddingPattern {
    /// Printf-style pattern, e.g. `%0(\d)d`. Capture group 1 must isolate
    /// the expanded width; its absence is a configuration error because
    /// the matcher cannot fall back to literal-length inference.
    pub fn printf(source: &str) -> ScanResult<Self> {
        let regex = Regex::new(source)?;
        if regex.captures_len() < 2 {
            return Err(ScanError::MissingCaptureGroup {
                pattern: source.to_string(),
            });
        }
        Ok(Self {
            regex,
            style: PaddingStyle::Printf,
        })
    }

    /// Literal-width pattern, e.g. `#{2,}`. The expanded width is the
    /// matched token length; no capture group is needed.
    pub fn literal(source: &str) -> ScanResult<Self> {
        let regex = Regex::new(source)?;
        Ok(Self {
            regex,
            style: PaddingStyle::Literal,
        })
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    pub fn style(&self) -> PaddingStyle {
        self.style
    }

    /// All non-overlapping occurrences in `path`, in ascending order.
    pub fn find_all(&self, path: &str) -> Vec<PaddingMatch> {
        self.regex
            .captures_iter(path)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let width = match self.style {
                    PaddingStyle::Printf => caps.get(1)?.as_str().parse().ok()?,
                    PaddingStyle::Literal => whole.as_str().len(),
                };
                Some(PaddingMatch {
                    start: whole.start(),
                    end: whole.end(),
                    width,
                    text: whole.as_str().to_string(),
                })
            })
            .collect()
    }
}

// ============================================================================
// CATALOG
// ============================================================================

/// Ordered recognizer lists for version and padding tokens.
#[derive(Debug, Clone)]
pub struct PatternCatalog {
    version_patterns: Vec<VersionPattern>,
    padding_patterns: Vec<PaddingPattern>,
}

impl PatternCatalog {
    /// `v1`, `v01`, `V003`, ...
    pub const VERSION_SOURCE: &'static str = r"[vV](\d+)";

    /// `%02d`, `%04d`, `%08d`, ...
    pub const PRINTF_PADDING_SOURCE: &'static str = r"%0(\d)d";

    /// `##`, `####`, `########`, ... A minimum of two hashes limits
    /// conflicts with ordinary file names.
    pub const HASH_PADDING_SOURCE: &'static str = r"#{2,}";

    pub fn new(
        version_patterns: Vec<VersionPattern>,
        padding_patterns: Vec<PaddingPattern>,
    ) -> Self {
        Self {
            version_patterns,
            padding_patterns,
        }
    }

    pub fn version_patterns(&self) -> &[VersionPattern] {
        &self.version_patterns
    }

    pub fn padding_patterns(&self) -> &[PaddingPattern] {
        &self.padding_patterns
    }
}

impl Default for PatternCatalog {
    fn default() -> Self {
        Self {
            version_patterns: vec![VersionPattern::new(Self::VERSION_SOURCE).unwrap()],
            padding_patterns: vec![
                PaddingPattern::printf(Self::PRINTF_PADDING_SOURCE).unwrap(),
                PaddingPattern::literal(Self::HASH_PADDING_SOURCE).unwrap(),
            ],
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
