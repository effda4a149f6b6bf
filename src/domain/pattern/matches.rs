// src/domain/pattern/matches.rs
//
// Match records produced by the pattern catalog.
//
// A match is a span into the *probed* path string. Grouping re-reads the
// same spans out of candidate paths discovered on disk, so the spans must
// stay byte offsets into the original string, never normalized paths.

/// A version token located in a path, e.g. `v003`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionMatch {
    /// Start offset of the whole token.
    pub start: usize,

    /// End offset (exclusive) of the whole token.
    pub end: usize,

    /// Start offset of the numeric sub-span, e.g. the `003` in `v003`.
    pub number_start: usize,

    /// End offset (exclusive) of the numeric sub-span.
    pub number_end: usize,

    /// Literal token text, e.g. `"v003"`.
    pub text: String,
}

impl VersionMatch {
    /// Digit count of the numeric sub-span.
    pub fn number_len(&self) -> usize {
        self.number_end - self.number_start
    }
}

/// A frame-padding token located in a path, e.g. `####` or `%04d`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaddingMatch {
    /// Start offset of the whole token.
    pub start: usize,

    /// End offset (exclusive) of the whole token.
    pub end: usize,

    /// Width of the on-disk frame substring the token expands to.
    /// Equals the literal length for hash tokens, the captured integer
    /// for printf tokens.
    pub width: usize,

    /// Literal token text, e.g. `"####"` or `"%04d"`.
    pub text: String,
}

impl PaddingMatch {
    /// Length change introduced when the token is expanded to `width`
    /// characters. Zero for hash tokens, usually negative for printf
    /// (`%04d` is four characters wide but expands to four digits only
    /// by coincidence; `%02d` shrinks by two).
    pub fn width_delta(&self) -> isize {
        self.width as isize - self.text.len() as isize
    }
}
