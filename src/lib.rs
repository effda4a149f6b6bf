// src/lib.rs
// Verscan - version and frame-sequence resolver for VFX file paths
//
// Architecture:
// - Domain-centric: value objects and pure helpers live in `domain`
// - Pipeline: the five resolution stages live in `services`
// - Explicit: tokens, offsets, and policies are data, not conventions
// - Host-independent: no UI, no node graph, no persistence

// ============================================================================
// MODULES
// ============================================================================

pub mod domain;
pub mod error;
pub mod scanner;
pub mod services;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{
    elide_middle,
    // Pattern catalog
    PaddingMatch,
    PaddingPattern,
    PaddingStyle,
    PatternCatalog,
    // Result unit
    Version,
    VersionMatch,
    VersionPattern,
};

pub use domain::version::frames::{expand_frames, format_frames};
pub use domain::version::sequence::{format_sequence, set_frame, strip_sequence};

// ============================================================================
// PUBLIC API - Pipeline
// ============================================================================

pub use services::{MissingVersionPolicy, PaddingScope, ResolvedPath, Resolver};

// ============================================================================
// PUBLIC API - Scanner seam
// ============================================================================

pub use scanner::{DiskVersionScanner, StubVersionScanner, VersionScanner};

// ============================================================================
// PUBLIC API - Errors
// ============================================================================

pub use error::{ScanError, ScanResult};
