//! Error types for documentation lookup
//!
//! Index-build failures are recorded per assembly and replayed on every later
//! lookup, so every variant carries plain owned data and the enum is `Clone`.

use std::path::PathBuf;
use thiserror::Error;

/// Failures surfaced while locating, reading or parsing a sidecar
/// documentation file
///
/// A missing documentation *entry* is never an error; lookups report absence
/// as `Ok(None)`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DocsError {
    /// The assembly has no on-disk location to derive a sidecar path from
    /// (dynamically emitted or in-memory assemblies)
    #[error("assembly '{assembly}' has no on-disk location")]
    SourceUnlocatable { assembly: String },

    /// No sidecar documentation file at the derived path
    #[error("documentation file not found: {path:?}")]
    SourceMissing { path: PathBuf },

    /// Sidecar file exists but is not well-formed XML
    #[error("failed to parse documentation file {path:?}: {message}")]
    SourceMalformed { path: PathBuf, message: String },

    /// Sidecar file could not be read for a reason other than absence
    #[error("IO error reading {path:?}: {message}")]
    Io { path: PathBuf, message: String },
}

/// Result type alias for documentation lookup operations
pub type DocsResult<T> = Result<T, DocsError>;
