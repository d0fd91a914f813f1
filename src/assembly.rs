//! Assembly identity for documentation lookup
//!
//! The sidecar documentation file lives next to the compiled assembly with
//! the same base name and an `.xml` extension; everything here is about
//! deriving that path from an assembly reference.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{DocsError, DocsResult};

/// File extension of compiler-generated sidecar documentation files
pub const DOC_FILE_EXTENSION: &str = "xml";

/// Reference to a compiled assembly whose documentation can be looked up
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssemblyRef {
    /// Assembly name without extension (e.g. "Assembly-CSharp")
    pub name: String,
    /// Full path to the compiled assembly on disk, or `None` for assemblies
    /// with no file location (dynamically emitted or loaded from memory)
    pub location: Option<PathBuf>,
}

impl AssemblyRef {
    /// An assembly at a known on-disk location
    pub fn new(name: impl Into<String>, location: PathBuf) -> Self {
        Self {
            name: name.into(),
            location: Some(location),
        }
    }

    /// An assembly without a file location
    ///
    /// Lookups against it always fail with `DocsError::SourceUnlocatable`;
    /// there is no fallback resolution for such assemblies.
    pub fn in_memory(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: None,
        }
    }

    /// Build a reference from a `.dll` path, taking the assembly name from
    /// the file stem
    pub fn from_dll_path(dll_path: &Path) -> Option<Self> {
        let name = dll_path.file_stem().and_then(|s| s.to_str())?;
        Some(Self::new(name, dll_path.to_path_buf()))
    }

    /// Derive the sidecar documentation file path: same directory and base
    /// name as the assembly, `.xml` extension
    pub fn doc_file_path(&self) -> DocsResult<PathBuf> {
        match &self.location {
            Some(location) => Ok(location.with_extension(DOC_FILE_EXTENSION)),
            None => Err(DocsError::SourceUnlocatable {
                assembly: self.name.clone(),
            }),
        }
    }
}
