//! C# XML Documentation Lookup
//!
//! This library resolves XML documentation comments for reflected C# types
//! and members: it derives the canonical documentation key for an element
//! (`T:Sample.Widget`, `M:Sample.Widget.Resize(System.Int32)`, ...), locates
//! the sidecar `.xml` file next to the owning compiled assembly, indexes the
//! file's member entries, and caches one index per assembly for the process
//! lifetime. Failures are cached too, so a broken or absent sidecar file
//! costs I/O only once.

pub mod assembly;
pub mod doc_index;
pub mod docs_manager;
pub mod error;
pub mod index_cache;
pub mod member_ref;
pub mod xml_doc_utils;
#[cfg(test)]
pub mod test_utils;

pub use assembly::AssemblyRef;
pub use doc_index::{DocIndexOptions, ParseMode};
pub use docs_manager::{DocEntry, XmlDocsManager};
pub use error::{DocsError, DocsResult};
pub use member_ref::{MemberRef, ParamType};
