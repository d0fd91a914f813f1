//! Documentation lookup facade
//!
//! `XmlDocsManager` ties the pieces together: derive the canonical key for a
//! reflected element, make sure the owning assembly's index is loaded, and
//! return the matching fragment. Missing documentation is a normal outcome
//! (`Ok(None)`); only index-build failures are errors, and those replay from
//! the cache on every later call for the same assembly.

use serde::{Deserialize, Serialize};

use crate::assembly::AssemblyRef;
use crate::doc_index::{DocIndex, DocIndexOptions};
use crate::error::DocsResult;
use crate::index_cache::DocIndexCache;
use crate::member_ref::{self, MemberRef};
use crate::xml_doc_utils;

/// Redirect chains longer than this are returned unresolved
const MAX_INHERITDOC_HOPS: usize = 4;

/// A resolved documentation entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocEntry {
    /// Canonical key the lookup was made with
    pub key: String,
    /// Raw XML documentation fragment
    pub xml_doc: String,
    /// When the entry was a bare inheritdoc redirect, the key of the entry
    /// the documentation was actually taken from
    pub inherited_from: Option<String>,
}

/// Facade for resolving XML documentation of reflected C# elements
#[derive(Debug, Default)]
pub struct XmlDocsManager {
    cache: DocIndexCache,
    options: DocIndexOptions,
}

impl XmlDocsManager {
    /// Manager with default options: lenient parsing, inheritdoc resolution on
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: DocIndexOptions) -> Self {
        Self {
            cache: DocIndexCache::new(),
            options,
        }
    }

    /// Documentation for a reflected element, or `Ok(None)` when the
    /// assembly's index has no entry for it
    ///
    /// The first lookup against an assembly reads and parses its sidecar
    /// file; every later lookup — including a replayed failure — is
    /// memory-only.
    pub fn docs_for_member(
        &self,
        assembly: &AssemblyRef,
        member: &MemberRef,
    ) -> DocsResult<Option<DocEntry>> {
        self.docs_for_key(assembly, &member.doc_key())
    }

    /// Documentation for a type by fully qualified name
    pub fn docs_for_type(
        &self,
        assembly: &AssemblyRef,
        full_type_name: &str,
    ) -> DocsResult<Option<DocEntry>> {
        self.docs_for_member(assembly, &MemberRef::type_ref(full_type_name))
    }

    /// Documentation for a pre-rendered canonical key
    pub fn docs_for_key(&self, assembly: &AssemblyRef, key: &str) -> DocsResult<Option<DocEntry>> {
        let index = self.cache.get_or_load(assembly, self.options.parse_mode)?;

        let Some(xml_doc) = index.get(key) else {
            return Ok(None);
        };

        let (xml_doc, inherited_from) = if self.options.resolve_inheritdoc {
            follow_inheritdoc(&index, xml_doc)
        } else {
            (xml_doc.to_string(), None)
        };

        Ok(Some(DocEntry {
            key: key.to_string(),
            xml_doc,
            inherited_from,
        }))
    }
}

/// Follow bare `<inheritdoc cref="..."/>` fragments to their target entry
/// within the same index
///
/// Only compiler-expanded crefs in canonical key form are chased, and only
/// within the owning assembly. A dangling or non-canonical cref leaves the
/// fragment as-is.
fn follow_inheritdoc(index: &DocIndex, xml_doc: &str) -> (String, Option<String>) {
    let mut current = xml_doc;
    let mut inherited_from = None;

    for _ in 0..MAX_INHERITDOC_HOPS {
        if !xml_doc_utils::is_bare_inheritdoc(current) {
            break;
        }
        let Some(cref) = xml_doc_utils::extract_cref(current) else {
            break;
        };
        if !member_ref::is_canonical_key(&cref) {
            break;
        }
        let Some(target) = index.get(&cref) else {
            break;
        };
        current = target;
        inherited_from = Some(cref);
    }

    (current.to_string(), inherited_from)
}

#[cfg(test)]
#[path = "docs_manager_tests.rs"]
mod tests;
