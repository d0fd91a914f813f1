//! Documentation index built from an assembly's sidecar XML file
//!
//! The sidecar file is the compiler's flat dump of every documentation
//! comment in the assembly: a `<members>` collection of `<member>` entries
//! keyed by canonical member name. The whole file is read into memory and
//! parsed eagerly into a flat key-to-fragment map; there is no streaming or
//! incremental parse.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::Path;
use std::time::Instant;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::assembly::AssemblyRef;
use crate::error::{DocsError, DocsResult};
use crate::member_ref::is_canonical_key;

/// How index construction treats `<member>` entries without a `name` attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Skip keyless entries with a warning. The compiler never emits them,
    /// but hand-edited sidecar files do turn up.
    #[default]
    Lenient,
    /// Fail the build on the first keyless entry
    Strict,
}

/// Configuration for index construction and lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocIndexOptions {
    pub parse_mode: ParseMode,
    /// Follow bare `<inheritdoc cref="..."/>` fragments to their target
    /// entry within the same index
    pub resolve_inheritdoc: bool,
}

impl Default for DocIndexOptions {
    fn default() -> Self {
        Self {
            parse_mode: ParseMode::Lenient,
            resolve_inheritdoc: true,
        }
    }
}

/// Flat mapping of canonical documentation keys to raw XML fragments for one
/// assembly
///
/// Built exactly once per assembly by [`DocIndex::load`]; immutable after
/// construction.
#[derive(Debug, Default)]
pub struct DocIndex {
    entries: HashMap<String, String>,
}

impl DocIndex {
    /// Locate, read and parse the sidecar documentation file for an assembly
    ///
    /// ## Errors
    ///
    /// * `SourceUnlocatable` if the assembly has no on-disk location
    /// * `SourceMissing` if no file exists at the derived sidecar path
    /// * `SourceMalformed` if the file is not well-formed XML (or, in strict
    ///   mode, contains a keyless `<member>` entry)
    /// * `Io` for any other read failure
    pub fn load(assembly: &AssemblyRef, mode: ParseMode) -> DocsResult<Self> {
        let doc_path = assembly.doc_file_path()?;
        let content = match std::fs::read_to_string(&doc_path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(DocsError::SourceMissing { path: doc_path });
            }
            Err(err) => {
                return Err(DocsError::Io {
                    path: doc_path,
                    message: err.to_string(),
                });
            }
        };

        let start_time = Instant::now();
        let index = Self::parse(&content, &doc_path, mode)?;

        let duration = start_time.elapsed();
        log::info!(
            "Built documentation index for {} ({} entries) in {:.2}ms",
            assembly.name,
            index.len(),
            duration.as_secs_f64() * 1000.0
        );

        Ok(index)
    }

    fn parse(content: &str, doc_path: &Path, mode: ParseMode) -> DocsResult<Self> {
        let mut reader = Reader::from_str(content);
        let mut entries = HashMap::new();

        loop {
            match reader.read_event() {
                Ok(Event::Start(ref e)) if e.name().as_ref() == b"member" => {
                    let key = key_attribute(e);
                    // The body is kept as raw markup, exactly as authored
                    let body = reader.read_text(e.name()).map_err(|err| {
                        DocsError::SourceMalformed {
                            path: doc_path.to_path_buf(),
                            message: err.to_string(),
                        }
                    })?;
                    insert_entry(&mut entries, key, body.trim().to_string(), doc_path, mode)?;
                }
                Ok(Event::Empty(ref e)) if e.name().as_ref() == b"member" => {
                    // Self-closing entry, documented but empty
                    insert_entry(&mut entries, key_attribute(e), String::new(), doc_path, mode)?;
                }
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(err) => {
                    return Err(DocsError::SourceMalformed {
                        path: doc_path.to_path_buf(),
                        message: err.to_string(),
                    });
                }
            }
        }

        Ok(Self { entries })
    }

    /// Fragment stored under a canonical key, if any
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Number of indexed entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All canonical keys in the index, in arbitrary order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

/// Extract the `name` attribute of a `<member>` tag
fn key_attribute(e: &BytesStart) -> Option<String> {
    for attr in e.attributes() {
        match attr {
            Ok(attr) if attr.key.as_ref() == b"name" => {
                match std::str::from_utf8(&attr.value) {
                    Ok(value) => return Some(value.to_string()),
                    Err(_) => continue,
                }
            }
            _ => continue,
        }
    }
    None
}

fn insert_entry(
    entries: &mut HashMap<String, String>,
    key: Option<String>,
    body: String,
    doc_path: &Path,
    mode: ParseMode,
) -> DocsResult<()> {
    match key {
        Some(key) if is_canonical_key(&key) => {
            entries.insert(key, body);
        }
        Some(key) => {
            // Namespace entries and the compiler's unresolved-cref markers
            // are not member keys
            log::debug!("Skipping documentation entry with non-member key '{}'", key);
        }
        None => match mode {
            ParseMode::Lenient => {
                log::warn!(
                    "Skipping member entry without a name attribute in {:?}",
                    doc_path
                );
            }
            ParseMode::Strict => {
                return Err(DocsError::SourceMalformed {
                    path: doc_path.to_path_buf(),
                    message: "member entry without a name attribute".to_string(),
                });
            }
        },
    }
    Ok(())
}

#[cfg(test)]
#[path = "doc_index_tests.rs"]
mod tests;
