//! Test utilities shared across the codebase

use std::fs;
use std::path::Path;

use crate::assembly::AssemblyRef;

/// Write a sidecar documentation file wrapping `members_xml` in the standard
/// compiler envelope, and return an `AssemblyRef` for the matching dll path
///
/// The dll itself is never created; only the sidecar file matters for
/// documentation lookup.
pub fn write_doc_assembly(dir: &Path, assembly_name: &str, members_xml: &str) -> AssemblyRef {
    let content = doc_file_content(assembly_name, members_xml);
    fs::write(dir.join(format!("{}.xml", assembly_name)), content)
        .expect("Failed to write sidecar documentation file");
    AssemblyRef::new(assembly_name, dir.join(format!("{}.dll", assembly_name)))
}

/// Overwrite an assembly's sidecar file with new member entries
pub fn rewrite_doc_assembly(assembly: &AssemblyRef, members_xml: &str) {
    let doc_path = assembly
        .doc_file_path()
        .expect("Test assembly should have a location");
    fs::write(doc_path, doc_file_content(&assembly.name, members_xml))
        .expect("Failed to rewrite sidecar documentation file");
}

fn doc_file_content(assembly_name: &str, members_xml: &str) -> String {
    format!(
        "<?xml version=\"1.0\"?>\n<doc>\n    <assembly>\n        <name>{}</name>\n    </assembly>\n    <members>\n{}\n    </members>\n</doc>\n",
        assembly_name, members_xml
    )
}
