use super::*;
use crate::test_utils::write_doc_assembly;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_load_indexes_member_entries() {
    let temp_dir = TempDir::new().unwrap();
    let assembly = write_doc_assembly(
        temp_dir.path(),
        "Sample",
        r#"        <member name="T:Sample.Widget">
            <summary>A widget.</summary>
        </member>
        <member name="M:Sample.Widget.Resize(System.Int32,Sample.Options)">
            <summary>Resizes the widget.</summary>
        </member>
        <member name="P:Sample.Widget.Size">
            <summary>Current size.</summary>
        </member>"#,
    );

    let index = DocIndex::load(&assembly, ParseMode::Lenient).unwrap();

    assert_eq!(index.len(), 3);
    assert!(index.get("T:Sample.Widget").unwrap().contains("A widget."));
    assert!(
        index
            .get("M:Sample.Widget.Resize(System.Int32,Sample.Options)")
            .unwrap()
            .contains("Resizes the widget.")
    );
    assert!(index.get("P:Sample.Widget.Size").is_some());
    assert!(index.get("T:Sample.Missing").is_none());
}

#[test]
fn test_nested_markup_preserved_in_fragment() {
    let temp_dir = TempDir::new().unwrap();
    let assembly = write_doc_assembly(
        temp_dir.path(),
        "Sample",
        r#"        <member name="M:Sample.Widget.Resize(System.Int32)">
            <summary>Resizes, see <see cref="T:Sample.Options"/> for options.</summary>
            <param name="width">The new width.</param>
        </member>"#,
    );

    let index = DocIndex::load(&assembly, ParseMode::Lenient).unwrap();
    let fragment = index.get("M:Sample.Widget.Resize(System.Int32)").unwrap();

    assert!(fragment.contains(r#"<see cref="T:Sample.Options"/>"#));
    assert!(fragment.contains(r#"<param name="width">The new width.</param>"#));
}

#[test]
fn test_self_closing_member_is_indexed_empty() {
    let temp_dir = TempDir::new().unwrap();
    let assembly = write_doc_assembly(
        temp_dir.path(),
        "Sample",
        r#"        <member name="F:Sample.Widget.count"/>"#,
    );

    let index = DocIndex::load(&assembly, ParseMode::Lenient).unwrap();
    assert_eq!(index.get("F:Sample.Widget.count"), Some(""));
}

#[test]
fn test_non_member_keys_are_skipped() {
    let temp_dir = TempDir::new().unwrap();
    let assembly = write_doc_assembly(
        temp_dir.path(),
        "Sample",
        r#"        <member name="N:Sample">
            <summary>Namespace docs.</summary>
        </member>
        <member name="T:Sample.Widget">
            <summary>A widget.</summary>
        </member>"#,
    );

    let index = DocIndex::load(&assembly, ParseMode::Lenient).unwrap();
    assert_eq!(index.len(), 1);
    assert!(index.get("N:Sample").is_none());
    assert_eq!(index.keys().collect::<Vec<_>>(), vec!["T:Sample.Widget"]);
}

#[test]
fn test_keyless_entry_skipped_when_lenient() {
    let temp_dir = TempDir::new().unwrap();
    let assembly = write_doc_assembly(
        temp_dir.path(),
        "Sample",
        r#"        <member>
            <summary>Orphaned docs.</summary>
        </member>
        <member name="T:Sample.Widget">
            <summary>A widget.</summary>
        </member>"#,
    );

    let index = DocIndex::load(&assembly, ParseMode::Lenient).unwrap();
    assert_eq!(index.len(), 1);
    assert!(index.get("T:Sample.Widget").is_some());
}

#[test]
fn test_keyless_entry_fails_when_strict() {
    let temp_dir = TempDir::new().unwrap();
    let assembly = write_doc_assembly(
        temp_dir.path(),
        "Sample",
        r#"        <member>
            <summary>Orphaned docs.</summary>
        </member>"#,
    );

    let err = DocIndex::load(&assembly, ParseMode::Strict).unwrap_err();
    match err {
        DocsError::SourceMalformed { message, .. } => {
            assert!(message.contains("name attribute"), "unexpected message: {}", message);
        }
        other => panic!("Expected SourceMalformed, got {:?}", other),
    }
}

#[test]
fn test_missing_sidecar_is_source_missing() {
    let temp_dir = TempDir::new().unwrap();
    let assembly = AssemblyRef::new("Ghost", temp_dir.path().join("Ghost.dll"));

    let err = DocIndex::load(&assembly, ParseMode::Lenient).unwrap_err();
    assert_eq!(
        err,
        DocsError::SourceMissing {
            path: temp_dir.path().join("Ghost.xml")
        }
    );
}

#[test]
fn test_truncated_file_is_source_malformed() {
    let temp_dir = TempDir::new().unwrap();
    let doc_path = temp_dir.path().join("Broken.xml");
    fs::write(
        &doc_path,
        r#"<?xml version="1.0"?><doc><members><member name="T:Sample.Widget">oops"#,
    )
    .unwrap();
    let assembly = AssemblyRef::new("Broken", temp_dir.path().join("Broken.dll"));

    let err = DocIndex::load(&assembly, ParseMode::Lenient).unwrap_err();
    assert!(
        matches!(err, DocsError::SourceMalformed { .. }),
        "Expected SourceMalformed, got {:?}",
        err
    );
}

#[test]
fn test_in_memory_assembly_is_unlocatable() {
    let assembly = AssemblyRef::in_memory("Dynamic.Proxies");

    let err = DocIndex::load(&assembly, ParseMode::Lenient).unwrap_err();
    assert_eq!(
        err,
        DocsError::SourceUnlocatable {
            assembly: "Dynamic.Proxies".to_string()
        }
    );
}

#[test]
fn test_empty_members_collection() {
    let temp_dir = TempDir::new().unwrap();
    let assembly = write_doc_assembly(temp_dir.path(), "Sample", "");

    let index = DocIndex::load(&assembly, ParseMode::Lenient).unwrap();
    assert!(index.is_empty());
}
