use super::*;
use crate::document::{
    CREATION_DATE_KEY, DISPLAY_NAME_KEY, FILENAME_KEY, Fragment, MOD_DATE_KEY, Metadata,
    SOURCE_PATH_KEY,
};
use std::fs;
use tempfile::TempDir;

fn fragment(name: &str, content: &str, source_path: &str) -> Fragment {
    Fragment::new(
        content,
        Metadata::new()
            .with(FILENAME_KEY, name)
            .with(SOURCE_PATH_KEY, source_path),
    )
}

#[test]
fn test_assemble_empty() {
    let ctx = CitationAssembler::default().assemble(&[]);
    assert_eq!(ctx.context_text, "");
    assert!(ctx.citations.is_empty());
    assert!(ctx.is_empty());
}

#[test]
fn test_citation_ids_are_sequential() {
    let fragments = vec![
        fragment("a.pdf", "one", "/nonexistent/a.pdf"),
        fragment("b.pdf", "two", "/nonexistent/b.pdf"),
        fragment("c.pdf", "three", "/nonexistent/c.pdf"),
    ];

    let ctx = CitationAssembler::default().assemble(&fragments);

    let ids: Vec<&str> = ctx.citations.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["[1]", "[2]", "[3]"]);
    let names: Vec<&str> = ctx.citations.iter().map(|c| c.filename.as_str()).collect();
    assert_eq!(names, vec!["a.pdf", "b.pdf", "c.pdf"]);
    assert!(ctx.citations.iter().all(|c| c.url.is_empty()));
    assert_eq!(ctx.num_sources(), 3);
}

#[test]
fn test_url_only_for_existing_files() {
    let dir = TempDir::new().unwrap();
    let existing = dir.path().join("001_2024_ruling.pdf");
    fs::write(&existing, b"%PDF").unwrap();
    let missing = dir.path().join("gone.pdf");

    let fragments = vec![
        fragment("a", "x", existing.to_str().unwrap()),
        fragment("b", "y", missing.to_str().unwrap()),
        fragment("c", "z", ""),
    ];

    let ctx = CitationAssembler::new("http://files.local/api/files/").assemble(&fragments);

    assert_eq!(
        ctx.citations[0].url,
        "http://files.local/api/files/001_2024_ruling.pdf"
    );
    assert_eq!(ctx.citations[0].source_path, existing.to_str().unwrap());
    assert_eq!(ctx.citations[1].url, "");
    assert_eq!(ctx.citations[2].url, "");
    assert_eq!(ctx.citations[2].source_path, "");
}

#[test]
fn test_context_block_format() {
    let f = Fragment::new(
        "תוכן הפסק",
        Metadata::new()
            .with(DISPLAY_NAME_KEY, "ע\"א 12/24")
            .with(FILENAME_KEY, "x.pdf")
            .with(MOD_DATE_KEY, "D:20240101")
            .with(CREATION_DATE_KEY, "D:20231201"),
    );

    let ctx = CitationAssembler::default().assemble(&[f]);

    assert_eq!(
        ctx.context_text,
        "--- DOCUMENT [1] ---\nSource: ע\"א 12/24\nDate: D:20240101\nCreated: D:20231201\nContent:\nתוכן הפסק\n--- END [1] ---"
    );
    assert_eq!(ctx.citations[0].filename, "ע\"א 12/24");
}

#[test]
fn test_blocks_joined_with_blank_line() {
    let ctx = CitationAssembler::default().assemble(&[
        fragment("a", "one", ""),
        fragment("b", "two", ""),
    ]);
    assert!(ctx.context_text.contains("--- END [1] ---\n\n--- DOCUMENT [2] ---"));
    assert!(!ctx.context_text.contains("Date:"));
}

#[test]
fn test_missing_metadata_labels_unknown() {
    let ctx = CitationAssembler::default().assemble(&[Fragment::new("c", Metadata::new())]);
    assert_eq!(ctx.citations[0].filename, "Unknown");
    assert!(ctx.context_text.contains("Source: Unknown\n"));
}

#[test]
fn test_metadata_passes_through_unchanged() {
    let metadata = Metadata::new()
        .with(FILENAME_KEY, "a.pdf")
        .with("page", 7)
        .with("court", "עליון");
    let ctx = CitationAssembler::default().assemble(&[Fragment::new("c", metadata.clone())]);
    assert_eq!(ctx.citations[0].metadata, metadata);
}

#[test]
fn test_citation_serializes_expected_fields() {
    let ctx = CitationAssembler::default().assemble(&[fragment("a.pdf", "c", "")]);
    let value = serde_json::to_value(&ctx.citations[0]).unwrap();
    let obj = value.as_object().unwrap();
    let mut keys: Vec<&str> = obj.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["filename", "id", "metadata", "source_path", "url"]);
}

#[test]
fn test_resolve_file_url_directory_has_name() {
    let dir = TempDir::new().unwrap();
    let url = resolve_file_url("http://h/files", dir.path().to_str().unwrap());
    let name = dir.path().file_name().unwrap().to_string_lossy();
    assert_eq!(url, format!("http://h/files/{name}"));
}
