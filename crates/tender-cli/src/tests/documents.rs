use crate::CliError;
use crate::documents::{load, mime_for, parse_resume, prefill};

use googletest::prelude::*;
use tempfile::TempDir;
use tender_core::UploadFile;

#[test]
fn test_mime_for_document_extensions() {
    assert_that!(mime_for("cv.pdf"), some(eq("application/pdf")));
    assert_that!(mime_for("CV.DOC"), some(eq("application/msword")));
    assert_that!(mime_for("cv.docx"), some(ends_with("wordprocessingml.document")));
    assert_that!(mime_for("cv.txt"), none());
    assert_that!(mime_for("README"), none());
}

#[test]
fn test_load_reads_name_type_and_bytes() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("transcript.pdf");
    std::fs::write(&path, b"%PDF-1.4 body").unwrap();

    let file = load(&path).unwrap();

    assert_that!(file.file_name, eq("transcript.pdf"));
    assert_that!(file.mime_type, some(eq("application/pdf")));
    assert_that!(file.size(), eq(13u64));
}

#[test]
fn test_load_missing_file_is_file_error() {
    let dir = TempDir::new().unwrap();

    let err = load(&dir.path().join("missing.pdf")).unwrap_err();

    assert!(matches!(err, CliError::File { .. }));
    assert_that!(err.code(), eq("FILE_ERROR"));
}

#[test]
fn test_parse_resume_skips_word_documents() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cv.docx");
    std::fs::write(&path, b"PK not really a docx").unwrap();

    let value = parse_resume(&path).unwrap();

    assert_that!(value["email"].as_str(), some(eq("")));
    assert_that!(value["name"].as_str(), some(eq("")));
}

#[test]
fn test_prefill_reports_parse_failure_inline() {
    let file = UploadFile::new(
        "cv.pdf",
        Some("application/pdf".to_string()),
        b"garbage".to_vec(),
    );

    let value = prefill(&file);

    assert_that!(
        value["error"].as_str(),
        some(eq("Could not auto-parse document. Please fill details manually."))
    );
}
