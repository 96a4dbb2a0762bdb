use crate::{CliError, CliResult};

use std::path::Path;

use serde_json::{Value, json};
use tender_core::UploadFile;
use tender_session::ALLOWED_MIME_TYPES;

/// MIME type for the document formats the upload endpoints accept
pub fn mime_for(file_name: &str) -> Option<&'static str> {
    let (_, ext) = file_name.rsplit_once('.')?;
    match ext.to_lowercase().as_str() {
        "pdf" => Some(ALLOWED_MIME_TYPES[0]),
        "doc" => Some(ALLOWED_MIME_TYPES[1]),
        "docx" => Some(ALLOWED_MIME_TYPES[2]),
        _ => None,
    }
}

/// Read a document from disk into an upload payload
pub fn load(path: &Path) -> CliResult<UploadFile> {
    let bytes = std::fs::read(path).map_err(|source| CliError::File {
        path: path.to_path_buf(),
        source,
    })?;

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let mime_type = mime_for(&file_name).map(String::from);

    log::debug!(
        "Loaded {} ({} bytes, {:?})",
        file_name,
        bytes.len(),
        mime_type
    );
    Ok(UploadFile::new(file_name, mime_type, bytes))
}

pub fn parse_resume(path: &Path) -> CliResult<Value> {
    let file = load(path)?;
    let parsed = tender_resume::parse_upload(&file)?;
    Ok(serde_json::to_value(parsed)?)
}

/// Form prefill for an uploaded resume. A parse failure is reported inline
/// and does not fail the upload.
pub fn prefill(file: &UploadFile) -> Value {
    match tender_resume::parse_upload(file) {
        Ok(parsed) => json!(parsed),
        Err(e) => {
            log::warn!("Resume parse failed for {}: {}", file.file_name, e);
            json!({ "error": e.user_message() })
        }
    }
}
