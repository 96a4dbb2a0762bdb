use crate::SessionManager;

use std::sync::Arc;
use std::time::Duration;

use tender_config::UploadConfig;
use tender_core::{AuthError, AuthResult, DocumentKind, DocumentStore, UploadFile, UploadReceipt};

pub const ALLOWED_MIME_TYPES: [&str; 3] = [
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];

pub const ALLOWED_EXTENSIONS: [&str; 3] = [".pdf", ".doc", ".docx"];

const RETRY_FAILED_MESSAGE: &str = "Upload failed, please try again";

/// Uploads resume and transcript documents for the signed-in user.
///
/// An upload aborted in flight (typically by a token change) is retried once
/// after a short delay. On success the profile is refreshed so the stored
/// file name shows up.
pub struct DocumentUploader {
    store: Arc<dyn DocumentStore>,
    session: SessionManager,
    max_size_bytes: u64,
    retry_delay: Duration,
}

impl DocumentUploader {
    pub fn new(store: Arc<dyn DocumentStore>, session: SessionManager) -> Self {
        Self::with_config(store, session, &UploadConfig::default())
    }

    pub fn with_config(
        store: Arc<dyn DocumentStore>,
        session: SessionManager,
        config: &UploadConfig,
    ) -> Self {
        Self {
            store,
            session,
            max_size_bytes: config.max_size_bytes,
            retry_delay: config.abort_retry_delay(),
        }
    }

    /// Type and size checks. MIME type wins; the extension is the fallback
    /// for files whose type was not detected.
    pub fn validate(&self, file: &UploadFile) -> AuthResult<()> {
        let mime_ok = file
            .mime_type
            .as_deref()
            .is_some_and(|mime| ALLOWED_MIME_TYPES.contains(&mime));
        let extension_ok = file
            .extension()
            .is_some_and(|ext| ALLOWED_EXTENSIONS.contains(&ext.as_str()));

        if !mime_ok && !extension_ok {
            return Err(AuthError::validation(
                "Invalid file type. Please upload a PDF, DOC, or DOCX file.",
                Some(String::from("file")),
            ));
        }

        if file.size() > self.max_size_bytes {
            return Err(AuthError::validation(
                format!(
                    "File size exceeds {}MB limit.",
                    self.max_size_bytes / (1024 * 1024)
                ),
                Some(String::from("file")),
            ));
        }

        Ok(())
    }

    pub async fn upload(&self, kind: DocumentKind, file: &UploadFile) -> AuthResult<UploadReceipt> {
        let action = match kind {
            DocumentKind::Resume => "upload_resume",
            DocumentKind::Transcript => "upload_transcript",
        };

        if !self.session.snapshot().is_authenticated() {
            return Err(self.reject(action, AuthError::not_authenticated()));
        }
        self.validate(file).map_err(|e| self.reject(action, e))?;

        let receipt = match self.store.upload(kind, file).await {
            Err(e) if e.is_aborted() => {
                log::debug!(
                    "{} aborted, retrying in {}ms",
                    action,
                    self.retry_delay.as_millis()
                );
                tokio::time::sleep(self.retry_delay).await;
                match self.store.upload(kind, file).await {
                    Err(e) if e.is_aborted() => {
                        Err(AuthError::provider(RETRY_FAILED_MESSAGE, None))
                    }
                    other => other,
                }
            }
            other => other,
        }
        .map_err(|e| self.reject(action, e))?;

        log::info!("Uploaded {} {}", kind.as_str(), receipt.filename);

        if let Err(e) = self.session.refresh_profile().await {
            log::warn!("Profile refresh after {} failed: {}", action, e);
        }

        Ok(receipt)
    }

    fn reject(&self, action: &str, err: AuthError) -> AuthError {
        if !err.is_aborted() {
            log::warn!("{} failed: {}", action, err);
            self.session.diagnostics().record_auth_error(action, &err);
        }
        err
    }
}
