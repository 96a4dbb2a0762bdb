use crate::{ApiClient, ClientError};

use std::sync::Arc;

use async_trait::async_trait;
use tender_core::{AuthResult, DocumentKind, DocumentStore, UploadFile, UploadReceipt};

/// [`DocumentStore`] over the multipart `/files/*` endpoints
pub struct RestDocumentStore {
    api: Arc<ApiClient>,
}

impl RestDocumentStore {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl DocumentStore for RestDocumentStore {
    async fn upload(&self, kind: DocumentKind, file: &UploadFile) -> AuthResult<UploadReceipt> {
        self.api
            .upload_document(kind, file)
            .await
            .map_err(ClientError::into_auth_error)
    }
}
