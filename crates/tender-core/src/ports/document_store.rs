use crate::{AuthResult, DocumentKind, UploadFile, UploadReceipt};

use async_trait::async_trait;

#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn upload(&self, kind: DocumentKind, file: &UploadFile) -> AuthResult<UploadReceipt>;
}
