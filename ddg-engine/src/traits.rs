use async_trait::async_trait;
use ddg_core::error::DdgError;
use ddg_core::types::GeneratedEmail;
use ddg_providers::DuckClient;

#[async_trait]
pub trait EmailSource: Send + Sync {
    async fn request_email(&self, api_key: &str) -> Result<GeneratedEmail, DdgError>;
}

#[async_trait]
impl EmailSource for DuckClient {
    async fn request_email(&self, api_key: &str) -> Result<GeneratedEmail, DdgError> {
        DuckClient::request_email(self, api_key).await
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardOutcome {
    Copied,
    Unsupported,
    Failed(String),
}

impl ClipboardOutcome {
    pub fn is_copied(&self) -> bool {
        matches!(self, ClipboardOutcome::Copied)
    }
}

/// Best-effort copy to the system clipboard. Implementations never error;
/// they report what happened instead.
#[async_trait]
pub trait Clipboard: Send + Sync {
    async fn copy(&self, text: &str) -> ClipboardOutcome;
}
