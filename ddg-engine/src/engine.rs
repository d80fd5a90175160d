use crate::session::Generation;
use crate::traits::{Clipboard, ClipboardOutcome, EmailSource};
use ddg_core::config::Configuration;
use ddg_core::error::DdgError;
use std::sync::Arc;

pub struct Generator {
    source: Arc<dyn EmailSource>,
    clipboard: Arc<dyn Clipboard>,
}

impl Generator {
    pub fn new(source: Arc<dyn EmailSource>, clipboard: Arc<dyn Clipboard>) -> Self {
        Self { source, clipboard }
    }

    /// Requests a new address and, if enabled, copies it to the clipboard.
    ///
    /// Fails before any network traffic when the configuration is not ready.
    pub async fn generate(&self, cfg: &Configuration) -> Result<Generation, DdgError> {
        if !cfg.setup_complete {
            return Err(DdgError::SetupIncomplete);
        }
        if cfg.api_key.is_empty() {
            return Err(DdgError::MissingCredential);
        }

        let email = self.source.request_email(&cfg.api_key).await?;

        let clipboard = if cfg.clipboard_enabled() {
            let outcome = self.clipboard.copy(&email.address).await;
            match &outcome {
                ClipboardOutcome::Copied => {}
                ClipboardOutcome::Unsupported => {
                    log::debug!("{}", DdgError::ClipboardUnsupported(std::env::consts::OS))
                }
                ClipboardOutcome::Failed(reason) => log::warn!("clipboard copy failed: {reason}"),
            }
            Some(outcome)
        } else {
            None
        };

        Ok(Generation { email, clipboard })
    }
}
