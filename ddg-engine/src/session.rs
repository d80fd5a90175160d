use crate::traits::ClipboardOutcome;
use ddg_core::types::GeneratedEmail;

/// Result of one successful generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generation {
    pub email: GeneratedEmail,

    // `None` when clipboard copying is disabled in the configuration.
    pub clipboard: Option<ClipboardOutcome>,
}

impl Generation {
    pub fn address(&self) -> &str {
        &self.email.address
    }

    pub fn copied(&self) -> bool {
        self.clipboard
            .as_ref()
            .is_some_and(ClipboardOutcome::is_copied)
    }
}
