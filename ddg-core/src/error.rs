use std::path::PathBuf;
use thiserror::Error;

/// Every way a `ddg` invocation can fail.
///
/// Callers branch on [`DdgError::kind`] rather than on message text.
#[derive(Debug, Error)]
pub enum DdgError {
    #[error("could not read config {}: {source}", .path.display())]
    ConfigUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not write config {}: {source}", .path.display())]
    ConfigWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not resolve the home directory")]
    HomeDirUnavailable,

    #[error("no API key provided")]
    MissingCredential,

    #[error("setup has not been completed")]
    SetupIncomplete,

    #[error("invalid token")]
    InvalidCredential,

    #[error("HTTP {status}")]
    RemoteError { status: u16 },

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("request failed: {0}")]
    Transport(String),

    #[error("clipboard not supported on {0}")]
    ClipboardUnsupported(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    ConfigUnreadable,
    ConfigWriteFailed,
    HomeDirUnavailable,
    MissingCredential,
    SetupIncomplete,
    InvalidCredential,
    RemoteError,
    MalformedResponse,
    Transport,
    ClipboardUnsupported,
}

impl DdgError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DdgError::ConfigUnreadable { .. } => ErrorKind::ConfigUnreadable,
            DdgError::ConfigWriteFailed { .. } => ErrorKind::ConfigWriteFailed,
            DdgError::HomeDirUnavailable => ErrorKind::HomeDirUnavailable,
            DdgError::MissingCredential => ErrorKind::MissingCredential,
            DdgError::SetupIncomplete => ErrorKind::SetupIncomplete,
            DdgError::InvalidCredential => ErrorKind::InvalidCredential,
            DdgError::RemoteError { .. } => ErrorKind::RemoteError,
            DdgError::MalformedResponse(_) => ErrorKind::MalformedResponse,
            DdgError::Transport(_) => ErrorKind::Transport,
            DdgError::ClipboardUnsupported(_) => ErrorKind::ClipboardUnsupported,
        }
    }

    /// True for failures that happen before any network traffic and mean the
    /// user still has to run the setup wizard.
    pub fn needs_setup(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::SetupIncomplete | ErrorKind::MissingCredential
        )
    }
}

pub type DdgResult<T> = Result<T, DdgError>;
