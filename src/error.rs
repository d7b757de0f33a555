//! dialkit Error Types
//!
//! `DialError` covers ambient failures (host processes, config files).
//! `DispatchError` is the user-facing taxonomy of a single dispatch.

use crate::intent::Action;
use thiserror::Error;

/// Central error type for dialkit
#[derive(Error, Debug)]
pub enum DialError {
    #[error("Host error: {0}")]
    Host(String),

    #[error("Unknown host '{0}' (expected 'native' or 'web')")]
    UnknownHost(String),

    #[error("Unknown platform family '{0}' (expected 'default' or 'ios')")]
    UnknownPlatform(String),

    #[error("Lock poisoned: {0}")]
    Lock(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for dialkit operations
pub type DialResult<T> = Result<T, DialError>;

/// Helper to convert RwLock/Mutex poison errors
impl<T> From<std::sync::PoisonError<T>> for DialError {
    fn from(err: std::sync::PoisonError<T>) -> Self {
        DialError::Lock(err.to_string())
    }
}

/// Why a dispatch stopped before the host acted on it.
///
/// Every variant is recoverable: the user may simply try again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// The sanitized number was empty; nothing was built or sent.
    #[error("no dialable number was entered")]
    EmptyNumber,

    /// The host reported it cannot open this URL scheme.
    #[error("host cannot handle {0} intents")]
    UnsupportedAction(Action),

    /// The capability check or the open request failed.
    #[error("{0} dispatch failed: {1}")]
    DispatchFailure(Action, String),
}

impl DispatchError {
    /// Translation keys for the alert (title, body) shown for this error
    pub fn alert_keys(&self) -> (&'static str, &'static str) {
        match self {
            DispatchError::EmptyNumber => {
                ("alert.number_required.title", "alert.number_required.body")
            }
            DispatchError::UnsupportedAction(Action::Call) => {
                ("alert.unsupported.title", "alert.unsupported.call")
            }
            DispatchError::UnsupportedAction(Action::Sms) => {
                ("alert.unsupported.title", "alert.unsupported.sms")
            }
            DispatchError::DispatchFailure(Action::Call, _) => {
                ("alert.error.title", "alert.error.call")
            }
            DispatchError::DispatchFailure(Action::Sms, _) => {
                ("alert.error.title", "alert.error.sms")
            }
        }
    }
}
