//! Error types for remote catalogue operations.
//!
//! Each failure family gets its own enum so callers can tell a failed list
//! (page-level message) from a failed write (message on the open form).

use thiserror::Error;

/// The kind of write being performed against the remote collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    Create,
    Update,
    Delete,
}

impl MutationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MutationKind::Create => "create",
            MutationKind::Update => "update",
            MutationKind::Delete => "delete",
        }
    }
}

impl std::fmt::Display for MutationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The request never produced an HTTP response.
#[derive(Debug, Clone, Error)]
#[error("transport failure: {0}")]
pub struct TransportError(pub String);

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        TransportError(err.to_string())
    }
}

/// Listing the collection failed.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Server answered outside the 2xx range
    #[error("failed to fetch: server returned status {0}")]
    Status(u16),

    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Body was not a JSON array of records
    #[error("failed to decode list response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// A create, update or delete failed.
#[derive(Debug, Error)]
pub enum MutationError {
    #[error("failed to {action}: server returned status {status}")]
    Status { action: MutationKind, status: u16 },

    #[error("failed to {action}: {source}")]
    Transport {
        action: MutationKind,
        #[source]
        source: TransportError,
    },

    #[error("failed to encode {action} request: {source}")]
    Encode {
        action: MutationKind,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to decode {action} response: {source}")]
    Decode {
        action: MutationKind,
        #[source]
        source: serde_json::Error,
    },
}

impl MutationError {
    pub fn action(&self) -> MutationKind {
        match self {
            MutationError::Status { action, .. }
            | MutationError::Transport { action, .. }
            | MutationError::Encode { action, .. }
            | MutationError::Decode { action, .. } => *action,
        }
    }
}

/// Configuration values that cannot be used.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("api base must be an absolute http(s) URL, got {0:?}")]
    InvalidApiBase(String),

    #[error("search debounce must be a whole number of milliseconds, got {0:?}")]
    InvalidDebounce(String),

    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}
