//! Error type shared by the probe and the Readwise uploader.

use thiserror::Error;

/// Errors raised while probing the transcribe function or talking to Readwise.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The request never produced a response (DNS, connect, TLS, timeout).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// A body could not be parsed as JSON.
    #[error("invalid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Readwise rejected a highlight upload.
    #[error("Upload failed: {status} - {body}")]
    Upload { status: u16, body: String },

    #[error("Readwise token not provided (pass --readwise-token or set READWISE_TOKEN)")]
    MissingToken,

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ProbeError {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        ProbeError::Config(message.into())
    }

    /// Whether the error happened before any response arrived.
    pub fn is_transport(&self) -> bool {
        matches!(self, ProbeError::Transport(_))
    }
}

/// Result alias used across the crate.
pub type Result<T, E = ProbeError> = std::result::Result<T, E>;
