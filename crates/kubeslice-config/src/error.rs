//! Error types for kubeslice-config

use std::path::PathBuf;

/// Result type for kubeslice-config operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while decoding, scoping, or encoding a kubeconfig
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to decode kubeconfig: {message}")]
    Decode { message: String },

    #[error("Context not found: {name}")]
    ContextNotFound { name: String },

    #[error("Cluster not found: {name}")]
    ClusterNotFound { name: String },

    #[error("User not found: {name}")]
    UserNotFound { name: String },

    #[error("Failed to read credential file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to encode kubeconfig: {message}")]
    Encode { message: String },
}

impl Error {
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    pub fn encode(message: impl Into<String>) -> Self {
        Self::Encode {
            message: message.into(),
        }
    }
}
