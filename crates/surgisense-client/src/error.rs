use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("backend returned HTTP {status}: {}", .detail.as_deref().unwrap_or("no detail"))]
    Status { status: u16, detail: Option<String> },

    #[error("invalid response from server: {0}")]
    InvalidResponse(String),

    #[error("backend could not extract the record: {0}")]
    Extraction(String),

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{filename} ({content_type}) is not accepted here; expected {expected}")]
    UnsupportedUpload {
        filename: String,
        content_type: String,
        expected: &'static str,
    },
}

impl ClientError {
    /// The backend's own error message, if it sent one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ClientError::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}
