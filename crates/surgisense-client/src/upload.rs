use std::path::Path;

use crate::error::ClientError;

const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// A single file sent as the `file` field of a multipart request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upload {
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl Upload {
    /// Build an upload, deriving the content type from the filename.
    pub fn new(filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        let filename = filename.into();
        let content_type = Path::new(&filename)
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(content_type_for_extension)
            .unwrap_or(FALLBACK_CONTENT_TYPE)
            .to_string();
        Self {
            filename,
            content_type,
            bytes,
        }
    }

    /// An audio capture, named the way the voice endpoint expects.
    pub fn recording(bytes: Vec<u8>) -> Self {
        Self::new("recording.wav", bytes)
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self, ClientError> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await.map_err(|source| ClientError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());
        Ok(Self::new(filename, bytes))
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Reject uploads the target view does not accept.
    pub fn ensure(&self, accept: Accept) -> Result<(), ClientError> {
        if accept.allows(&self.content_type) {
            Ok(())
        } else {
            Err(ClientError::UnsupportedUpload {
                filename: self.filename.clone(),
                content_type: self.content_type.clone(),
                expected: accept.describe(),
            })
        }
    }
}

/// What a view's file picker accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accept {
    /// `application/pdf` only.
    Pdf,
    /// PDF or plain text.
    Documents,
    /// `image/*`.
    Images,
    /// `audio/*`.
    Audio,
}

impl Accept {
    pub fn allows(self, content_type: &str) -> bool {
        let essence = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        match self {
            Accept::Pdf => essence == "application/pdf",
            Accept::Documents => essence == "application/pdf" || essence.starts_with("text/"),
            Accept::Images => essence.starts_with("image/"),
            Accept::Audio => essence.starts_with("audio/"),
        }
    }

    pub fn describe(self) -> &'static str {
        match self {
            Accept::Pdf => "a PDF document",
            Accept::Documents => "a PDF or text document",
            Accept::Images => "an image",
            Accept::Audio => "an audio recording",
        }
    }
}

/// Map a file extension to the MIME type sent with the upload.
///
/// Returns `None` for extensions the dashboard has no reason to send.
pub fn content_type_for_extension(ext: &str) -> Option<&'static str> {
    match ext.to_lowercase().as_str() {
        "pdf" => Some("application/pdf"),
        "txt" => Some("text/plain"),
        "md" => Some("text/markdown"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "webp" => Some("image/webp"),
        "gif" => Some("image/gif"),
        "heic" => Some("image/heic"),
        "wav" => Some("audio/wav"),
        "mp3" => Some("audio/mpeg"),
        "m4a" => Some("audio/mp4"),
        "ogg" => Some("audio/ogg"),
        "webm" => Some("audio/webm"),
        "flac" => Some("audio/flac"),
        _ => None,
    }
}
