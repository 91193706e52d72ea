//! Per-view state machines.
//!
//! Each panel owns its local state and a single [`ActionGate`]. Actions take
//! `&self` so that a panel can be shared while a request is in flight; the
//! state lock is never held across a backend call.
//!
//! [`ActionGate`]: crate::gate::ActionGate

pub mod chat;
pub mod discharge;
pub mod scanner;
pub mod voice;
pub mod wound;

use serde::Serialize;
use surgisense_client::Upload;

/// What a panel shows about its selected file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileInfo {
    pub filename: String,
    pub content_type: String,
    pub size: usize,
}

impl From<&Upload> for FileInfo {
    fn from(upload: &Upload) -> Self {
        Self {
            filename: upload.filename.clone(),
            content_type: upload.content_type.clone(),
            size: upload.len(),
        }
    }
}
