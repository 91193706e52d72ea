//! surgisense-client
//!
//! HTTP client for the SurgiSense backend. Every clinical operation
//! (document extraction, wound analysis, transcription, question answering)
//! happens remotely; this crate only ships files and questions to the
//! backend and decodes what comes back.

pub mod client;
pub mod error;
pub mod upload;

use std::future::Future;

use surgisense_core::models::chat::ChatReply;
use surgisense_core::models::record::DigitizedRecord;
use surgisense_core::models::scan::ScanResponse;

pub use client::{ApiClient, DEFAULT_API_BASE};
pub use error::ClientError;
pub use upload::{Accept, Upload};

/// The backend operations the dashboard depends on.
///
/// [`ApiClient`] is the HTTP implementation. Views are generic over this
/// trait so they can be driven without a running backend.
pub trait RecoveryApi: Send + Sync {
    /// `POST /api/scan`: extract surgery details from a PDF or text document.
    fn scan_document(
        &self,
        upload: &Upload,
    ) -> impl Future<Output = Result<ScanResponse, ClientError>> + Send;

    /// `POST /api/digitize-record`: normalize a discharge summary PDF.
    fn digitize_record(
        &self,
        upload: &Upload,
    ) -> impl Future<Output = Result<DigitizedRecord, ClientError>> + Send;

    /// `POST /api/analyze-wound`: free-text assessment of a wound photo.
    fn analyze_wound(
        &self,
        upload: &Upload,
    ) -> impl Future<Output = Result<String, ClientError>> + Send;

    /// `POST /api/voice-to-text`: transcript of an audio recording.
    fn transcribe(
        &self,
        upload: &Upload,
    ) -> impl Future<Output = Result<String, ClientError>> + Send;

    /// `POST /api/chat`: answer a question about the scanned document.
    fn ask(&self, question: &str) -> impl Future<Output = Result<ChatReply, ClientError>> + Send;
}
