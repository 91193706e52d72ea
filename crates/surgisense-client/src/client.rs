use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{info, warn};

use surgisense_core::models::chat::{ChatReply, ChatRequest};
use surgisense_core::models::record::{DigitizeOutcome, DigitizeResponse, DigitizedRecord};
use surgisense_core::models::scan::ScanResponse;
use surgisense_core::models::transcript::Transcript;
use surgisense_core::models::wound::WoundAnalysis;

use crate::RecoveryApi;
use crate::error::ClientError;
use crate::upload::Upload;

/// Where the backend listens when nothing else is configured.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

const SCAN: &str = "/api/scan";
const DIGITIZE: &str = "/api/digitize-record";
const ANALYZE_WOUND: &str = "/api/analyze-wound";
const VOICE_TO_TEXT: &str = "/api/voice-to-text";
const CHAT: &str = "/api/chat";

/// HTTP implementation of [`RecoveryApi`].
///
/// No retries and no client-side timeout: a failed call is reported once
/// and the user re-triggers it.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("surgisense/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_http_client(http, base_url))
    }

    pub fn with_http_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{endpoint}", self.base_url)
    }

    async fn post_upload<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        upload: &Upload,
    ) -> Result<T, ClientError> {
        let part = Part::bytes(upload.bytes.clone())
            .file_name(upload.filename.clone())
            .mime_str(&upload.content_type)?;
        let form = Form::new().part("file", part);

        info!(
            endpoint,
            filename = %upload.filename,
            content_type = %upload.content_type,
            bytes = upload.len(),
            "uploading file"
        );

        let response = self
            .http
            .post(self.url(endpoint))
            .multipart(form)
            .send()
            .await
            .inspect_err(|e| warn!(endpoint, error = %e, "backend unreachable"))?;

        read_json(endpoint, response).await
    }
}

impl RecoveryApi for ApiClient {
    async fn scan_document(&self, upload: &Upload) -> Result<ScanResponse, ClientError> {
        let response: ScanResponse = self.post_upload(SCAN, upload).await?;
        if response.status != "success" {
            return Err(ClientError::InvalidResponse(format!(
                "scan status was {:?}",
                response.status
            )));
        }
        info!(
            medications = response.data.medication_list.len(),
            restrictions = response.data.pre_op_restrictions.len(),
            "document scanned"
        );
        Ok(response)
    }

    async fn digitize_record(&self, upload: &Upload) -> Result<DigitizedRecord, ClientError> {
        let response: DigitizeResponse = self.post_upload(DIGITIZE, upload).await?;
        match response.data {
            Some(DigitizeOutcome::Record(record)) => {
                info!(medications = record.medications.len(), "record digitized");
                Ok(record)
            }
            Some(DigitizeOutcome::Failed { error, raw_output }) => {
                warn!(
                    error = %error,
                    raw_output_len = raw_output.as_ref().map_or(0, String::len),
                    "backend failed to extract record"
                );
                Err(ClientError::Extraction(error))
            }
            None => Err(ClientError::InvalidResponse(
                "digitize response has no data".to_string(),
            )),
        }
    }

    async fn analyze_wound(&self, upload: &Upload) -> Result<String, ClientError> {
        let response: WoundAnalysis = self.post_upload(ANALYZE_WOUND, upload).await?;
        match response.analysis {
            Some(analysis) if !analysis.trim().is_empty() => {
                info!(text_len = analysis.len(), "wound analysis received");
                Ok(analysis)
            }
            _ => Err(ClientError::InvalidResponse(
                "analysis field missing or empty".to_string(),
            )),
        }
    }

    async fn transcribe(&self, upload: &Upload) -> Result<String, ClientError> {
        let response: Transcript = self.post_upload(VOICE_TO_TEXT, upload).await?;
        info!(text_len = response.transcript.len(), "transcript received");
        Ok(response.transcript)
    }

    async fn ask(&self, question: &str) -> Result<ChatReply, ClientError> {
        info!(question_len = question.len(), "asking document question");

        let response = self
            .http
            .post(self.url(CHAT))
            .json(&ChatRequest {
                question: question.to_string(),
            })
            .send()
            .await
            .inspect_err(|e| warn!(endpoint = CHAT, error = %e, "backend unreachable"))?;

        read_json(CHAT, response).await
    }
}

/// Decode a JSON body, turning non-success statuses into [`ClientError::Status`].
async fn read_json<T: DeserializeOwned>(
    endpoint: &str,
    response: reqwest::Response,
) -> Result<T, ClientError> {
    let status = response.status();
    let body = response.bytes().await?;

    if !status.is_success() {
        let detail = error_detail(&body);
        warn!(endpoint, status = status.as_u16(), ?detail, "backend returned an error");
        return Err(ClientError::Status {
            status: status.as_u16(),
            detail,
        });
    }

    serde_json::from_slice(&body)
        .map_err(|e| ClientError::InvalidResponse(format!("{endpoint}: {e}")))
}

/// Pull the `detail` member out of an error body, if there is one.
///
/// Validation errors carry a structured `detail`; it is kept as JSON text.
fn error_detail(body: &[u8]) -> Option<String> {
    #[derive(Deserialize)]
    struct ErrorBody {
        detail: serde_json::Value,
    }

    match serde_json::from_slice::<ErrorBody>(body).ok()?.detail {
        serde_json::Value::Null => None,
        serde_json::Value::String(detail) => Some(detail),
        other => Some(other.to_string()),
    }
}
