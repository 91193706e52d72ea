//! A scripted stand-in for the backend.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use surgisense_client::{ClientError, RecoveryApi, Upload};
use surgisense_core::models::chat::ChatReply;
use surgisense_core::models::medication::Medication;
use surgisense_core::models::record::DigitizedRecord;
use surgisense_core::models::scan::{ScanData, ScanResponse};

#[derive(Debug, Clone, Copy)]
pub enum Reply {
    Succeed,
    /// HTTP error with an optional `detail` body.
    Fail(u16, Option<&'static str>),
    /// The body decoded but was not usable.
    Invalid,
    /// Chat only: the backend answered with a non-success status.
    Declined,
}

pub struct StubApi {
    reply: Reply,
    text: &'static str,
    delay: Duration,
    calls: AtomicUsize,
}

impl StubApi {
    pub fn ok(text: &'static str) -> Self {
        Self {
            reply: Reply::Succeed,
            text,
            delay: Duration::ZERO,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn replying(reply: Reply) -> Self {
        Self {
            reply,
            ..Self::ok("")
        }
    }

    /// Succeeds, but only after yielding to the runtime for a while.
    pub fn slow(text: &'static str) -> Self {
        Self {
            delay: Duration::from_millis(20),
            ..Self::ok(text)
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    async fn respond(&self) -> Result<(), ClientError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        match self.reply {
            Reply::Succeed | Reply::Declined => Ok(()),
            Reply::Fail(status, detail) => Err(ClientError::Status {
                status,
                detail: detail.map(str::to_string),
            }),
            Reply::Invalid => Err(ClientError::InvalidResponse("stub".to_string())),
        }
    }
}

impl RecoveryApi for StubApi {
    async fn scan_document(&self, upload: &Upload) -> Result<ScanResponse, ClientError> {
        self.respond().await?;
        Ok(ScanResponse {
            status: "success".to_string(),
            data: ScanData {
                surgery_type: Some(self.text.to_string()),
                surgery_date: None,
                medication_list: vec![Medication {
                    name: Some(upload.filename.clone()),
                    ..Medication::default()
                }],
                pre_op_restrictions: vec!["No driving for two weeks".to_string()],
            },
        })
    }

    async fn digitize_record(&self, _upload: &Upload) -> Result<DigitizedRecord, ClientError> {
        self.respond().await?;
        Ok(DigitizedRecord {
            procedure: Some(self.text.to_string()),
            doctor: None,
            follow_up_date: Some("2026-11-02".to_string()),
            medications: vec![Medication::default(), Medication::default()],
        })
    }

    async fn analyze_wound(&self, _upload: &Upload) -> Result<String, ClientError> {
        self.respond().await?;
        Ok(self.text.to_string())
    }

    async fn transcribe(&self, _upload: &Upload) -> Result<String, ClientError> {
        self.respond().await?;
        Ok(self.text.to_string())
    }

    async fn ask(&self, question: &str) -> Result<ChatReply, ClientError> {
        self.respond().await?;
        Ok(match self.reply {
            Reply::Declined => ChatReply {
                status: "error".to_string(),
                answer: None,
            },
            _ => ChatReply {
                status: "success".to_string(),
                answer: Some(format!("{} ({question})", self.text)),
            },
        })
    }
}

pub fn photo() -> Upload {
    Upload::new("incision.jpg", vec![0xff, 0xd8, 0xff])
}

pub fn pdf() -> Upload {
    Upload::new("discharge.pdf", b"%PDF-1.7".to_vec())
}

pub fn recording() -> Upload {
    Upload::recording(vec![0; 44])
}
