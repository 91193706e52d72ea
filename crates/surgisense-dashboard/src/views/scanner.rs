use serde::Serialize;
use tokio::sync::Mutex;
use tracing::warn;

use surgisense_client::{Accept, RecoveryApi, Upload};
use surgisense_core::models::scan::ScanData;

use crate::error::ViewError;
use crate::gate::ActionGate;
use crate::views::FileInfo;

pub const SCAN_FAILURE: &str =
    "Failed to digitize record. Ensure backend is running and file is readable.";
pub const NO_FILE: &str = "Please select a file first!";

/// Discharge summary scanner: surgery details, medications, restrictions.
#[derive(Debug)]
pub struct ScannerPanel {
    gate: ActionGate,
    state: Mutex<ScannerState>,
}

#[derive(Debug, Default)]
struct ScannerState {
    selected: Option<Upload>,
    result: Option<ScanData>,
    error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScannerView {
    pub selected: Option<FileInfo>,
    pub loading: bool,
    pub result: Option<ScanData>,
    pub error: Option<String>,
}

impl Default for ScannerPanel {
    fn default() -> Self {
        Self {
            gate: ActionGate::new("document scan"),
            state: Mutex::new(ScannerState::default()),
        }
    }
}

impl ScannerPanel {
    pub async fn select(&self, upload: Upload) -> Result<(), ViewError> {
        upload.ensure(Accept::Documents).map_err(ViewError::Rejected)?;
        self.state.lock().await.selected = Some(upload);
        Ok(())
    }

    pub async fn scan<A: RecoveryApi>(&self, api: &A) -> Result<(), ViewError> {
        let upload = {
            let mut state = self.state.lock().await;
            match state.selected.clone() {
                Some(upload) => upload,
                None => {
                    state.error = Some(NO_FILE.to_string());
                    return Err(ViewError::NothingSelected);
                }
            }
        };

        let _loading = self.gate.try_begin()?;
        {
            let mut state = self.state.lock().await;
            state.error = None;
            state.result = None;
        }

        let result = api.scan_document(&upload).await;

        let mut state = self.state.lock().await;
        match result {
            Ok(response) => {
                state.result = Some(response.data);
                Ok(())
            }
            Err(source) => {
                warn!(error = %source, filename = %upload.filename, "document scan failed");
                state.error = Some(SCAN_FAILURE.to_string());
                Err(ViewError::Remote {
                    advisory: SCAN_FAILURE.to_string(),
                    source,
                })
            }
        }
    }

    pub async fn view(&self) -> ScannerView {
        let state = self.state.lock().await;
        ScannerView {
            selected: state.selected.as_ref().map(FileInfo::from),
            loading: self.gate.is_loading(),
            result: state.result.clone(),
            error: state.error.clone(),
        }
    }
}
