use serde::Serialize;
use tokio::sync::Mutex;
use tracing::{info, warn};

use surgisense_client::{Accept, RecoveryApi, Upload};
use surgisense_core::models::record::{DigitizedRecord, SummaryRow};

use crate::error::ViewError;
use crate::gate::ActionGate;

pub const DIGITIZE_FAILURE: &str = "Failed to digitize the discharge summary.";

/// Discharge information card fed by the record digitizer.
///
/// A failed upload leaves the last good record on screen.
#[derive(Debug)]
pub struct DischargePanel {
    gate: ActionGate,
    record: Mutex<Option<DigitizedRecord>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DischargeView {
    pub loading: bool,
    pub record: Option<DigitizedRecord>,
    pub rows: Vec<SummaryRow>,
}

impl Default for DischargePanel {
    fn default() -> Self {
        Self {
            gate: ActionGate::new("record digitization"),
            record: Mutex::new(None),
        }
    }
}

impl DischargePanel {
    pub async fn digitize<A: RecoveryApi>(&self, api: &A, upload: Upload) -> Result<(), ViewError> {
        upload.ensure(Accept::Pdf).map_err(ViewError::Rejected)?;
        let _loading = self.gate.try_begin()?;

        match api.digitize_record(&upload).await {
            Ok(record) => {
                info!(filename = %upload.filename, "discharge summary digitized");
                *self.record.lock().await = Some(record);
                Ok(())
            }
            Err(source) => {
                warn!(error = %source, filename = %upload.filename, "digitization failed");
                Err(ViewError::Remote {
                    advisory: DIGITIZE_FAILURE.to_string(),
                    source,
                })
            }
        }
    }

    pub async fn view(&self) -> DischargeView {
        let record = self.record.lock().await.clone();
        DischargeView {
            loading: self.gate.is_loading(),
            rows: record
                .as_ref()
                .map(DigitizedRecord::summary_rows)
                .unwrap_or_default(),
            record,
        }
    }
}
