use serde::Serialize;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use surgisense_client::{Accept, RecoveryApi, Upload};
use surgisense_severity::SeverityAssessment;

use crate::error::ViewError;
use crate::gate::ActionGate;
use crate::views::FileInfo;

pub const ANALYZE_FAILURE: &str = "Failed to analyze the image. Backend not reachable.";

/// Wound photo upload with its clinical assessment and severity card.
#[derive(Debug)]
pub struct WoundPanel {
    gate: ActionGate,
    state: Mutex<WoundState>,
}

#[derive(Debug, Default)]
struct WoundState {
    selected: Option<Upload>,
    analysis: Option<String>,
    severity: Option<SeverityAssessment>,
    error: Option<String>,
}

/// Read-only copy of the panel for rendering.
#[derive(Debug, Clone, Serialize)]
pub struct WoundView {
    pub selected: Option<FileInfo>,
    pub loading: bool,
    pub analysis: Option<String>,
    pub severity: Option<SeverityAssessment>,
    pub error: Option<String>,
}

impl Default for WoundPanel {
    fn default() -> Self {
        Self {
            gate: ActionGate::new("wound analysis"),
            state: Mutex::new(WoundState::default()),
        }
    }
}

impl WoundPanel {
    /// Pick a new photo. The previous analysis no longer applies.
    pub async fn select(&self, upload: Upload) -> Result<(), ViewError> {
        upload.ensure(Accept::Images).map_err(ViewError::Rejected)?;

        let mut state = self.state.lock().await;
        state.selected = Some(upload);
        state.analysis = None;
        state.severity = None;
        state.error = None;
        Ok(())
    }

    pub async fn analyze<A: RecoveryApi>(&self, api: &A) -> Result<(), ViewError> {
        let _loading = self.gate.try_begin()?;

        let upload = {
            let mut state = self.state.lock().await;
            state.error = None;
            state.analysis = None;
            state.severity = None;
            state.selected.clone().ok_or(ViewError::NothingSelected)?
        };

        let result = api.analyze_wound(&upload).await;

        let mut state = self.state.lock().await;
        match result {
            Ok(analysis) => {
                let severity = surgisense_severity::classify(&analysis);
                match &severity {
                    Some(assessment) => info!(
                        score = assessment.score.value(),
                        tier = %assessment.tier,
                        "wound severity classified"
                    ),
                    None => debug!("analysis carries no severity score"),
                }
                state.analysis = Some(analysis);
                state.severity = severity;
                Ok(())
            }
            Err(source) => {
                let advisory = source.detail().unwrap_or(ANALYZE_FAILURE).to_string();
                warn!(error = %source, "wound analysis failed");
                state.error = Some(advisory.clone());
                Err(ViewError::Remote { advisory, source })
            }
        }
    }

    pub async fn view(&self) -> WoundView {
        let state = self.state.lock().await;
        WoundView {
            selected: state.selected.as_ref().map(FileInfo::from),
            loading: self.gate.is_loading(),
            analysis: state.analysis.clone(),
            severity: state.severity.clone(),
            error: state.error.clone(),
        }
    }
}
