use serde::Serialize;
use tokio::sync::Mutex;
use tracing::warn;

use surgisense_client::{Accept, RecoveryApi, Upload};

use crate::error::ViewError;
use crate::gate::ActionGate;

pub const SPEECH_FAILURE: &str = "Failed to connect to the speech service.";

/// Voice intake: an already-captured recording goes out, a transcript comes back.
#[derive(Debug)]
pub struct VoicePanel {
    gate: ActionGate,
    state: Mutex<VoiceState>,
}

#[derive(Debug, Default)]
struct VoiceState {
    transcript: Option<String>,
    error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct VoiceView {
    pub loading: bool,
    pub transcript: Option<String>,
    pub error: Option<String>,
}

impl Default for VoicePanel {
    fn default() -> Self {
        Self {
            gate: ActionGate::new("transcription"),
            state: Mutex::new(VoiceState::default()),
        }
    }
}

impl VoicePanel {
    pub async fn submit<A: RecoveryApi>(&self, api: &A, recording: Upload) -> Result<(), ViewError> {
        recording.ensure(Accept::Audio).map_err(ViewError::Rejected)?;
        let _loading = self.gate.try_begin()?;
        self.state.lock().await.error = None;

        let result = api.transcribe(&recording).await;

        let mut state = self.state.lock().await;
        match result {
            Ok(transcript) => {
                state.transcript = Some(transcript);
                Ok(())
            }
            Err(source) => {
                warn!(error = %source, "transcription failed");
                state.error = Some(SPEECH_FAILURE.to_string());
                Err(ViewError::Remote {
                    advisory: SPEECH_FAILURE.to_string(),
                    source,
                })
            }
        }
    }

    pub async fn view(&self) -> VoiceView {
        let state = self.state.lock().await;
        VoiceView {
            loading: self.gate.is_loading(),
            transcript: state.transcript.clone(),
            error: state.error.clone(),
        }
    }
}
