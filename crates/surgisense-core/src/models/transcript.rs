use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Response of `POST /api/voice-to-text`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Transcript {
    #[serde(default)]
    pub transcript: String,
}
