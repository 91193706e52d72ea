use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Response of `POST /api/analyze-wound`.
///
/// `analysis` is free text. It is optional here so that a body missing the
/// field still deserializes and can be reported as an invalid response.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WoundAnalysis {
    #[serde(default)]
    pub analysis: Option<String>,
}
