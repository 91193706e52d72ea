use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::medication::Medication;

const MISSING: &str = "—";

/// Normalized discharge record returned by `POST /api/digitize-record`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct DigitizedRecord {
    pub procedure: Option<String>,
    pub doctor: Option<String>,
    pub follow_up_date: Option<String>,
    pub medications: Vec<Medication>,
}

/// The `data` member of the digitize response.
///
/// The backend reports a failed extraction in-band by putting an `error`
/// object where the record would be, so that shape is tried first.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DigitizeOutcome {
    Failed {
        error: String,
        #[serde(default)]
        raw_output: Option<String>,
    },
    Record(DigitizedRecord),
}

/// Envelope of the digitize response: `{ "data": ... }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DigitizeResponse {
    #[serde(default)]
    pub data: Option<DigitizeOutcome>,
}

/// One labelled row of the discharge information card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SummaryRow {
    pub label: String,
    pub value: String,
}

impl DigitizedRecord {
    /// Rows for the discharge information card, with `—` for missing values.
    pub fn summary_rows(&self) -> Vec<SummaryRow> {
        let row = |label: &str, value: Option<&str>| SummaryRow {
            label: label.to_string(),
            value: value
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(MISSING)
                .to_string(),
        };

        vec![
            row("Procedure", self.procedure.as_deref()),
            row("Follow-up Date", self.follow_up_date.as_deref()),
            row("Doctor", self.doctor.as_deref()),
            SummaryRow {
                label: "Medications".to_string(),
                value: format!("{} prescriptions", self.medications.len()),
            },
        ]
    }
}
