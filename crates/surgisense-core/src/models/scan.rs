use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::medication::Medication;

/// Response of `POST /api/scan`.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScanResponse {
    pub status: String,
    pub data: ScanData,
}

/// Structured fields pulled out of a scanned discharge summary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct ScanData {
    pub surgery_type: Option<String>,
    pub surgery_date: Option<String>,
    pub medication_list: Vec<Medication>,
    pub pre_op_restrictions: Vec<String>,
}

impl ScanData {
    pub fn surgery_title(&self) -> &str {
        self.surgery_type.as_deref().unwrap_or("Surgical Procedure")
    }

    pub fn scheduled_date(&self) -> &str {
        self.surgery_date.as_deref().unwrap_or("Not Found")
    }
}
