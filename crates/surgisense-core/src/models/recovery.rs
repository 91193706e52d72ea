use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Patient header shown at the top of the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RecoveryProfile {
    pub patient_name: String,
    pub surgery_type: String,
    pub surgery_date: jiff::civil::Date,
    /// Length of the expected recovery period in days.
    pub total_days: u32,
}

impl RecoveryProfile {
    pub fn new(
        patient_name: impl Into<String>,
        surgery_type: impl Into<String>,
        surgery_date: &str,
        total_days: u32,
    ) -> Result<Self, CoreError> {
        if total_days == 0 {
            return Err(CoreError::InvalidRecoveryPeriod(total_days));
        }
        Ok(Self {
            patient_name: patient_name.into(),
            surgery_type: surgery_type.into(),
            surgery_date: surgery_date.parse()?,
            total_days,
        })
    }

    /// Days elapsed since surgery, clamped to `[0, total_days]`.
    pub fn recovery_day(&self, today: jiff::civil::Date) -> u32 {
        let elapsed = today
            .since(self.surgery_date)
            .map(|span| span.get_days())
            .unwrap_or(0);
        u32::try_from(elapsed).unwrap_or(0).min(self.total_days)
    }

    /// Recovery progress as a whole percentage.
    pub fn progress_percent(&self, today: jiff::civil::Date) -> u32 {
        if self.total_days == 0 {
            return 0;
        }
        let day = f64::from(self.recovery_day(today));
        (day * 100.0 / f64::from(self.total_days)).round() as u32
    }
}
