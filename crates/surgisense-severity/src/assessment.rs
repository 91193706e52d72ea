use serde::Serialize;
use ts_rs::TS;

use crate::tier::{Score, Tier, TierMetadata};

/// Severity derived from one analysis response.
///
/// Recomputed from the latest response every time and never updated in
/// place; a new analysis replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct SeverityAssessment {
    pub raw_text: String,
    pub score: Score,
    pub tier: Tier,
    pub metadata: TierMetadata,
}

impl SeverityAssessment {
    pub fn new(raw_text: impl Into<String>, score: Score) -> Self {
        let tier = score.tier();
        Self {
            raw_text: raw_text.into(),
            score,
            tier,
            metadata: tier.metadata(),
        }
    }

    /// Width of the severity bar, in percent.
    pub fn fill_percent(&self) -> u8 {
        self.score.value() * 10
    }

    /// The score as shown on the card, e.g. `7/10`.
    pub fn score_label(&self) -> String {
        self.score.to_string()
    }
}
