use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A validated severity score in `[1, 10]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(try_from = "u8", into = "u8")]
#[ts(export)]
pub struct Score(u8);

impl Score {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    pub fn new(value: u32) -> Option<Self> {
        let value = u8::try_from(value).ok()?;
        (Self::MIN..=Self::MAX).contains(&value).then_some(Self(value))
    }

    /// Parse a captured digit run. Overflowing or out-of-range values are
    /// rejected, never clamped.
    pub fn parse(digits: &str) -> Option<Self> {
        digits.parse::<u32>().ok().and_then(Self::new)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn tier(self) -> Tier {
        Tier::from_score(self)
    }
}

impl TryFrom<u8> for Score {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(u32::from(value))
            .ok_or_else(|| format!("severity score {value} is outside [1, 10]"))
    }
}

impl From<Score> for u8 {
    fn from(score: Score) -> Self {
        score.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, Self::MAX)
    }
}

/// Risk tier derived from a [`Score`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Tier {
    /// Scores 1–3.
    Low,
    /// Scores 4–6.
    Monitor,
    /// Scores 7–10.
    Critical,
}

impl Tier {
    pub fn from_score(score: Score) -> Self {
        match score.value() {
            1..=3 => Tier::Low,
            4..=6 => Tier::Monitor,
            _ => Tier::Critical,
        }
    }

    pub fn label(self) -> &'static str {
        self.metadata().label
    }

    pub fn metadata(self) -> TierMetadata {
        match self {
            Tier::Low => TierMetadata {
                label: "Low Risk",
                color_class: "bg-emerald-500",
                background_class: "bg-emerald-50",
                text_class: "text-emerald-700",
                icon_id: "shield-check",
            },
            Tier::Monitor => TierMetadata {
                label: "Monitor Closely",
                color_class: "bg-amber-500",
                background_class: "bg-amber-50",
                text_class: "text-amber-700",
                icon_id: "activity",
            },
            Tier::Critical => TierMetadata {
                label: "Critical Alert",
                color_class: "bg-red-500",
                background_class: "bg-red-50",
                text_class: "text-red-700",
                icon_id: "alert-triangle",
            },
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Fixed presentation data for a tier. Display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct TierMetadata {
    pub label: &'static str,
    /// Fill class of the severity bar.
    pub color_class: &'static str,
    pub background_class: &'static str,
    pub text_class: &'static str,
    pub icon_id: &'static str,
}
