use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A prescription line as extracted by the backend's document model.
///
/// Every field is optional: the extractor is a language model and routinely
/// omits whatever the source document did not state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct Medication {
    pub name: Option<String>,
    pub dosage: Option<String>,
    pub frequency: Option<String>,
    pub duration: Option<String>,
}

impl Medication {
    /// Name to show in a list, falling back to a placeholder.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Unnamed medication")
    }
}
