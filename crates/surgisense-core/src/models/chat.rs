use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Body of `POST /api/chat`.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChatRequest {
    pub question: String,
}

/// Response of `POST /api/chat`. Only `status == "success"` carries an answer.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChatReply {
    pub status: String,
    #[serde(default)]
    pub answer: Option<String>,
}

impl ChatReply {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

/// A single entry in the chat transcript.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChatMessage {
    pub id: Uuid,
    pub role: ChatRole,
    pub content: String,
    pub timestamp: jiff::Timestamp,
}

impl ChatMessage {
    pub fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            content: content.into(),
            timestamp: jiff::Timestamp::now(),
        }
    }
}

/// Role of a chat message. `Error` entries are rendered as safety alerts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ChatRole {
    User,
    Assistant,
    Error,
}
