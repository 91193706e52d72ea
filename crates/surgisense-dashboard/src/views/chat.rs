use tokio::sync::Mutex;
use tracing::{debug, warn};

use surgisense_client::{ClientError, RecoveryApi};
use surgisense_core::models::chat::{ChatMessage, ChatRole};

use crate::error::ViewError;
use crate::gate::ActionGate;

pub const WELCOME: &str = "Hello! I'm your SurgiSense Clinical Assistant. \
I have analyzed your medical document. What would you like to know?";
pub const NO_ANSWER: &str = "Error: Could not retrieve answer.";
pub const NETWORK_FAILURE: &str = "Network error. Please make sure your backend is running \
and you have scanned a document.";

/// Question answering over the scanned document.
#[derive(Debug)]
pub struct ChatPanel {
    gate: ActionGate,
    messages: Mutex<Vec<ChatMessage>>,
}

impl Default for ChatPanel {
    fn default() -> Self {
        Self {
            gate: ActionGate::new("chat"),
            messages: Mutex::new(vec![ChatMessage::new(ChatRole::Assistant, WELCOME)]),
        }
    }
}

impl ChatPanel {
    /// Send a question. Blank input is ignored.
    ///
    /// Failures are appended to the transcript as [`ChatRole::Error`]
    /// messages and also returned.
    pub async fn send<A: RecoveryApi>(&self, api: &A, question: &str) -> Result<(), ViewError> {
        if question.trim().is_empty() {
            debug!("ignoring blank question");
            return Ok(());
        }
        let _loading = self.gate.try_begin()?;

        self.messages
            .lock()
            .await
            .push(ChatMessage::new(ChatRole::User, question));

        let result = match api.ask(question).await {
            Ok(reply) if reply.is_success() => match reply.answer {
                Some(answer) => Ok(answer),
                None => Err((
                    NO_ANSWER,
                    ClientError::InvalidResponse("success reply without answer".to_string()),
                )),
            },
            Ok(reply) => Err((
                NO_ANSWER,
                ClientError::InvalidResponse(format!("chat status was {:?}", reply.status)),
            )),
            Err(source) => Err((NETWORK_FAILURE, source)),
        };

        let mut messages = self.messages.lock().await;
        match result {
            Ok(answer) => {
                messages.push(ChatMessage::new(ChatRole::Assistant, answer));
                Ok(())
            }
            Err((advisory, source)) => {
                warn!(error = %source, "chat request failed");
                messages.push(ChatMessage::new(ChatRole::Error, advisory));
                Err(ViewError::Remote {
                    advisory: advisory.to_string(),
                    source,
                })
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        self.gate.is_loading()
    }

    pub async fn messages(&self) -> Vec<ChatMessage> {
        self.messages.lock().await.clone()
    }
}
