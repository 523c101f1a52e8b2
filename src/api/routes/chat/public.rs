//! Public types for the chat API
use serde::{Deserialize, Serialize};

use crate::chat::{Message, StreamOutcome};

/// Conversation so far, ending with the user's latest message
#[derive(Deserialize, Serialize)]
pub struct ChatRequest {
    pub messages: Vec<Message>,
}

/// Payload of the final `done` event of a reply stream
#[derive(Deserialize, Serialize)]
pub struct ChatDone {
    pub outcome: StreamOutcome,
}
