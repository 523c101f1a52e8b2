//! The core models for a single chat session with SnugBot.
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub enum Role {
    #[serde(rename = "user")]
    User,
    #[serde(rename = "assistant")]
    Assistant,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: &str) -> Self {
        Message {
            role,
            content: content.to_string(),
        }
    }

    pub fn user(content: &str) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: &str) -> Self {
        Self::new(Role::Assistant, content)
    }
}

/// Ordered conversation history. Only the last message can be
/// mutated, and only while it is an assistant reply being filled by a
/// stream.
#[derive(Clone, Debug, Default)]
pub struct Transcript {
    messages: Vec<Message>,
    filling: bool,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn new_with_messages(messages: Vec<Message>) -> Self {
        Self {
            messages,
            filling: false,
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn is_filling(&self) -> bool {
        self.filling
    }

    /// Appends an outgoing user message. Any reply still being filled
    /// is frozen first.
    pub fn push_user(&mut self, content: &str) {
        self.filling = false;
        self.messages.push(Message::user(content));
    }

    /// Folds a delta into the reply being filled, creating the reply
    /// when there isn't one yet. Returns the full reply content.
    pub fn apply_delta(&mut self, delta: &str) -> &str {
        let target = if self.filling {
            self.messages.last_mut()
        } else {
            None
        };
        match target {
            Some(reply) => reply.content.push_str(delta),
            None => {
                self.messages.push(Message::assistant(delta));
                self.filling = true;
            }
        }
        self.current_reply().unwrap_or_default()
    }

    /// Content of the reply currently being filled, if any.
    pub fn current_reply(&self) -> Option<&str> {
        if !self.filling {
            return None;
        }
        self.messages.last().map(|m| m.content.as_str())
    }

    pub fn finish_stream(&mut self) {
        self.filling = false;
    }

    /// Removes the reply being filled, leaving the rest of the
    /// conversation (including the user's own message) in place.
    pub fn rollback_reply(&mut self) -> Option<Message> {
        if !self.filling {
            return None;
        }
        self.filling = false;
        self.messages.pop()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serialization() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), r#""user""#);
        assert_eq!(
            serde_json::to_string(&Role::Assistant).unwrap(),
            r#""assistant""#
        );
    }

    #[test]
    fn test_message_serialization() {
        let msg = Message::user("Is 38C a fever?");
        assert_eq!(
            serde_json::to_string(&msg).unwrap(),
            r#"{"role":"user","content":"Is 38C a fever?"}"#
        );
    }

    #[test]
    fn test_apply_delta_creates_reply() {
        let mut transcript = Transcript::new();
        transcript.push_user("Hi");
        assert_eq!(transcript.apply_delta("Hel"), "Hel");
        assert_eq!(transcript.apply_delta("lo"), "Hello");
        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript.last().unwrap(), &Message::assistant("Hello"));
        assert!(transcript.is_filling());
    }

    #[test]
    fn test_apply_delta_never_touches_frozen_assistant_message() {
        let mut transcript = Transcript::new_with_messages(vec![Message::assistant("Welcome")]);
        transcript.apply_delta("New");
        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript.messages()[0].content, "Welcome");
        assert_eq!(transcript.messages()[1].content, "New");
    }

    #[test]
    fn test_finish_stream_freezes_reply() {
        let mut transcript = Transcript::new();
        transcript.apply_delta("one");
        transcript.finish_stream();
        transcript.apply_delta("two");
        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript.current_reply(), Some("two"));
    }

    #[test]
    fn test_rollback_reply_keeps_user_message() {
        let mut transcript = Transcript::new();
        transcript.push_user("Hi");
        transcript.apply_delta("partial");
        let removed = transcript.rollback_reply();
        assert_eq!(removed, Some(Message::assistant("partial")));
        assert_eq!(transcript.messages(), &[Message::user("Hi")]);
        assert!(!transcript.is_filling());
    }

    #[test]
    fn test_rollback_reply_without_reply_is_noop() {
        let mut transcript = Transcript::new();
        transcript.push_user("Hi");
        assert_eq!(transcript.rollback_reply(), None);
        assert_eq!(transcript.len(), 1);
    }
}
