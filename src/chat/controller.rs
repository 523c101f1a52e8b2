use tokio::sync::mpsc;

use super::models::{Message, Transcript};
use super::stream::{FAILURE_NOTICE, Opened, StreamOutcome, assemble_reply, open_reply};
use super::transport::ChatTransport;

pub const GREETING: &str = "Hello! I'm SnugBot, your caring AI companion. I'm here to support you with verified, expert-backed guidance for your baby's care. How can I help you today?";

/// What happened to one outgoing message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reply {
    pub outcome: StreamOutcome,
    /// Text to surface to the user, e.g. as a toast
    pub notice: Option<&'static str>,
}

/// Owns the transcript for one chat view and drives a reply stream
/// for each message the user sends.
pub struct TranscriptController<T> {
    transport: T,
    transcript: Transcript,
}

impl<T: ChatTransport> TranscriptController<T> {
    /// Starts a conversation that opens with the SnugBot greeting.
    pub fn new(transport: T) -> Self {
        Self::new_with_transcript(
            transport,
            Transcript::new_with_messages(vec![Message::assistant(GREETING)]),
        )
    }

    pub fn new_with_transcript(transport: T, transcript: Transcript) -> Self {
        Self {
            transport,
            transcript,
        }
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Sends `input` and streams the reply into the transcript, pushing
    /// the full reply content on `tx` as it grows. Blank input is
    /// ignored and returns `None`.
    ///
    /// If the attempt fails, the partial reply is removed but the
    /// user's message stays so it can be sent again.
    pub async fn send(&mut self, input: &str, tx: &mpsc::UnboundedSender<String>) -> Option<Reply> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }
        self.transcript.push_user(input);

        let opened = open_reply(&self.transport, self.transcript.messages()).await;
        let result = match opened {
            Ok(Opened::Streaming(reader)) => assemble_reply(reader, &mut self.transcript, tx).await,
            Ok(Opened::Refused(outcome)) => Ok(outcome),
            Err(err) => Err(err),
        };

        let reply = match result {
            Ok(outcome) => Reply {
                outcome,
                notice: outcome.notice(),
            },
            Err(err) => {
                tracing::error!("Chat error: {}", err);
                if let Some(partial) = self.transcript.rollback_reply() {
                    tracing::debug!("Discarded partial reply: {}", partial.content);
                }
                Reply {
                    outcome: StreamOutcome::TransportFailure,
                    notice: Some(FAILURE_NOTICE),
                }
            }
        };
        Some(reply)
    }
}

#[cfg(test)]
mod tests {
    use reqwest::StatusCode;

    use super::*;
    use crate::chat::stream::{PAYMENT_REQUIRED_NOTICE, RATE_LIMITED_NOTICE};
    use crate::chat::testing::{ScriptedTransport, delta_frame};

    #[tokio::test]
    async fn test_send_streams_reply() {
        let body = format!(
            "{}{}data: [DONE]\n",
            delta_frame("Hel"),
            delta_frame("lo")
        );
        let mut controller = TranscriptController::new(ScriptedTransport::ok(vec![body.into_bytes()]));
        let (tx, mut rx) = mpsc::unbounded_channel();

        let reply = controller.send("  Hi there  ", &tx).await.unwrap();

        assert_eq!(reply.outcome, StreamOutcome::Sentinel);
        assert_eq!(reply.notice, None);
        assert_eq!(
            controller.transcript().messages(),
            &[
                Message::assistant(GREETING),
                Message::user("Hi there"),
                Message::assistant("Hello"),
            ]
        );
        assert_eq!(rx.recv().await.unwrap(), "Hel");
        assert_eq!(rx.recv().await.unwrap(), "Hello");
    }

    #[tokio::test]
    async fn test_send_includes_history_in_request() {
        let transport = ScriptedTransport::ok(vec![delta_frame("ok").into_bytes()]);
        let mut controller = TranscriptController::new(transport);
        let (tx, _rx) = mpsc::unbounded_channel();
        controller.send("first", &tx).await.unwrap();
        controller.send("second", &tx).await.unwrap();

        let requests = controller.transport.requests.lock().unwrap();
        assert_eq!(requests.len(), 2);
        assert_eq!(
            requests[1],
            vec![
                Message::assistant(GREETING),
                Message::user("first"),
                Message::assistant("ok"),
                Message::user("second"),
            ]
        );
    }

    #[tokio::test]
    async fn test_blank_input_is_ignored() {
        let mut controller = TranscriptController::new(ScriptedTransport::ok(vec![]));
        let (tx, _rx) = mpsc::unbounded_channel();
        assert_eq!(controller.send("   ", &tx).await, None);
        assert_eq!(controller.transcript().len(), 1);
        assert!(controller.transport.requests.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_rate_limited_appends_no_reply() {
        let mut controller =
            TranscriptController::new(ScriptedTransport::with_status(StatusCode::TOO_MANY_REQUESTS));
        let (tx, _rx) = mpsc::unbounded_channel();

        let reply = controller.send("Hi", &tx).await.unwrap();

        assert_eq!(reply.outcome, StreamOutcome::RateLimited);
        assert_eq!(reply.notice, Some(RATE_LIMITED_NOTICE));
        assert_eq!(
            controller.transcript().messages(),
            &[Message::assistant(GREETING), Message::user("Hi")]
        );
    }

    #[tokio::test]
    async fn test_payment_required_appends_no_reply() {
        let mut controller =
            TranscriptController::new(ScriptedTransport::with_status(StatusCode::PAYMENT_REQUIRED));
        let (tx, _rx) = mpsc::unbounded_channel();

        let reply = controller.send("Hi", &tx).await.unwrap();

        assert_eq!(reply.outcome, StreamOutcome::PaymentRequired);
        assert_eq!(reply.notice, Some(PAYMENT_REQUIRED_NOTICE));
        assert_eq!(controller.transcript().len(), 2);
    }

    #[tokio::test]
    async fn test_server_error_is_a_failure() {
        let mut controller = TranscriptController::new(ScriptedTransport::with_status(
            StatusCode::INTERNAL_SERVER_ERROR,
        ));
        let (tx, _rx) = mpsc::unbounded_channel();

        let reply = controller.send("Hi", &tx).await.unwrap();

        assert_eq!(reply.outcome, StreamOutcome::TransportFailure);
        assert_eq!(reply.notice, Some(FAILURE_NOTICE));
        assert_eq!(controller.transcript().last(), Some(&Message::user("Hi")));
    }

    #[tokio::test]
    async fn test_failure_before_any_delta_keeps_user_message() {
        let transport = ScriptedTransport::failing_after(vec![b":keep-alive\n".to_vec()]);
        let mut controller = TranscriptController::new(transport);
        let (tx, _rx) = mpsc::unbounded_channel();

        let reply = controller.send("Hi", &tx).await.unwrap();

        assert_eq!(reply.outcome, StreamOutcome::TransportFailure);
        assert_eq!(
            controller.transcript().messages(),
            &[Message::assistant(GREETING), Message::user("Hi")]
        );
    }

    #[tokio::test]
    async fn test_failure_mid_reply_rolls_back_partial_reply() {
        let transport = ScriptedTransport::failing_after(vec![delta_frame("Half a").into_bytes()]);
        let mut controller = TranscriptController::new(transport);
        let (tx, _rx) = mpsc::unbounded_channel();

        let reply = controller.send("Hi", &tx).await.unwrap();

        assert_eq!(reply.outcome, StreamOutcome::TransportFailure);
        assert_eq!(controller.transcript().len(), 2);
        assert_eq!(controller.transcript().last(), Some(&Message::user("Hi")));
        assert!(!controller.transcript().is_filling());
    }
}
