use futures::stream::BoxStream;
use futures_util::StreamExt;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

use super::assembler::FrameAssembler;
use super::decoder::Utf8StreamDecoder;
use super::error::ChatError;
use super::models::{Message, Transcript};
use super::transport::{ChatTransport, classify_status};

pub const RATE_LIMITED_NOTICE: &str = "Rate limit exceeded. Please try again later.";
pub const PAYMENT_REQUIRED_NOTICE: &str = "Service requires payment. Please contact support.";
pub const FAILURE_NOTICE: &str = "Failed to get response. Please try again.";

/// Raw response body chunks.
pub type ByteStream = BoxStream<'static, Result<Vec<u8>, ChatError>>;

/// How a single reply attempt ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StreamOutcome {
    /// The body ended without a sentinel frame
    Completed,
    /// A `data: [DONE]` frame was processed
    Sentinel,
    RateLimited,
    PaymentRequired,
    TransportFailure,
    /// The body ended while a frame that failed to parse was pending
    MalformedAbandoned,
    /// The receiver of updates went away before the stream ended
    Cancelled,
}

impl StreamOutcome {
    /// The message to show the user, if this outcome needs one.
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            StreamOutcome::RateLimited => Some(RATE_LIMITED_NOTICE),
            StreamOutcome::PaymentRequired => Some(PAYMENT_REQUIRED_NOTICE),
            StreamOutcome::TransportFailure => Some(FAILURE_NOTICE),
            _ => None,
        }
    }
}

/// Pulls chunks from a response body and decodes them into a
/// `FrameAssembler`.
pub struct StreamReader {
    body: ByteStream,
    decoder: Utf8StreamDecoder,
    finished: bool,
}

impl StreamReader {
    pub fn new(body: Option<ByteStream>) -> Result<Self, ChatError> {
        let body = body.ok_or(ChatError::MissingBody)?;
        Ok(Self {
            body,
            decoder: Utf8StreamDecoder::new(),
            finished: false,
        })
    }

    /// Reads the next chunk into `assembler`. Returns `true` once the
    /// end of the stream has been reached, after which nothing more is
    /// requested from the body.
    pub async fn read_into(&mut self, assembler: &mut FrameAssembler) -> Result<bool, ChatError> {
        if self.finished {
            return Ok(true);
        }
        match self.body.next().await {
            Some(chunk) => {
                let chunk = chunk?;
                assembler.push_text(&self.decoder.decode(&chunk));
                Ok(false)
            }
            None => {
                self.finished = true;
                assembler.push_text(&self.decoder.finish());
                Ok(true)
            }
        }
    }
}

/// Result of opening a reply stream.
pub enum Opened {
    Streaming(StreamReader),
    Refused(StreamOutcome),
}

/// Sends the conversation and checks the response status. Rate limit
/// and payment refusals come back as `Opened::Refused`; any other
/// non-success status is an error.
pub async fn open_reply<T>(transport: &T, messages: &[Message]) -> Result<Opened, ChatError>
where
    T: ChatTransport + ?Sized,
{
    let response = transport.open(messages).await?;
    if let Some(outcome) = classify_status(response.status)? {
        tracing::warn!("Chat request refused with status {}", response.status);
        return Ok(Opened::Refused(outcome));
    }
    Ok(Opened::Streaming(StreamReader::new(response.body)?))
}

/// Reads the reply stream to the end, folding each delta into the
/// transcript and sending the full reply content on `tx` after every
/// delta.
///
/// Dropping the receiving side of `tx` stops the read loop and
/// releases the body without touching the transcript again. On `Ok`
/// the reply is finished; on `Err` it is left filling so the caller
/// can roll it back.
pub async fn assemble_reply(
    mut reader: StreamReader,
    transcript: &mut Transcript,
    tx: &mpsc::UnboundedSender<String>,
) -> Result<StreamOutcome, ChatError> {
    let mut assembler = FrameAssembler::new();

    let outcome = loop {
        let end_of_stream = tokio::select! {
            biased;
            _ = tx.closed() => break StreamOutcome::Cancelled,
            read = reader.read_into(&mut assembler) => read?,
        };

        while let Some(delta) = assembler.next_delta() {
            if tx.is_closed() {
                break;
            }
            let content = transcript.apply_delta(&delta);
            // The receiver can still go away between the check and the send
            let _ = tx.send(content.to_string());
        }
        if tx.is_closed() {
            break StreamOutcome::Cancelled;
        }

        if assembler.is_done() {
            break StreamOutcome::Sentinel;
        }
        if end_of_stream {
            if assembler.pending().trim().is_empty() {
                break StreamOutcome::Completed;
            }
            tracing::warn!(
                "Stream ended with an unterminated frame, dropping: {}",
                assembler.pending()
            );
            break StreamOutcome::MalformedAbandoned;
        }
    };

    tracing::debug!("Chat stream finished: {:?}", outcome);
    transcript.finish_stream();
    Ok(outcome)
}
