use std::time::Duration;

use async_trait::async_trait;
use futures_util::StreamExt;
use reqwest::StatusCode;
use serde_json::json;

use super::error::ChatError;
use super::models::Message;
use super::stream::{ByteStream, StreamOutcome};

/// An opened response from the chat service. The body is `None` when
/// the response carries no content at all.
pub struct StreamResponse {
    pub status: StatusCode,
    pub body: Option<ByteStream>,
}

/// Sends a conversation to the chat service and hands back the raw
/// response without reading the body.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    async fn open(&self, messages: &[Message]) -> Result<StreamResponse, ChatError>;
}

/// Maps the response status to a terminal outcome before any of the
/// body is read. `Ok(None)` means the body should be streamed.
pub fn classify_status(status: StatusCode) -> Result<Option<StreamOutcome>, ChatError> {
    match status {
        StatusCode::TOO_MANY_REQUESTS => Ok(Some(StreamOutcome::RateLimited)),
        StatusCode::PAYMENT_REQUIRED => Ok(Some(StreamOutcome::PaymentRequired)),
        status if !status.is_success() => Err(ChatError::Status(status)),
        _ => Ok(None),
    }
}

/// Transport for the hosted SnugBot chat function.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    url: String,
    api_key: String,
    client: reqwest::Client,
}

impl HttpTransport {
    /// `idle_timeout` bounds connecting and each wait for the next chunk
    /// of the body. A reply may stream for longer as long as it keeps
    /// arriving.
    pub fn new(url: &str, api_key: &str, idle_timeout: Duration) -> Result<Self, ChatError> {
        let client = reqwest::Client::builder()
            .connect_timeout(idle_timeout)
            .read_timeout(idle_timeout)
            .build()?;
        Ok(Self {
            url: url.to_string(),
            api_key: api_key.to_string(),
            client,
        })
    }
}

#[async_trait]
impl ChatTransport for HttpTransport {
    async fn open(&self, messages: &[Message]) -> Result<StreamResponse, ChatError> {
        let payload = json!({ "messages": messages });
        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .header("Content-Type", "application/json")
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Chat service responded with {}", status);

        let body = match status {
            StatusCode::NO_CONTENT | StatusCode::RESET_CONTENT => None,
            _ => Some(
                response
                    .bytes_stream()
                    .map(|chunk| {
                        chunk
                            .map(|bytes| bytes.to_vec())
                            .map_err(|e| ChatError::Read(e.to_string()))
                    })
                    .boxed(),
            ),
        };

        Ok(StreamResponse { status, body })
    }
}
