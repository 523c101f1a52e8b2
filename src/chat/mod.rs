//! SnugBot chat: streaming reply reassembly and the transcript it
//! fills.
pub mod assembler;
pub mod controller;
pub mod decoder;
pub mod error;
pub mod models;
pub mod stream;
pub mod transport;

pub use assembler::{FrameAssembler, Line, classify_line, extract_delta};
pub use controller::{GREETING, Reply, TranscriptController};
pub use decoder::Utf8StreamDecoder;
pub use error::ChatError;
pub use models::{Message, Role, Transcript};
pub use stream::{
    ByteStream, FAILURE_NOTICE, Opened, StreamOutcome, StreamReader, assemble_reply, open_reply,
};
pub use transport::{ChatTransport, HttpTransport, StreamResponse, classify_status};

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use futures_util::StreamExt;
    use reqwest::StatusCode;

    use super::{ChatError, ChatTransport, Message, StreamResponse};

    /// Transport that replays a fixed response and records requests.
    pub struct ScriptedTransport {
        status: StatusCode,
        chunks: Vec<Vec<u8>>,
        fail_after: bool,
        pub requests: Mutex<Vec<Vec<Message>>>,
    }

    impl ScriptedTransport {
        pub fn ok(chunks: Vec<Vec<u8>>) -> Self {
            Self {
                status: StatusCode::OK,
                chunks,
                fail_after: false,
                requests: Mutex::new(Vec::new()),
            }
        }

        pub fn with_status(status: StatusCode) -> Self {
            Self {
                status,
                ..Self::ok(Vec::new())
            }
        }

        /// Replays `chunks` and then fails the read.
        pub fn failing_after(chunks: Vec<Vec<u8>>) -> Self {
            Self {
                fail_after: true,
                ..Self::ok(chunks)
            }
        }
    }

    #[async_trait]
    impl ChatTransport for ScriptedTransport {
        async fn open(&self, messages: &[Message]) -> Result<StreamResponse, ChatError> {
            self.requests.lock().unwrap().push(messages.to_vec());
            let mut items: Vec<Result<Vec<u8>, ChatError>> =
                self.chunks.iter().cloned().map(Ok).collect();
            if self.fail_after {
                items.push(Err(ChatError::Read(String::from("connection reset"))));
            }
            Ok(StreamResponse {
                status: self.status,
                body: Some(futures::stream::iter(items).boxed()),
            })
        }
    }

    pub fn delta_frame(content: &str) -> String {
        format!(
            "data: {}\n",
            serde_json::json!({"choices": [{"delta": {"content": content}}]})
        )
    }
}
