//! Router for the chat API

use std::convert::Infallible;
use std::sync::{Arc, RwLock};
use std::time::Duration;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response, sse::Event, sse::KeepAlive, sse::Sse},
    routing::post,
};
use futures_util::{StreamExt as _, future, stream};
use tokio::sync::{mpsc, oneshot};
use tokio_stream::wrappers::UnboundedReceiverStream;

use super::public;
use crate::api::public::{ApiError, ErrorResponse};
use crate::api::state::AppState;
use crate::chat::{
    FAILURE_NOTICE, HttpTransport, Opened, StreamOutcome, Transcript, assemble_reply, open_reply,
};

type SharedState = Arc<RwLock<AppState>>;

fn refusal(status: StatusCode, notice: &str) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: notice.to_string(),
        }),
    )
        .into_response()
}

/// Send the conversation to SnugBot and stream the reply. Each event
/// carries the full reply so far, followed by a `done` event with the
/// outcome or an `error` event if the upstream failed mid-reply.
async fn chat_handler(
    State(state): State<SharedState>,
    Json(payload): Json<public::ChatRequest>,
) -> Result<Response, ApiError> {
    if payload.messages.is_empty() {
        return Err(ApiError::bad_request(anyhow::anyhow!(
            "messages must not be empty"
        )));
    }

    let transport = {
        let shared_state = state.read().expect("Unable to read share state");
        let config = &shared_state.config;
        HttpTransport::new(
            &config.chat_url,
            &config.chat_api_key,
            Duration::from_secs(config.chat_timeout_secs),
        )?
    };

    let reader = match open_reply(&transport, &payload.messages).await {
        Ok(Opened::Streaming(reader)) => reader,
        Ok(Opened::Refused(outcome)) => {
            tracing::warn!("Chat request refused: {:?}", outcome);
            let status = match outcome {
                StreamOutcome::RateLimited => StatusCode::TOO_MANY_REQUESTS,
                StreamOutcome::PaymentRequired => StatusCode::PAYMENT_REQUIRED,
                _ => StatusCode::BAD_GATEWAY,
            };
            return Ok(refusal(status, outcome.notice().unwrap_or(FAILURE_NOTICE)));
        }
        Err(e) => {
            tracing::error!("Chat request failed: {}", e);
            return Ok(refusal(StatusCode::BAD_GATEWAY, FAILURE_NOTICE));
        }
    };

    let (tx, rx) = mpsc::unbounded_channel::<String>();
    let (last_tx, last_rx) = oneshot::channel::<Event>();

    tokio::spawn(async move {
        let mut transcript = Transcript::new_with_messages(payload.messages);
        let last = match assemble_reply(reader, &mut transcript, &tx).await {
            Ok(outcome) => {
                tracing::debug!("Chat reply finished: {:?}", outcome);
                let done = serde_json::to_string(&public::ChatDone { outcome })
                    .unwrap_or_default();
                Event::default().event("done").data(done)
            }
            Err(e) => {
                tracing::error!("Chat reply failed: {}", e);
                Event::default().event("error").data(FAILURE_NOTICE)
            }
        };
        drop(tx);
        // The client may already be gone
        let _ = last_tx.send(last);
    });

    let updates = UnboundedReceiverStream::new(rx).map(|content| Event::default().data(content));
    let last = stream::once(last_rx).filter_map(|last| future::ready(last.ok()));
    let events = updates.chain(last).map(Ok::<Event, Infallible>);

    let resp = Sse::new(events)
        .keep_alive(
            KeepAlive::default()
                .text("keep-alive")
                .interval(Duration::from_secs(15)),
        )
        .into_response();

    Ok(resp)
}

/// Create the chat router
pub fn router() -> Router<SharedState> {
    Router::new().route("/", post(chat_handler))
}
