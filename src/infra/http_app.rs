//! Network session mode: one Server-Sent Events stream per MCP session.
//!
//! `GET /mcp` opens a session and announces where to post messages;
//! `POST /mcp?sessionId=<id>` delivers one JSON-RPC message to that session.

use std::convert::Infallible;

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::StatusCode,
    response::{
        sse::{Event, KeepAlive, Sse},
        IntoResponse, Response,
    },
    routing::get,
    Router,
};
use futures::Stream;
use rmcp::model::ClientJsonRpcMessage;
use serde::Deserialize;
use tokio::sync::mpsc;

use crate::infra::mcp::QuranSvc;
use crate::infra::runtime::mcp_transport::spawn_session;
use crate::infra::runtime::session::{SessionGuard, SessionRegistry};

pub const MCP_PATH: &str = "/mcp";
const INBOUND_QUEUE: usize = 32;

#[derive(Clone)]
pub struct AppState {
    pub svc: QuranSvc,
    pub sessions: SessionRegistry,
}

#[derive(Debug, Deserialize)]
struct SessionQuery {
    #[serde(rename = "sessionId")]
    session_id: Option<String>,
}

pub fn build_app(svc: QuranSvc, sessions: SessionRegistry) -> Router {
    Router::new()
        .route(
            MCP_PATH,
            get(open_session).post(post_message).fallback(not_found),
        )
        .fallback(not_found)
        .with_state(AppState { svc, sessions })
}

async fn open_session(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let (tx, rx) = mpsc::channel(INBOUND_QUEUE);
    let id = state.sessions.open(tx);
    tracing::info!(session_id = %id, "session opened");

    let mut outbound = spawn_session(state.svc.clone(), id.clone(), rx, state.sessions.clone());
    let guard = SessionGuard::new(id, state.sessions);

    let stream = async_stream::stream! {
        // held for the life of the stream; the client going away drops it
        let guard = guard;
        let endpoint = format!("{MCP_PATH}?sessionId={}", guard.id());
        yield Ok(Event::default().event("endpoint").data(endpoint));
        while let Some(msg) = outbound.recv().await {
            yield Ok(Event::default().event("message").data(msg));
        }
        tracing::debug!(session_id = %guard.id(), "event stream finished");
    };

    Sse::new(stream).keep_alive(KeepAlive::default())
}

async fn post_message(
    State(state): State<AppState>,
    Query(query): Query<SessionQuery>,
    body: Bytes,
) -> Response {
    let message: serde_json::Value = match serde_json::from_slice(&body) {
        Ok(v) => v,
        Err(e) => {
            tracing::debug!(error = %e, "rejected non-JSON message");
            return (StatusCode::BAD_REQUEST, "Invalid JSON").into_response();
        }
    };

    let Some(id) = query.session_id.filter(|s| !s.is_empty()) else {
        return (StatusCode::NOT_FOUND, "Session not found").into_response();
    };
    let Some(sender) = state.sessions.lookup(&id) else {
        tracing::debug!(session_id = %id, "message for unknown session");
        return (StatusCode::NOT_FOUND, "Session not found").into_response();
    };

    // The session's service stops on the first line it cannot decode, so only
    // well-formed client messages are forwarded.
    let message: ClientJsonRpcMessage = match serde_json::from_value(message) {
        Ok(m) => m,
        Err(e) => {
            tracing::debug!(session_id = %id, error = %e, "rejected malformed JSON-RPC message");
            return (StatusCode::BAD_REQUEST, "Invalid message").into_response();
        }
    };
    let line = match serde_json::to_string(&message) {
        Ok(line) => line,
        Err(e) => {
            tracing::warn!(session_id = %id, error = %e, "failed to re-encode message");
            return (StatusCode::BAD_REQUEST, "Invalid message").into_response();
        }
    };

    if sender.send(line).await.is_err() {
        state.sessions.remove(&id);
        return (StatusCode::NOT_FOUND, "Session not found").into_response();
    }
    (StatusCode::ACCEPTED, "Accepted").into_response()
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "Not Found")
}
