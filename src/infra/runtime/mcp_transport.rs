//! MCP transport plumbing (stdio + per-session in-memory pipes), decoupled from tool logic.

use rmcp::{RoleServer, ServerHandler, ServiceExt};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;

use crate::infra::runtime::session::SessionRegistry;

const PIPE_BUFFER: usize = 64 * 1024;
const OUTBOUND_QUEUE: usize = 32;

/// Serve one MCP session over stdin/stdout until the client closes the stream.
pub async fn serve_stdio<H>(handler: H) -> anyhow::Result<()>
where
    H: ServerHandler,
{
    let running = handler
        .serve((tokio::io::stdin(), tokio::io::stdout()))
        .await?;
    let reason = running.waiting().await?;
    tracing::info!(reason = ?reason, "stdio session ended");
    Ok(())
}

/// Start an MCP service for one network session.
///
/// Messages arriving on `inbound` are written line by line into the service;
/// every line the service writes back is forwarded on the returned receiver.
/// The session is removed from `sessions` once the service stops.
pub fn spawn_session<H>(
    handler: H,
    session_id: String,
    mut inbound: mpsc::Receiver<String>,
    sessions: SessionRegistry,
) -> mpsc::Receiver<String>
where
    H: ServerHandler,
{
    let (mut client_w, server_r) = tokio::io::duplex(PIPE_BUFFER);
    let (server_w, client_r) = tokio::io::duplex(PIPE_BUFFER);
    let (out_tx, out_rx) = mpsc::channel(OUTBOUND_QUEUE);

    tokio::spawn(async move {
        while let Some(msg) = inbound.recv().await {
            if client_w.write_all(msg.as_bytes()).await.is_err()
                || client_w.write_all(b"\n").await.is_err()
            {
                break;
            }
        }
        // dropping client_w is EOF for the service
    });

    tokio::spawn(async move {
        let mut lines = BufReader::new(client_r).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            if out_tx.send(line).await.is_err() {
                break;
            }
        }
    });

    tokio::spawn(async move {
        match ServiceExt::<RoleServer>::serve(handler, (server_r, server_w)).await {
            Ok(running) => match running.waiting().await {
                Ok(reason) => tracing::debug!(session_id = %session_id, reason = ?reason, "mcp service stopped"),
                Err(e) => tracing::warn!(session_id = %session_id, error = %e, "mcp service task failed"),
            },
            Err(e) => tracing::warn!(session_id = %session_id, error = %e, "mcp initialize failed"),
        }
        sessions.remove(&session_id);
    });

    out_rx
}
