use crate::interface_adapters::protocol::ServerEvent;
use crate::interface_adapters::state::AppState;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{error, info, warn};

// Upgrade a feed client connection and attach it to the event channel.
pub async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    // Subscribe before the upgrade completes so no event published during
    // the handshake is missed.
    let events = state.events.subscribe();
    ws.on_upgrade(move |socket| handle_socket(socket, events))
}

// Push broadcast events to one connected feed client until either side closes.
async fn handle_socket(mut socket: WebSocket, mut events: broadcast::Receiver<ServerEvent>) {
    info!("feed client connected");

    loop {
        tokio::select! {
            incoming = socket.recv() => {
                match incoming {
                    Some(Ok(Message::Close(_))) | None => break,
                    // Feed clients only listen; ignore anything else they send.
                    Some(Ok(_)) => {}
                    Some(Err(error)) => {
                        warn!(%error, "feed socket error");
                        break;
                    }
                }
            }
            event = events.recv() => {
                match event {
                    Ok(event) => {
                        let txt = match serde_json::to_string(&event) {
                            Ok(txt) => txt,
                            Err(error) => {
                                error!(%error, "failed to serialize feed event");
                                continue;
                            }
                        };
                        if socket.send(Message::Text(txt.into())).await.is_err() {
                            break;
                        }
                    }
                    Err(broadcast::error::RecvError::Lagged(missed)) => {
                        // Slow clients skip ahead rather than stall the feed.
                        warn!(missed, "feed client lagged; skipping missed events");
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
        }
    }

    info!("feed client disconnected");
}
