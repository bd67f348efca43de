use axum::extract::ws::WebSocket;
use axum::{
    extract::{ws::Message, State, WebSocketUpgrade},
    response::Response,
};
use chrono::Utc;
use futures_util::{SinkExt, StreamExt};
use serde_json::json;
use tokio::sync::mpsc;
use tracing::{error, info};

use crate::chat::{ChatSession, WebSocketSend};
use crate::course::COURSE_TITLE;
use crate::handlers;
use crate::state::AppState;

pub async fn websocket_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> Response {
    ws.on_upgrade(|socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: AppState) {
    let client_uid = state.generate_client_uid();
    info!("New WebSocket connection: {}", client_uid);

    register_client(&state, &client_uid);

    let (mut sender, mut receiver) = socket.split();

    // All outbound frames funnel through one channel so the sink has a
    // single writer.
    let (frame_tx, mut frame_rx) = mpsc::unbounded_channel::<String>();
    let forward_task = tokio::spawn(async move {
        while let Some(frame) = frame_rx.recv().await {
            if sender.send(Message::Text(frame)).await.is_err() {
                break;
            }
        }
    });

    send_handshake(&state, &client_uid, &frame_tx);

    // Each connection carries its own conversation
    let mut session = ChatSession::new(
        state.completion_client.clone(),
        state.config.tutor_config.persona_prompt.clone(),
    );

    // Handle incoming messages
    while let Some(msg) = receiver.next().await {
        match msg {
            Ok(Message::Text(text)) => {
                if let Err(e) =
                    handlers::handle_message(&state, &mut session, &client_uid, &text, &frame_tx)
                        .await
                {
                    error!("Error handling message: {}", e);
                }
            }
            Ok(Message::Close(_)) => {
                info!("Client {} disconnected", client_uid);
                break;
            }
            Err(e) => {
                error!("WebSocket error: {}", e);
                break;
            }
            _ => {}
        }
    }

    unregister_client(&state, &client_uid);
    drop(frame_tx);
    let _ = forward_task.await;
}

fn register_client(state: &AppState, client_uid: &str) {
    let context = crate::state::ClientContext {
        client_uid: client_uid.to_string(),
        connected_at: Utc::now(),
    };
    state.client_contexts.insert(client_uid.to_string(), context);
}

/// Initial messages matching the frontend handshake.
fn send_handshake(state: &AppState, client_uid: &str, sender: &WebSocketSend) {
    let initial_messages = vec![
        json!({
            "type": "full-text",
            "text": "Connection established"
        }),
        json!({
            "type": "tutor-ready",
            "client_uid": client_uid,
            "provider": state.completion_client.provider_name(),
            "course_title": COURSE_TITLE
        }),
    ];

    for msg in initial_messages {
        let _ = sender.send(msg.to_string());
    }
}

fn unregister_client(state: &AppState, client_uid: &str) {
    if let Some((_, context)) = state.client_contexts.remove(client_uid) {
        let connected_for = Utc::now() - context.connected_at;
        info!(
            "Cleaned up client {} after {}s",
            context.client_uid,
            connected_for.num_seconds()
        );
    }
}
