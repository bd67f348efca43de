use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::chat::{ChatSession, WebSocketSend};
use crate::state::AppState;

pub async fn handle_message(
    state: &AppState,
    session: &mut ChatSession,
    client_uid: &str,
    text: &str,
    sender: &WebSocketSend,
) -> anyhow::Result<()> {
    let msg: Value = serde_json::from_str(text)?;
    let msg_type = msg.get("type").and_then(|v| v.as_str());

    match msg_type {
        Some("text-input") => {
            handle_text_input(session, client_uid, &msg, sender).await?;
        }
        Some("clear-history") => {
            handle_clear_history(session, client_uid, sender)?;
        }
        Some("fetch-history") => {
            handle_fetch_history(session, sender)?;
        }
        Some("fetch-course") => {
            handle_fetch_course(state, sender)?;
        }
        _ => {
            warn!("Unknown message type: {:?}", msg_type);
        }
    }

    Ok(())
}

async fn handle_text_input(
    session: &mut ChatSession,
    client_uid: &str,
    msg: &Value,
    sender: &WebSocketSend,
) -> anyhow::Result<()> {
    let text = msg.get("text").and_then(|v| v.as_str()).unwrap_or("");
    debug!("Text input from {}: {:?}", client_uid, text);

    // Send conversation start signal
    let _ = sender.send(
        json!({
            "type": "control",
            "text": "conversation-chain-start"
        })
        .to_string(),
    );

    // Rejected input (blank, or a completion already in flight) produces no
    // tutor-response frame, only the start/end pair.
    if let Some(response) = session.send_message(text).await {
        let _ = sender.send(
            json!({
                "type": "tutor-response",
                "response": response,
                "message": session.messages().last()
            })
            .to_string(),
        );
    }

    // Send conversation end signal
    let _ = sender.send(
        json!({
            "type": "control",
            "text": "conversation-chain-end"
        })
        .to_string(),
    );

    Ok(())
}

fn handle_clear_history(
    session: &mut ChatSession,
    client_uid: &str,
    sender: &WebSocketSend,
) -> anyhow::Result<()> {
    session.clear();
    debug!("Cleared chat history for {}", client_uid);

    let _ = sender.send(json!({ "type": "history-cleared" }).to_string());
    Ok(())
}

fn handle_fetch_history(session: &ChatSession, sender: &WebSocketSend) -> anyhow::Result<()> {
    let _ = sender.send(
        json!({
            "type": "history-data",
            "messages": session.messages()
        })
        .to_string(),
    );
    Ok(())
}

fn handle_fetch_course(state: &AppState, sender: &WebSocketSend) -> anyhow::Result<()> {
    let _ = sender.send(
        json!({
            "type": "course-data",
            "modules": state.catalog.modules()
        })
        .to_string(),
    );
    Ok(())
}
