use tokio::sync::mpsc;

/// Type alias for the websocket sender channel
pub type WebSocketSend = mpsc::UnboundedSender<String>;
