use std::sync::Arc;

use tracing::{debug, warn};

use crate::tutor::{ChatMessage, CompletionClient, TutorResponse};

/// Conversation state for one connected learner.
///
/// Holds the visible transcript, the latest structured tutor answer and a
/// loading flag that admits at most one completion in flight. Input arriving
/// while a request is outstanding is dropped, not queued.
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    last_response: Option<TutorResponse>,
    loading: bool,
    client: Arc<dyn CompletionClient>,
    persona_prompt: String,
}

impl ChatSession {
    pub fn new(client: Arc<dyn CompletionClient>, persona_prompt: String) -> Self {
        Self {
            messages: Vec::new(),
            last_response: None,
            loading: false,
            client,
            persona_prompt,
        }
    }

    /// Sends one user turn through the tutor client.
    ///
    /// Blank input and input during an in-flight completion are rejected
    /// without touching the transcript. On success the user turn and the
    /// assistant turn are both appended and the structured answer is
    /// returned. The loading flag is released before returning on every
    /// path.
    pub async fn send_message(&mut self, text: &str) -> Option<TutorResponse> {
        let text = text.trim();
        if text.is_empty() {
            debug!("Ignoring empty chat input");
            return None;
        }
        if self.loading {
            warn!("Dropping chat input while a completion is in flight");
            return None;
        }

        self.loading = true;
        self.messages.push(ChatMessage::user(text));

        let result = self
            .client
            .complete(&self.messages, Some(&self.persona_prompt))
            .await;
        self.loading = false;

        match result {
            Ok(response) => {
                self.messages
                    .push(ChatMessage::assistant(response.message_text()));
                self.last_response = Some(response.clone());
                Some(response)
            }
            Err(e) => {
                warn!("Tutor completion failed: {}", e);
                None
            }
        }
    }

    /// Drops the transcript and the stored answer. The session stays usable.
    pub fn clear(&mut self) {
        self.messages.clear();
        self.last_response = None;
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn last_response(&self) -> Option<&TutorResponse> {
        self.last_response.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}
