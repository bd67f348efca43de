use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::response::TutorResponse;

/// System prompt used when a caller does not supply one.
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful Monte Carlo algorithms tutor.";

/// Role of a conversation participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// One turn of a tutor conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: Role::System, content: content.into() }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self { role: Role::User, content: content.into() }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self { role: Role::Assistant, content: content.into() }
    }
}

/// Interface for a tutor completion backend.
///
/// Implementations are stateless: callers pass the full message history on
/// every call. The bundled providers never surface their failures as `Err`;
/// they collapse every failure class into the canned fallback answer and
/// return it as `Ok`.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Produce one structured tutor response for the given conversation.
    async fn complete(
        &self,
        messages: &[ChatMessage],
        system_prompt: Option<&str>,
    ) -> Result<TutorResponse, anyhow::Error>;

    /// Short provider identifier reported by the health endpoint.
    fn provider_name(&self) -> &'static str;
}

impl std::fmt::Debug for dyn CompletionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CompletionClient({})", self.provider_name())
    }
}

/// Return the sequence with exactly one system message: prepends `system`
/// when none is present, leaves the sequence unchanged otherwise, whatever
/// the existing system message says.
pub fn ensure_system_message(messages: &[ChatMessage], system: &str) -> Vec<ChatMessage> {
    if messages.iter().any(|m| m.role == Role::System) {
        return messages.to_vec();
    }

    let mut with_system = Vec::with_capacity(messages.len() + 1);
    with_system.push(ChatMessage::system(system));
    with_system.extend_from_slice(messages);
    with_system
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prepends_system_message_when_absent() {
        let messages = vec![ChatMessage::user("What is importance sampling?")];
        let result = ensure_system_message(&messages, DEFAULT_SYSTEM_PROMPT);

        assert_eq!(result.len(), 2);
        assert_eq!(result[0], ChatMessage::system(DEFAULT_SYSTEM_PROMPT));
        assert_eq!(result[1], messages[0]);
    }

    #[test]
    fn keeps_existing_system_message_untouched() {
        let messages = vec![
            ChatMessage::system("Answer in French."),
            ChatMessage::user("Bonjour"),
        ];
        let result = ensure_system_message(&messages, DEFAULT_SYSTEM_PROMPT);

        assert_eq!(result, messages);
        assert_eq!(result.iter().filter(|m| m.role == Role::System).count(), 1);
    }

    #[test]
    fn roles_serialize_lowercase() {
        let message = ChatMessage::user("hi");
        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(value, serde_json::json!({ "role": "user", "content": "hi" }));
    }
}
