use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use super::interface::{ChatMessage, CompletionClient};
use super::response::TutorResponse;

/// One call observed by the scripted client.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub messages: Vec<ChatMessage>,
    pub system_prompt: Option<String>,
}

/// Completion client for tests. Replays queued responses in order and records
/// every request it receives; an exhausted script serves the fallback answer.
#[derive(Default)]
pub struct ScriptedCompletionClient {
    script: Mutex<VecDeque<Result<TutorResponse, String>>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl ScriptedCompletionClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn queue_response(&self, response: TutorResponse) {
        self.script.lock().unwrap().push_back(Ok(response));
    }

    pub fn queue_error(&self, message: &str) {
        self.script.lock().unwrap().push_back(Err(message.to_string()));
    }

    pub fn recorded_requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl CompletionClient for ScriptedCompletionClient {
    async fn complete(
        &self,
        messages: &[ChatMessage],
        system_prompt: Option<&str>,
    ) -> Result<TutorResponse, anyhow::Error> {
        self.requests.lock().unwrap().push(RecordedRequest {
            messages: messages.to_vec(),
            system_prompt: system_prompt.map(str::to_string),
        });

        match self.script.lock().unwrap().pop_front() {
            Some(Ok(response)) => Ok(response),
            Some(Err(message)) => Err(anyhow::anyhow!(message)),
            None => Ok(TutorResponse::fallback()),
        }
    }

    fn provider_name(&self) -> &'static str {
        "scripted"
    }
}
