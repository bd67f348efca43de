use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::{debug, info, warn};

use super::error::CompletionError;
use super::interface::{
    ensure_system_message, ChatMessage, CompletionClient, DEFAULT_SYSTEM_PROMPT,
};
use super::response::{response_schema, TutorResponse};

/// Tutor client for OpenAI-compatible chat-completion endpoints.
///
/// Issues exactly one `POST {base_url}/chat/completions` per call, carrying
/// the message history, the three-variant response schema and a fixed low
/// sampling temperature. Transport defaults apply throughout: no retries, no
/// backoff, no timeout tuning. Every failure class collapses into the canned
/// fallback answer at this boundary; causes survive only in the logs.
pub struct OpenAiCompletionClient {
    model: String,
    base_url: String,
    api_key: String,
    temperature: f64,
    http: reqwest::Client,
}

impl OpenAiCompletionClient {
    pub fn new(model: String, base_url: String, api_key: String, temperature: f64) -> Self {
        info!(
            "Initialized OpenAI-compatible tutor client: model={}, base_url={}",
            model, base_url
        );
        Self {
            model,
            base_url,
            api_key,
            temperature,
            http: reqwest::Client::new(),
        }
    }

    async fn request_completion(
        &self,
        messages: &[ChatMessage],
    ) -> Result<TutorResponse, CompletionError> {
        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));
        let body = json!({
            "model": self.model,
            "messages": messages,
            "response_format": {
                "type": "json_object",
                "schema": response_schema(),
            },
            "temperature": self.temperature,
        });

        debug!("Requesting tutor completion from {}", url);

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CompletionError::HttpStatus { status, body });
        }

        // The completion itself arrives as a JSON-encoded string inside the
        // chat envelope.
        let payload: Value = response.json().await?;
        let content = payload["choices"][0]["message"]["content"]
            .as_str()
            .ok_or(CompletionError::EmptyChoices)?;

        let tutor_response: TutorResponse = serde_json::from_str(content)?;
        Ok(tutor_response)
    }
}

#[async_trait]
impl CompletionClient for OpenAiCompletionClient {
    async fn complete(
        &self,
        messages: &[ChatMessage],
        system_prompt: Option<&str>,
    ) -> Result<TutorResponse, anyhow::Error> {
        let system = system_prompt.unwrap_or(DEFAULT_SYSTEM_PROMPT);
        let messages = ensure_system_message(messages, system);

        match self.request_completion(&messages).await {
            Ok(response) => Ok(response),
            Err(e) => {
                warn!("Completion request failed, serving fallback answer: {}", e);
                Ok(TutorResponse::fallback())
            }
        }
    }

    fn provider_name(&self) -> &'static str {
        "openai_compatible"
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::http::StatusCode;
    use axum::routing::post;
    use axum::{Json, Router};

    use super::*;
    use crate::tutor::response::FALLBACK_MESSAGE;

    /// Spawn a throwaway completion endpoint on a random local port that
    /// answers every request with `status` and `body`, recording request
    /// bodies as they arrive.
    async fn spawn_completion_endpoint(
        status: StatusCode,
        body: Value,
    ) -> (String, Arc<Mutex<Vec<Value>>>) {
        let recorded: Arc<Mutex<Vec<Value>>> = Arc::new(Mutex::new(Vec::new()));
        let captured = recorded.clone();

        let app = Router::new().route(
            "/chat/completions",
            post(move |Json(request): Json<Value>| {
                let captured = captured.clone();
                let body = body.clone();
                async move {
                    captured.lock().unwrap().push(request);
                    (status, Json(body))
                }
            }),
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (base_url, recorded)
    }

    fn client_for(base_url: String) -> OpenAiCompletionClient {
        OpenAiCompletionClient::new(
            "gpt-4-turbo-preview".to_string(),
            base_url,
            "test-key".to_string(),
            0.2,
        )
    }

    fn completion_envelope(content: &Value) -> Value {
        json!({
            "choices": [{
                "message": {
                    "role": "assistant",
                    "content": serde_json::to_string(content).unwrap(),
                }
            }]
        })
    }

    #[tokio::test]
    async fn parses_structured_completion() {
        let content = json!({
            "response_type": "concept_explanation",
            "content": {
                "title": "Law of Large Numbers",
                "summary": "Sample means converge to the expectation.",
                "detailed_explanation": "Averaging many independent draws stabilizes the estimate."
            }
        });
        let (base_url, _) =
            spawn_completion_endpoint(StatusCode::OK, completion_envelope(&content)).await;

        let client = client_for(base_url);
        let response = client
            .complete(&[ChatMessage::user("What does the LLN say?")], None)
            .await
            .unwrap();

        match response {
            TutorResponse::ConceptExplanation(explanation) => {
                assert_eq!(explanation.title, "Law of Large Numbers");
                assert_eq!(explanation.summary, "Sample means converge to the expectation.");
                assert_eq!(
                    explanation.detailed_explanation,
                    "Averaging many independent draws stabilizes the estimate."
                );
                assert_eq!(explanation.examples, None);
            }
            other => panic!("expected concept explanation, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn prepends_persona_as_single_system_message() {
        let content = json!({ "response_type": "general_answer", "content": "ok" });
        let (base_url, recorded) =
            spawn_completion_endpoint(StatusCode::OK, completion_envelope(&content)).await;

        let client = client_for(base_url);
        client
            .complete(
                &[ChatMessage::user("hi")],
                Some("You are a test persona."),
            )
            .await
            .unwrap();

        let requests = recorded.lock().unwrap();
        assert_eq!(requests.len(), 1);
        let request = &requests[0];

        let messages = request["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0]["role"], "system");
        assert_eq!(messages[0]["content"], "You are a test persona.");
        assert_eq!(messages[1]["role"], "user");

        // Fixed request parameters travel with every call.
        assert_eq!(request["model"], "gpt-4-turbo-preview");
        assert_eq!(request["temperature"], 0.2);
        assert_eq!(request["response_format"]["type"], "json_object");
        assert_eq!(
            request["response_format"]["schema"]["required"],
            json!(["response_type", "content"])
        );
    }

    #[tokio::test]
    async fn keeps_existing_system_message() {
        let content = json!({ "response_type": "general_answer", "content": "ok" });
        let (base_url, recorded) =
            spawn_completion_endpoint(StatusCode::OK, completion_envelope(&content)).await;

        let client = client_for(base_url);
        client
            .complete(
                &[
                    ChatMessage::system("Existing persona."),
                    ChatMessage::user("hi"),
                ],
                Some("Replacement persona."),
            )
            .await
            .unwrap();

        let requests = recorded.lock().unwrap();
        let messages = requests[0]["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0]["content"], "Existing persona.");
        let system_count = messages
            .iter()
            .filter(|m| m["role"] == "system")
            .count();
        assert_eq!(system_count, 1);
    }

    #[tokio::test]
    async fn http_error_yields_fallback() {
        let (base_url, _) = spawn_completion_endpoint(
            StatusCode::INTERNAL_SERVER_ERROR,
            json!({ "error": "boom" }),
        )
        .await;

        let client = client_for(base_url);
        let response = client
            .complete(&[ChatMessage::user("hi")], None)
            .await
            .unwrap();

        assert_eq!(response, TutorResponse::fallback());
        assert_eq!(
            response,
            TutorResponse::GeneralAnswer(FALLBACK_MESSAGE.to_string())
        );
    }

    #[tokio::test]
    async fn unreachable_endpoint_yields_fallback() {
        // Bind, grab the port, then drop the listener so nothing answers.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let client = client_for(base_url);
        let response = client
            .complete(&[ChatMessage::user("hi")], None)
            .await
            .unwrap();

        assert_eq!(response, TutorResponse::fallback());
    }

    #[tokio::test]
    async fn malformed_completion_text_yields_fallback() {
        let envelope = json!({
            "choices": [{ "message": { "role": "assistant", "content": "not json at all" } }]
        });
        let (base_url, _) = spawn_completion_endpoint(StatusCode::OK, envelope).await;

        let client = client_for(base_url);
        let response = client
            .complete(&[ChatMessage::user("hi")], None)
            .await
            .unwrap();

        assert_eq!(response, TutorResponse::fallback());
    }

    #[tokio::test]
    async fn shape_violating_payload_yields_fallback() {
        // Valid JSON, but content contradicts the response_type tag.
        let content = json!({ "response_type": "concept_explanation", "content": "a string" });
        let (base_url, _) =
            spawn_completion_endpoint(StatusCode::OK, completion_envelope(&content)).await;

        let client = client_for(base_url);
        let response = client
            .complete(&[ChatMessage::user("hi")], None)
            .await
            .unwrap();

        assert_eq!(response, TutorResponse::fallback());
    }

    #[tokio::test]
    async fn missing_choices_yields_fallback() {
        let (base_url, _) = spawn_completion_endpoint(StatusCode::OK, json!({})).await;

        let client = client_for(base_url);
        let response = client
            .complete(&[ChatMessage::user("hi")], None)
            .await
            .unwrap();

        assert_eq!(response, TutorResponse::fallback());
    }
}
