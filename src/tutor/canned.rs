use std::time::Duration;

use async_trait::async_trait;
use tracing::info;

use super::interface::{ChatMessage, CompletionClient, Role};
use super::response::{ConceptExplanation, TutorResponse};

const GREETING: &str = "Hello! I'm your Monte Carlo methods tutor. How can I help you today? \
Would you like to learn about basic concepts, applications, or specific algorithms?";

/// Offline tutor provider. Serves a fixed pair of answers without any network
/// dependency, keyed on the first user message of the conversation, after a
/// short artificial delay so the frontend's loading states stay visible.
pub struct CannedCompletionClient {
    delay: Duration,
}

impl CannedCompletionClient {
    pub fn new() -> Self {
        info!("Initialized canned tutor client");
        Self {
            delay: Duration::from_millis(500),
        }
    }

    fn stock_explanation() -> TutorResponse {
        TutorResponse::ConceptExplanation(ConceptExplanation {
            title: "Monte Carlo Methods".to_string(),
            summary: "Monte Carlo methods are computational algorithms that use repeated \
                      random sampling to obtain numerical results."
                .to_string(),
            detailed_explanation: "Monte Carlo methods are a broad class of computational \
                                   algorithms that rely on repeated random sampling to obtain \
                                   numerical results. The core idea is to use randomness to \
                                   solve problems that might be deterministic in principle."
                .to_string(),
            examples: Some(vec![
                "Monte Carlo integration".to_string(),
                "Monte Carlo simulation for risk assessment".to_string(),
                "Markov Chain Monte Carlo for Bayesian inference".to_string(),
            ]),
            related_concepts: Some(vec![
                "Random sampling".to_string(),
                "Law of large numbers".to_string(),
                "Probabilistic approximation".to_string(),
            ]),
        })
    }
}

impl Default for CannedCompletionClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CompletionClient for CannedCompletionClient {
    async fn complete(
        &self,
        messages: &[ChatMessage],
        _system_prompt: Option<&str>,
    ) -> Result<TutorResponse, anyhow::Error> {
        tokio::time::sleep(self.delay).await;

        let first_user_message = messages
            .iter()
            .find(|m| m.role == Role::User)
            .map(|m| m.content.trim().to_lowercase())
            .unwrap_or_default();

        if first_user_message == "hello" {
            Ok(TutorResponse::GeneralAnswer(GREETING.to_string()))
        } else {
            Ok(Self::stock_explanation())
        }
    }

    fn provider_name(&self) -> &'static str {
        "canned"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instant_client() -> CannedCompletionClient {
        CannedCompletionClient {
            delay: Duration::ZERO,
        }
    }

    #[tokio::test]
    async fn greets_on_hello() {
        let client = instant_client();
        let response = client
            .complete(&[ChatMessage::user("  Hello ")], None)
            .await
            .unwrap();

        assert_eq!(response, TutorResponse::GeneralAnswer(GREETING.to_string()));
    }

    #[tokio::test]
    async fn explains_on_anything_else() {
        let client = instant_client();
        let response = client
            .complete(&[ChatMessage::user("What is importance sampling?")], None)
            .await
            .unwrap();

        match response {
            TutorResponse::ConceptExplanation(explanation) => {
                assert_eq!(explanation.title, "Monte Carlo Methods");
                assert_eq!(explanation.examples.as_ref().unwrap().len(), 3);
            }
            other => panic!("expected concept explanation, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn keyed_on_first_user_message() {
        let client = instant_client();
        let response = client
            .complete(
                &[
                    ChatMessage::system("persona"),
                    ChatMessage::user("hello"),
                    ChatMessage::assistant("hi"),
                    ChatMessage::user("tell me about MCMC"),
                ],
                None,
            )
            .await
            .unwrap();

        assert_eq!(response, TutorResponse::GeneralAnswer(GREETING.to_string()));
    }
}
