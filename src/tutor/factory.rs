use std::sync::Arc;

use anyhow::{anyhow, Result};
use tracing::info;

use crate::config::TutorConfig;

use super::canned::CannedCompletionClient;
use super::interface::CompletionClient;
use super::openai_compatible::OpenAiCompletionClient;

pub struct CompletionClientFactory;

impl CompletionClientFactory {
    /// Creates a tutor completion client for the configured provider
    ///
    /// # Arguments
    /// * `config` - Tutor section of the application configuration
    ///
    /// # Returns
    /// A Result containing the shared completion client or an error
    pub fn create_client(config: &TutorConfig) -> Result<Arc<dyn CompletionClient>> {
        info!("Initializing tutor provider: {}", config.provider);

        match config.provider.as_str() {
            "openai_compatible" | "openai" => Ok(Arc::new(OpenAiCompletionClient::new(
                config.model.clone(),
                config.base_url.clone(),
                config.api_key.clone(),
                config.temperature,
            ))),
            "canned" | "demo" => Ok(Arc::new(CannedCompletionClient::new())),
            _ => Err(anyhow!("Unsupported tutor provider: {}", config.provider)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_configured_providers() {
        let mut config = TutorConfig::default();

        config.provider = "openai_compatible".to_string();
        let client = CompletionClientFactory::create_client(&config).unwrap();
        assert_eq!(client.provider_name(), "openai_compatible");

        config.provider = "canned".to_string();
        let client = CompletionClientFactory::create_client(&config).unwrap();
        assert_eq!(client.provider_name(), "canned");
    }

    #[test]
    fn rejects_unknown_provider() {
        let config = TutorConfig {
            provider: "carrier-pigeon".to_string(),
            ..TutorConfig::default()
        };

        let err = CompletionClientFactory::create_client(&config).unwrap_err();
        assert!(err.to_string().contains("carrier-pigeon"));
    }
}
