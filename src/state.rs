use std::sync::Arc;

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use uuid::Uuid;

use crate::config::Config;
use crate::course::CourseCatalog;
use crate::tutor::{CompletionClient, CompletionClientFactory};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub catalog: Arc<CourseCatalog>,
    pub completion_client: Arc<dyn CompletionClient>,
    pub client_contexts: Arc<DashMap<String, ClientContext>>,
}

#[derive(Clone)]
pub struct ClientContext {
    pub client_uid: String,
    pub connected_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let completion_client = CompletionClientFactory::create_client(&config.tutor_config)?;

        Ok(Self {
            config,
            catalog: Arc::new(CourseCatalog::new()),
            completion_client,
            client_contexts: Arc::new(DashMap::new()),
        })
    }

    pub fn generate_client_uid(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
