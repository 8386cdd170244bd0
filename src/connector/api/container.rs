use std::sync::Arc;

use anyhow::Result;
use tracing::debug;

use crate::application::{GenerateResponseUseCase, GenerationClient, InteractionStore};
use crate::connector::{InMemoryInteractionStore, JsonFileStore, OllamaClient};

pub struct ContainerConfig {
    /// Base URL of the inference server (path `/api/generate` is appended).
    pub model_url: String,
    /// Model identifier sent with every generation request.
    pub model: String,
    /// Path of the JSON log store.
    pub log_file: String,
    /// Keep the interaction log in memory instead of on disk.
    pub memory_storage: bool,
}

pub struct Container {
    client: Arc<dyn GenerationClient>,
    store: Arc<dyn InteractionStore>,
    config: ContainerConfig,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Result<Self> {
        let client: Arc<dyn GenerationClient> =
            Arc::new(OllamaClient::new(&config.model, &config.model_url));

        let store: Arc<dyn InteractionStore> = if config.memory_storage {
            debug!("Using in-memory interaction store");
            Arc::new(InMemoryInteractionStore::new())
        } else {
            debug!("Using JSON file store at {}", config.log_file);
            Arc::new(JsonFileStore::new(&config.log_file)?)
        };

        Ok(Self {
            client,
            store,
            config,
        })
    }

    /// Wire a container from pre-built adapters. Used by tests to swap in
    /// fakes without touching the network or the filesystem.
    pub fn with_adapters(
        client: Arc<dyn GenerationClient>,
        store: Arc<dyn InteractionStore>,
        config: ContainerConfig,
    ) -> Self {
        Self {
            client,
            store,
            config,
        }
    }

    pub fn generate_use_case(&self) -> GenerateResponseUseCase {
        GenerateResponseUseCase::new(self.client.clone(), self.store.clone())
    }

    pub fn store(&self) -> Arc<dyn InteractionStore> {
        self.store.clone()
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    pub fn model_url(&self) -> &str {
        &self.config.model_url
    }

    pub fn log_file(&self) -> &str {
        &self.config.log_file
    }

    pub fn memory_storage(&self) -> bool {
        self.config.memory_storage
    }
}
