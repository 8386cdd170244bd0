use std::sync::Arc;
use std::time::Instant;

use tracing::info;

use crate::application::{GenerationClient, InteractionStore};
use crate::domain::{DomainError, LogEntry};

/// Relay one prompt: call the inference server, record the exchange,
/// return the model's text.
///
/// Control flow is straight-line. The store is only invoked after a
/// successful upstream call, so an upstream failure never produces a log
/// entry. A store failure, however, fails the whole request even though
/// the model already answered — answer delivery and logging are coupled.
pub struct GenerateResponseUseCase {
    client: Arc<dyn GenerationClient>,
    store: Arc<dyn InteractionStore>,
}

impl GenerateResponseUseCase {
    pub fn new(client: Arc<dyn GenerationClient>, store: Arc<dyn InteractionStore>) -> Self {
        Self { client, store }
    }

    pub async fn execute(&self, prompt: &str) -> Result<String, DomainError> {
        let start_time = Instant::now();

        let response = self.client.generate(prompt).await?;

        self.store
            .append(LogEntry::new(prompt, response.as_str()))
            .await?;

        info!(
            "Relayed prompt ({} chars in, {} chars out) in {:.2}s",
            prompt.len(),
            response.len(),
            start_time.elapsed().as_secs_f64()
        );

        Ok(response)
    }
}
