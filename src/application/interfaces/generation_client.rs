use async_trait::async_trait;

use crate::domain::DomainError;

/// Produces a complete text completion for a prompt by calling an
/// inference server.
///
/// One outbound call per invocation, no retries: a timeout, transport
/// failure, or non-success status is terminal for the request.
#[async_trait]
pub trait GenerationClient: Send + Sync {
    /// Generate a completion for `prompt` and return the model's text.
    async fn generate(&self, prompt: &str) -> Result<String, DomainError>;
}
