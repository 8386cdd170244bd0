use async_trait::async_trait;

use crate::domain::{DomainError, LogEntry};

/// Durable record of prompt/response exchanges.
///
/// Append-only from the caller's perspective: entries are never removed
/// or reordered, and every successful request adds exactly one entry at
/// the end.
#[async_trait]
pub trait InteractionStore: Send + Sync {
    /// Read the full history in insertion order.
    async fn read_all(&self) -> Result<Vec<LogEntry>, DomainError>;

    /// Append one entry and persist it.
    async fn append(&self, entry: LogEntry) -> Result<(), DomainError>;
}
