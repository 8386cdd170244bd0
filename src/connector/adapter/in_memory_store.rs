use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::application::InteractionStore;
use crate::domain::{DomainError, LogEntry};

/// [`InteractionStore`] kept entirely in memory.
///
/// Used by tests and by `--memory-storage` mode. Unlike the file store,
/// each append mutates under one mutex, so concurrent appends never lose
/// entries.
pub struct InMemoryInteractionStore {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl InMemoryInteractionStore {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl Default for InMemoryInteractionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl InteractionStore for InMemoryInteractionStore {
    async fn read_all(&self) -> Result<Vec<LogEntry>, DomainError> {
        let entries = self.entries.lock().await;
        Ok(entries.clone())
    }

    async fn append(&self, entry: LogEntry) -> Result<(), DomainError> {
        let mut entries = self.entries.lock().await;
        entries.push(entry);
        Ok(())
    }
}
