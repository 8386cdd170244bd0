use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::application::InteractionStore;
use crate::domain::{DomainError, LogDocument, LogEntry};

/// [`InteractionStore`] backed by a single JSON document on disk.
///
/// The whole document is read, mutated in memory, and rewritten on every
/// append. The read and write halves are separate awaits, so two
/// overlapping appends can both read the same stale document and the
/// second write silently drops the first entry. Known lost-update hazard;
/// acceptable for a single-user local relay.
///
/// Missing or unparseable content is treated as an empty history: the next
/// append starts a fresh document and prior (corrupt) content is
/// discarded. The recovery is logged at WARN but never surfaced to the
/// caller.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Open a store at `path`, creating the parent directory if needed.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the full document.
    ///
    /// A missing file or invalid JSON both yield an empty document. Any
    /// other I/O failure propagates.
    pub async fn read_document(&self) -> Result<LogDocument, DomainError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("JsonFileStore: {} does not exist yet", self.path.display());
                return Ok(LogDocument::default());
            }
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_slice(&bytes) {
            Ok(doc) => Ok(doc),
            Err(e) => {
                warn!(
                    "JsonFileStore: {} is not valid JSON ({e}); starting with an empty history",
                    self.path.display()
                );
                Ok(LogDocument::default())
            }
        }
    }

    /// Serialize `doc` and rewrite the file in full.
    pub async fn write_document(&self, doc: &LogDocument) -> Result<(), DomainError> {
        let json = serde_json::to_string_pretty(doc)
            .map_err(|e| DomainError::storage(format!("JsonFileStore: serialization failed: {e}")))?;
        tokio::fs::write(&self.path, json).await?;
        Ok(())
    }
}

#[async_trait]
impl InteractionStore for JsonFileStore {
    async fn read_all(&self) -> Result<Vec<LogEntry>, DomainError> {
        Ok(self.read_document().await?.logs)
    }

    async fn append(&self, entry: LogEntry) -> Result<(), DomainError> {
        let mut doc = self.read_document().await?;
        doc.push(entry);
        self.write_document(&doc).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> JsonFileStore {
        JsonFileStore::new(dir.path().join("logs").join("log.jsonl")).unwrap()
    }

    #[tokio::test]
    async fn missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        assert!(store.read_all().await.unwrap().is_empty());
        assert!(!store.path().exists(), "read must not create the file");
    }

    #[tokio::test]
    async fn append_then_read_returns_the_entry() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.append(LogEntry::new("p1", "r1")).await.unwrap();

        let entries = store.read_all().await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].prompt(), "p1");
        assert_eq!(entries[0].response(), "r1");
    }

    #[tokio::test]
    async fn reads_without_intervening_write_are_identical() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.append(LogEntry::new("p1", "r1")).await.unwrap();
        store.append(LogEntry::new("p2", "r2")).await.unwrap();

        let first = store.read_all().await.unwrap();
        let second = store.read_all().await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn appends_preserve_order_and_grow_by_one() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        for i in 0..4 {
            let before = store.read_all().await.unwrap().len();
            store
                .append(LogEntry::new(format!("p{i}"), format!("r{i}")))
                .await
                .unwrap();
            let after = store.read_all().await.unwrap();
            assert_eq!(after.len(), before + 1);
        }

        let prompts: Vec<_> = store
            .read_all()
            .await
            .unwrap()
            .iter()
            .map(|e| e.prompt().to_string())
            .collect();
        assert_eq!(prompts, ["p0", "p1", "p2", "p3"]);
    }

    #[tokio::test]
    async fn corrupt_file_recovers_to_a_single_entry_on_next_append() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        tokio::fs::write(store.path(), "{not json at all").await.unwrap();
        store.append(LogEntry::new("fresh", "start")).await.unwrap();

        let entries = store.read_all().await.unwrap();
        assert_eq!(entries.len(), 1, "prior corrupt history is dropped");
        assert_eq!(entries[0].prompt(), "fresh");
    }

    #[tokio::test]
    async fn persisted_shape_is_one_object_with_a_logs_array() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.append(LogEntry::new("p", "r")).await.unwrap();

        let raw = tokio::fs::read_to_string(store.path()).await.unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let logs = value["logs"].as_array().expect("top-level `logs` array");
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0]["prompt"], "p");
        assert_eq!(logs[0]["response"], "r");
        assert!(logs[0]["timestamp"].is_string());
    }

    // Forces the read-modify-write interleaving: both sides read before
    // either writes, and the second write wins.
    #[tokio::test]
    async fn interleaved_appends_lose_the_first_entry() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let mut doc_a = store.read_document().await.unwrap();
        let mut doc_b = store.read_document().await.unwrap();

        doc_a.push(LogEntry::new("first", "r"));
        store.write_document(&doc_a).await.unwrap();

        doc_b.push(LogEntry::new("second", "r"));
        store.write_document(&doc_b).await.unwrap();

        let entries = store.read_all().await.unwrap();
        assert_eq!(entries.len(), 1, "lost update: only the last write survives");
        assert_eq!(entries[0].prompt(), "second");
    }
}
