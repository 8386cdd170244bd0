use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One recorded prompt/response exchange.
///
/// The prompt and response are stored verbatim — no trimming, no length
/// bound. `timestamp` is the creation instant in UTC, serialized as an
/// ISO-8601 string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    timestamp: DateTime<Utc>,
    prompt: String,
    response: String,
}

impl LogEntry {
    /// Build an entry stamped with the current UTC time.
    pub fn new(prompt: impl Into<String>, response: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            prompt: prompt.into(),
            response: response.into(),
        }
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn response(&self) -> &str {
        &self.response
    }
}

/// The persisted shape of the log store: a single JSON object with one
/// `logs` array, insertion order = chronological order of requests.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogDocument {
    pub logs: Vec<LogEntry>,
}

impl LogDocument {
    pub fn push(&mut self, entry: LogEntry) {
        self.logs.push(entry);
    }

    pub fn len(&self) -> usize {
        self.logs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.logs.is_empty()
    }
}
