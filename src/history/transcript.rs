//! YAML transcripts of returned responses.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::HistoryQueue;
use crate::error::MockError;
use crate::response::ResponseRecord;

/// One returned response, numbered in the order it was handed out.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Exchange {
    /// Position in the transcript, starting at 0.
    pub seq: u64,
    /// The response, including the request it answered.
    pub response: ResponseRecord,
}

/// A named, timestamped dump of a history queue.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transcript {
    /// Human-readable name for this transcript.
    pub name: String,
    /// When the transcript was taken.
    pub recorded_at: DateTime<Utc>,
    /// Held responses, oldest first.
    pub exchanges: Vec<Exchange>,
}

impl Transcript {
    /// Captures the current contents of `history`.
    #[must_use]
    pub fn capture(name: impl Into<String>, history: &HistoryQueue) -> Self {
        let exchanges = history
            .iter()
            .zip(0u64..)
            .map(|(response, seq)| Exchange { seq, response: response.clone() })
            .collect();
        Self { name: name.into(), recorded_at: Utc::now(), exchanges }
    }

    /// Writes the transcript as YAML to `path`.
    ///
    /// # Errors
    ///
    /// Returns [`MockError::Fixture`] if serialization or writing fails.
    pub fn write(&self, path: impl Into<PathBuf>) -> Result<PathBuf, MockError> {
        let path = path.into();
        let yaml = serde_yaml::to_string(self)
            .map_err(|e| MockError::Fixture(format!("Failed to serialize transcript: {e}")))?;
        std::fs::write(&path, yaml).map_err(|e| {
            MockError::Fixture(format!("Failed to write transcript {}: {e}", path.display()))
        })?;
        Ok(path)
    }

    /// Reads a transcript previously written with [`Transcript::write`].
    ///
    /// # Errors
    ///
    /// Returns [`MockError::Fixture`] if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, MockError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            MockError::Fixture(format!("Failed to read transcript {}: {e}", path.display()))
        })?;
        serde_yaml::from_str(&content).map_err(|e| {
            MockError::Fixture(format!("Failed to parse transcript {}: {e}", path.display()))
        })
    }
}
