use std::sync::Arc;

use quiz_core::model::ProgressMap;
use storage::repository::KeyValueRepository;

use crate::error::ProgressStoreError;

/// Slot name the progress map is stored under.
pub const DEFAULT_PROGRESS_SLOT: &str = "quizProgress";

/// Loads and saves the whole progress map in one named slot.
#[derive(Clone)]
pub struct ProgressStore {
    repo: Arc<dyn KeyValueRepository>,
    slot: String,
}

impl ProgressStore {
    #[must_use]
    pub fn new(repo: Arc<dyn KeyValueRepository>) -> Self {
        Self {
            repo,
            slot: DEFAULT_PROGRESS_SLOT.to_string(),
        }
    }

    #[must_use]
    pub fn with_slot(mut self, slot: impl Into<String>) -> Self {
        self.slot = slot.into();
        self
    }

    #[must_use]
    pub fn slot(&self) -> &str {
        &self.slot
    }

    /// Read the persisted progress map.
    ///
    /// Never fails: a missing slot, an unreadable backend or a payload that
    /// does not decode all yield an empty map.
    pub async fn load(&self) -> ProgressMap {
        let raw = match self.repo.get_value(&self.slot).await {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::debug!(slot = %self.slot, "no saved progress, starting fresh");
                return ProgressMap::new();
            }
            Err(err) => {
                tracing::warn!(slot = %self.slot, error = %err, "could not read saved progress");
                return ProgressMap::new();
            }
        };

        match serde_json::from_str::<ProgressMap>(&raw) {
            Ok(progress) => {
                tracing::debug!(slot = %self.slot, entries = progress.len(), "loaded progress");
                progress
            }
            Err(err) => {
                tracing::warn!(slot = %self.slot, error = %err, "discarding malformed progress");
                ProgressMap::new()
            }
        }
    }

    /// Overwrite the slot with the full map.
    ///
    /// # Errors
    ///
    /// Returns `ProgressStoreError` if encoding or the storage write fails.
    pub async fn save(&self, progress: &ProgressMap) -> Result<(), ProgressStoreError> {
        let payload = serde_json::to_string(progress)?;
        self.repo.put_value(&self.slot, &payload).await?;
        tracing::debug!(slot = %self.slot, entries = progress.len(), "saved progress");
        Ok(())
    }
}
