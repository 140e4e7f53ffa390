use std::sync::Arc;

use quiz_core::model::QuestionBank;
use storage::repository::Storage;

use crate::error::QuizServicesError;
use crate::progress_store::ProgressStore;
use crate::quiz::QuizLoopService;

/// Assembles app-facing services over one storage backend.
#[derive(Clone)]
pub struct QuizServices {
    quiz_loop: Arc<QuizLoopService>,
}

impl QuizServices {
    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `QuizServicesError` if storage initialization fails.
    pub async fn new_sqlite(
        db_url: &str,
        bank: Arc<QuestionBank>,
    ) -> Result<Self, QuizServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::from_storage(storage, bank))
    }

    #[must_use]
    pub fn from_storage(storage: Storage, bank: Arc<QuestionBank>) -> Self {
        let progress_store = Arc::new(ProgressStore::new(storage.slots));
        let quiz_loop = Arc::new(QuizLoopService::new(bank, progress_store));
        Self { quiz_loop }
    }

    #[must_use]
    pub fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }
}
