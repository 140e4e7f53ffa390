use std::sync::Arc;

use quiz_core::model::{Outcome, ProgressMap, ProgressStats, QuestionBank, QuestionId};

use super::session::QuizSession;
use crate::error::QuizError;
use crate::progress_store::ProgressStore;

/// Result of grading the current question.
///
/// `progress` is the full map after the grade, ready to hand to
/// `QuizLoopService::save_progress`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradeResult {
    pub question_id: QuestionId,
    pub outcome: Outcome,
    pub next_index: usize,
    pub stats: ProgressStats,
    pub progress: ProgressMap,
}

/// Orchestrates session start, grading and persistence.
///
/// Grading is synchronous so callers holding the session behind a `RefCell`
/// never keep it borrowed across the save.
#[derive(Clone)]
pub struct QuizLoopService {
    bank: Arc<QuestionBank>,
    store: Arc<ProgressStore>,
}

impl QuizLoopService {
    #[must_use]
    pub fn new(bank: Arc<QuestionBank>, store: Arc<ProgressStore>) -> Self {
        Self { bank, store }
    }

    /// Read saved progress. Falls back to an empty map (see `ProgressStore::load`).
    pub async fn load_progress(&self) -> ProgressMap {
        let progress = self.store.load().await;
        tracing::info!(
            questions = self.bank.len().get(),
            answered = progress.len(),
            "loaded quiz progress"
        );
        progress
    }

    /// Start a session on the first question with `progress` already applied.
    #[must_use]
    pub fn start_session(&self, progress: ProgressMap) -> QuizSession {
        QuizSession::new(Arc::clone(&self.bank), progress)
    }

    /// Grade the current question and advance.
    ///
    /// The grade is in the session before any write happens, so a failed
    /// `save_progress` afterwards leaves it in place.
    pub fn grade(&self, session: &mut QuizSession, outcome: Outcome) -> GradeResult {
        let question_id = session.grade_and_advance(outcome);
        let stats = session.stats();
        tracing::debug!(
            %question_id,
            answered = stats.answered,
            correct = stats.correct,
            "grade recorded"
        );
        GradeResult {
            question_id,
            outcome,
            next_index: session.current_index(),
            stats,
            progress: session.progress().clone(),
        }
    }

    /// # Errors
    ///
    /// Returns `QuizError` if the progress map cannot be saved.
    pub async fn save_progress(&self, progress: &ProgressMap) -> Result<(), QuizError> {
        self.store.save(progress).await.map_err(|err| {
            tracing::error!(error = %err, "failed to save progress");
            QuizError::from(err)
        })
    }
}
