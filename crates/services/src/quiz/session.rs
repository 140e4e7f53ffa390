use std::sync::Arc;

use rand::SeedableRng;
use rand::rng;
use rand::rngs::StdRng;

use quiz_core::model::{Outcome, ProgressMap, ProgressStats, Question, QuestionBank, QuestionId};
use quiz_core::{AnswerVisibility, Navigator};

use super::observer::{QuizChange, Subscribers, SubscriptionId};

/// In-memory quiz state for one running session.
///
/// Owns the navigation cursor and the progress map. Every mutation is
/// synchronous and is followed by a notification to all subscribers.
/// Persisting the progress map is the caller's job (see `QuizLoopService`).
pub struct QuizSession {
    bank: Arc<QuestionBank>,
    navigator: Navigator,
    progress: ProgressMap,
    rng: StdRng,
    subscribers: Subscribers,
}

impl QuizSession {
    #[must_use]
    pub fn new(bank: Arc<QuestionBank>, progress: ProgressMap) -> Self {
        let navigator = Navigator::new(bank.len());
        Self {
            bank,
            navigator,
            progress,
            rng: StdRng::from_rng(&mut rng()),
            subscribers: Subscribers::default(),
        }
    }

    /// Replace the random source, e.g. with a seeded one in tests.
    #[must_use]
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.navigator.len().get()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.navigator.index()
    }

    #[must_use]
    pub fn current_question(&self) -> &Question {
        self.bank.at(self.navigator.index())
    }

    #[must_use]
    pub fn visibility(&self) -> AnswerVisibility {
        self.navigator.visibility()
    }

    #[must_use]
    pub fn is_answer_revealed(&self) -> bool {
        self.navigator.is_revealed()
    }

    #[must_use]
    pub fn progress(&self) -> &ProgressMap {
        &self.progress
    }

    #[must_use]
    pub fn stats(&self) -> ProgressStats {
        self.progress.stats()
    }

    pub fn next(&mut self) {
        self.navigator.next();
        self.notify_navigated();
    }

    pub fn previous(&mut self) {
        self.navigator.previous();
        self.notify_navigated();
    }

    pub fn jump_random(&mut self) {
        self.navigator.jump_random(&mut self.rng);
        self.notify_navigated();
    }

    /// Show the answer. A second call is a no-op and notifies nobody.
    pub fn reveal(&mut self) {
        if self.navigator.reveal() {
            let index = self.navigator.index();
            self.subscribers.notify(&QuizChange::Revealed { index });
        }
    }

    /// Record `outcome` for the current question, then move to the next one.
    ///
    /// Returns the id of the graded question.
    pub fn grade_and_advance(&mut self, outcome: Outcome) -> QuestionId {
        let question_id = self.current_question().id();
        self.progress.record(question_id, outcome);
        self.navigator.next();
        let change = QuizChange::Graded {
            question_id,
            outcome,
            index: self.navigator.index(),
        };
        tracing::debug!(%question_id, %outcome, "graded question");
        self.subscribers.notify(&change);
        question_id
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&QuizChange) + 'static) -> SubscriptionId {
        self.subscribers.subscribe(Box::new(listener))
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    fn notify_navigated(&mut self) {
        let index = self.navigator.index();
        self.subscribers.notify(&QuizChange::Navigated { index });
    }
}
