use quiz_core::model::{Outcome, QuestionId};

/// A mutation that happened on a `QuizSession`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizChange {
    /// The cursor moved and the answer is hidden again.
    Navigated { index: usize },
    /// The answer of the question at `index` became visible.
    Revealed { index: usize },
    /// `question_id` was graded and the cursor advanced to `index`.
    Graded {
        question_id: QuestionId,
        outcome: Outcome,
        index: usize,
    },
}

/// Handle returned by `QuizSession::subscribe`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&QuizChange)>;

/// Listener registry, notified in subscription order.
#[derive(Default)]
pub(crate) struct Subscribers {
    next_id: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
}

impl Subscribers {
    pub(crate) fn subscribe(&mut self, listener: Listener) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, listener));
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    pub(crate) fn notify(&mut self, change: &QuizChange) {
        for (_, listener) in &mut self.listeners {
            listener(change);
        }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.listeners.len()
    }
}
