use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::{Outcome, QuestionId};

/// Aggregate counts derived from a `ProgressMap`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProgressStats {
    pub answered: usize,
    pub correct: usize,
}

impl ProgressStats {
    #[must_use]
    pub fn incorrect(&self) -> usize {
        self.answered - self.correct
    }

    /// Summary line such as `3/10 answered (2 correct)`.
    #[must_use]
    pub fn summary(&self, total: usize) -> String {
        format!("{}/{total} answered ({} correct)", self.answered, self.correct)
    }
}

/// Grading outcome per question.
///
/// Entries are only ever inserted or overwritten. Encodes as a JSON object
/// keyed by the decimal question id, e.g. `{"1":"incorrect","3":"correct"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProgressMap(BTreeMap<QuestionId, Outcome>);

impl ProgressMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Upserts the outcome for `id`, returning the outcome it replaced.
    pub fn record(&mut self, id: QuestionId, outcome: Outcome) -> Option<Outcome> {
        self.0.insert(id, outcome)
    }

    #[must_use]
    pub fn get(&self, id: QuestionId) -> Option<Outcome> {
        self.0.get(&id).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (QuestionId, Outcome)> + '_ {
        self.0.iter().map(|(id, outcome)| (*id, *outcome))
    }

    /// Recomputed from the entries on every call.
    #[must_use]
    pub fn stats(&self) -> ProgressStats {
        ProgressStats {
            answered: self.0.len(),
            correct: self.0.values().filter(|o| o.is_correct()).count(),
        }
    }
}

impl FromIterator<(QuestionId, Outcome)> for ProgressMap {
    fn from_iter<I: IntoIterator<Item = (QuestionId, Outcome)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
