use quiz_core::AnswerVisibility;
use quiz_core::model::Outcome;
use services::{GradeResult, QuizLoopService, QuizSession};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Previous,
    Next,
    Random,
    Reveal,
    Grade(Outcome),
}

/// Display-ready snapshot of the quiz screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizScreenVm {
    pub position_label: String,
    pub progress_label: String,
    pub question: String,
    pub answer: Option<String>,
    pub visibility: AnswerVisibility,
}

impl QuizScreenVm {
    #[must_use]
    pub fn can_grade(&self) -> bool {
        self.visibility == AnswerVisibility::Revealed
    }
}

#[must_use]
pub fn map_quiz_screen(session: &QuizSession) -> QuizScreenVm {
    let question = session.current_question();
    let total = session.total();
    let stats = session.stats();
    let visibility = session.visibility();

    QuizScreenVm {
        position_label: format!("Question {} of {total}", question.id()),
        progress_label: format!("Progress: {}", stats.summary(total)),
        question: question.question().to_string(),
        answer: (visibility == AnswerVisibility::Revealed).then(|| question.answer().to_string()),
        visibility,
    }
}

/// Apply `intent` to the session.
///
/// Returns the grade, carrying the progress map to persist, when the intent
/// graded a question. Grading is ignored while the answer is hidden.
pub fn apply_intent(
    quiz_loop: &QuizLoopService,
    session: &mut QuizSession,
    intent: QuizIntent,
) -> Option<GradeResult> {
    match intent {
        QuizIntent::Previous => session.previous(),
        QuizIntent::Next => session.next(),
        QuizIntent::Random => session.jump_random(),
        QuizIntent::Reveal => session.reveal(),
        QuizIntent::Grade(outcome) => {
            if !session.is_answer_revealed() {
                tracing::debug!(%outcome, "ignoring grade while answer is hidden");
                return None;
            }
            return Some(quiz_loop.grade(session, outcome));
        }
    }
    None
}
