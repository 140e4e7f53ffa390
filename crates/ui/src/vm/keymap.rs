use dioxus::prelude::Key;
use quiz_core::model::Outcome;

use super::QuizIntent;

/// Keyboard shortcut for `key`, given whether the answer is showing.
#[must_use]
pub fn intent_for_key(key: &Key, revealed: bool) -> Option<QuizIntent> {
    match key {
        Key::ArrowLeft => Some(QuizIntent::Previous),
        Key::ArrowRight => Some(QuizIntent::Next),
        Key::Enter if !revealed => Some(QuizIntent::Reveal),
        Key::Character(ch) => match ch.to_lowercase().as_str() {
            "p" => Some(QuizIntent::Previous),
            "n" => Some(QuizIntent::Next),
            "r" => Some(QuizIntent::Random),
            " " if !revealed => Some(QuizIntent::Reveal),
            "y" if revealed => Some(QuizIntent::Grade(Outcome::Correct)),
            "x" if revealed => Some(QuizIntent::Grade(Outcome::Incorrect)),
            _ => None,
        },
        _ => None,
    }
}
