mod keymap;
mod quiz_vm;

pub use keymap::intent_for_key;
pub use quiz_vm::{QuizIntent, QuizScreenVm, apply_intent, map_quiz_screen};
