mod ids;
mod outcome;
mod progress;
mod question;

pub use ids::QuestionId;
pub use outcome::Outcome;
pub use progress::{ProgressMap, ProgressStats};
pub use question::{Question, QuestionBank, QuestionBankError, QuestionError};
