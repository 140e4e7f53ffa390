mod observer;
mod session;
mod workflow;

// Public API of the quiz subsystem.
pub use observer::{QuizChange, SubscriptionId};
pub use session::QuizSession;
pub use workflow::{GradeResult, QuizLoopService};
