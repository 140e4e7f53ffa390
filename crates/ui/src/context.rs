use std::sync::{Arc, Mutex, PoisonError};

use quiz_core::model::ProgressMap;
use services::QuizLoopService;

pub trait UiApp: Send + Sync {
    fn title(&self) -> String;
    /// Progress loaded from storage before the window opened.
    fn initial_progress(&self) -> ProgressMap;

    fn quiz_loop(&self) -> Arc<QuizLoopService>;
}

#[derive(Clone)]
pub struct AppContext {
    title: String,
    progress: Arc<Mutex<ProgressMap>>,
    quiz_loop: Arc<QuizLoopService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            title: app.title(),
            progress: Arc::new(Mutex::new(app.initial_progress())),
            quiz_loop: app.quiz_loop(),
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Latest progress of this run, shared by every clone of the context.
    ///
    /// A freshly mounted quiz view starts from this, not from the launch snapshot.
    #[must_use]
    pub fn progress(&self) -> ProgressMap {
        self.progress
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn set_progress(&self, progress: ProgressMap) {
        *self.progress.lock().unwrap_or_else(PoisonError::into_inner) = progress;
    }

    #[must_use]
    pub fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
