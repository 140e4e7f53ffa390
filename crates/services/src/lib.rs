#![forbid(unsafe_code)]

pub mod app_services;
pub mod dataset;
pub mod error;
pub mod progress_store;
pub mod quiz;

pub use app_services::QuizServices;
pub use dataset::{DEFAULT_DATASET, load_question_bank, parse_question_bank};
pub use error::{DatasetError, ProgressStoreError, QuizError, QuizServicesError};
pub use progress_store::{DEFAULT_PROGRESS_SLOT, ProgressStore};
pub use quiz::{GradeResult, QuizChange, QuizLoopService, QuizSession, SubscriptionId};
