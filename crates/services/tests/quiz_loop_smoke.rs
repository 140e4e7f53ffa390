use std::sync::Arc;

use quiz_core::AnswerVisibility;
use quiz_core::model::{Outcome, ProgressStats, Question, QuestionBank, QuestionId};
use rand::SeedableRng;
use rand::rngs::StdRng;
use services::{DEFAULT_PROGRESS_SLOT, QuizError, QuizServices, QuizSession};
use storage::repository::{InMemoryRepository, KeyValueRepository, Storage, StorageError};

fn three_questions() -> Arc<QuestionBank> {
    let questions = (1..=3)
        .map(|id| Question::new(QuestionId::new(id), format!("Q{id}"), format!("A{id}")).unwrap())
        .collect();
    Arc::new(QuestionBank::new(questions).unwrap())
}

fn services_over(repo: &InMemoryRepository) -> QuizServices {
    let storage = Storage {
        slots: Arc::new(repo.clone()),
    };
    QuizServices::from_storage(storage, three_questions())
}

async fn reload(repo: &InMemoryRepository) -> QuizSession {
    let quiz_loop = services_over(repo).quiz_loop();
    quiz_loop.start_session(quiz_loop.load_progress().await)
}

#[tokio::test]
async fn grading_scenario_persists_and_survives_reload() {
    let repo = InMemoryRepository::new();
    let services = services_over(&repo);
    let quiz_loop = services.quiz_loop();

    let mut session = quiz_loop.start_session(quiz_loop.load_progress().await);
    assert_eq!(session.current_index(), 0);
    assert_eq!(session.stats(), ProgressStats::default());

    session.reveal();
    assert_eq!(session.visibility(), AnswerVisibility::Revealed);
    let result = quiz_loop.grade(&mut session, Outcome::Incorrect);
    quiz_loop.save_progress(&result.progress).await.unwrap();

    assert_eq!(result.question_id, QuestionId::new(1));
    assert_eq!(result.next_index, 1);
    assert_eq!(result.stats, ProgressStats { answered: 1, correct: 0 });
    assert_eq!(session.current_index(), 1);
    assert_eq!(session.progress().get(QuestionId::new(1)), Some(Outcome::Incorrect));

    session.previous();
    assert_eq!(session.current_index(), 0);
    assert_eq!(session.visibility(), AnswerVisibility::Hidden);

    let mut session = session.with_rng(StdRng::seed_from_u64(5));
    session.jump_random();
    assert!(session.current_index() < 3);

    let raw = repo.get_value(DEFAULT_PROGRESS_SLOT).await.unwrap();
    assert_eq!(raw.as_deref(), Some(r#"{"1":"incorrect"}"#));

    let reloaded = reload(&repo).await;
    assert_eq!(reloaded.current_index(), 0);
    assert_eq!(reloaded.stats(), ProgressStats { answered: 1, correct: 0 });
}

#[tokio::test]
async fn regrading_overwrites_without_growing_answered() {
    let repo = InMemoryRepository::new();
    let quiz_loop = services_over(&repo).quiz_loop();
    let mut session = quiz_loop.start_session(quiz_loop.load_progress().await);

    let first = quiz_loop.grade(&mut session, Outcome::Incorrect);
    quiz_loop.save_progress(&first.progress).await.unwrap();
    session.previous();
    let result = quiz_loop.grade(&mut session, Outcome::Correct);
    quiz_loop.save_progress(&result.progress).await.unwrap();

    assert_eq!(result.stats, ProgressStats { answered: 1, correct: 1 });
    let reloaded = reload(&repo).await;
    assert_eq!(reloaded.progress().get(QuestionId::new(1)), Some(Outcome::Correct));
}

#[tokio::test]
async fn corrupt_saved_progress_starts_empty() {
    let repo = InMemoryRepository::new();
    repo.put_value(DEFAULT_PROGRESS_SLOT, "not json").await.unwrap();

    let session = reload(&repo).await;

    assert_eq!(session.stats(), ProgressStats::default());
}

struct ReadOnlyRepo;

#[async_trait::async_trait]
impl KeyValueRepository for ReadOnlyRepo {
    async fn get_value(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    async fn put_value(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Connection("read-only".to_string()))
    }
}

#[tokio::test]
async fn failed_save_keeps_in_memory_grade() {
    let storage = Storage {
        slots: Arc::new(ReadOnlyRepo),
    };
    let quiz_loop = QuizServices::from_storage(storage, three_questions()).quiz_loop();
    let mut session = quiz_loop.start_session(quiz_loop.load_progress().await);

    let result = quiz_loop.grade(&mut session, Outcome::Correct);
    let err = quiz_loop.save_progress(&result.progress).await.unwrap_err();

    assert!(matches!(err, QuizError::Progress(_)));
    assert_eq!(session.current_index(), 1);
    assert_eq!(session.stats(), ProgressStats { answered: 1, correct: 1 });
}

#[tokio::test]
async fn sqlite_backed_services_persist_progress() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}?mode=rwc", dir.path().join("quiz.sqlite3").display());

    {
        let services = QuizServices::new_sqlite(&url, three_questions()).await.unwrap();
        let quiz_loop = services.quiz_loop();
        let mut session = quiz_loop.start_session(quiz_loop.load_progress().await);
        session.next();
        let result = quiz_loop.grade(&mut session, Outcome::Correct);
        quiz_loop.save_progress(&result.progress).await.unwrap();
    }

    let services = QuizServices::new_sqlite(&url, three_questions()).await.unwrap();
    let progress = services.quiz_loop().load_progress().await;
    assert_eq!(progress.get(QuestionId::new(2)), Some(Outcome::Correct));
}
