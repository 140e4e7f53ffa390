use std::sync::Arc;

use quiz_core::model::Outcome;
use services::DEFAULT_PROGRESS_SLOT;
use storage::repository::{InMemoryRepository, KeyValueRepository, StorageError};

use super::test_harness::setup_quiz_harness;
use crate::vm::QuizIntent;

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_first_question_hidden() {
    let harness = setup_quiz_harness(&[1, 2, 3], Arc::new(InMemoryRepository::new())).await;

    let html = harness.render();
    assert!(html.contains("Test Quiz"), "missing title in {html}");
    assert!(html.contains("Question 1 of 3"), "missing position in {html}");
    assert!(
        html.contains("Progress: 0/3 answered (0 correct)"),
        "missing progress in {html}"
    );
    assert!(html.contains("Q1"), "missing question in {html}");
    assert!(html.contains("Check Answer"), "missing reveal in {html}");
    assert!(!html.contains("Answer:"), "answer visible in {html}");
    assert!(!html.contains("I Got It Right"), "grading visible in {html}");
    assert!(html.contains("Random Question"), "missing random in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_reveal_shows_answer_and_grading() {
    let mut harness = setup_quiz_harness(&[1, 2, 3], Arc::new(InMemoryRepository::new())).await;

    harness.dispatch(QuizIntent::Reveal);

    let html = harness.render();
    assert!(html.contains("Answer:"), "missing answer label in {html}");
    assert!(html.contains("A1"), "missing answer text in {html}");
    assert!(html.contains("I Got It Right"), "missing right in {html}");
    assert!(html.contains("I Got It Wrong"), "missing wrong in {html}");
    assert!(!html.contains("Check Answer"), "reveal still shown in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_grading_advances_and_persists() {
    let repo = InMemoryRepository::new();
    let mut harness = setup_quiz_harness(&[1, 2, 3], Arc::new(repo.clone())).await;

    harness.dispatch(QuizIntent::Reveal);
    harness.dispatch(QuizIntent::Grade(Outcome::Incorrect));
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Question 2 of 3"), "did not advance in {html}");
    assert!(
        html.contains("Progress: 1/3 answered (0 correct)"),
        "missing progress in {html}"
    );
    assert!(html.contains("Check Answer"), "answer not hidden in {html}");

    let saved = repo.get_value(DEFAULT_PROGRESS_SLOT).await.unwrap();
    assert_eq!(saved.as_deref(), Some(r#"{"1":"incorrect"}"#));

    harness.dispatch(QuizIntent::Previous);
    let html = harness.render();
    assert!(html.contains("Question 1 of 3"), "previous failed in {html}");
    assert!(!html.contains("Answer:"), "answer visible in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_ignores_grade_while_hidden() {
    let mut harness = setup_quiz_harness(&[1, 2], Arc::new(InMemoryRepository::new())).await;

    harness.dispatch(QuizIntent::Grade(Outcome::Correct));

    let html = harness.render();
    assert!(html.contains("Question 1 of 2"), "moved unexpectedly in {html}");
    assert!(
        html.contains("Progress: 0/2 answered (0 correct)"),
        "graded unexpectedly in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_saved_progress() {
    let repo = InMemoryRepository::new();
    repo.put_value(DEFAULT_PROGRESS_SLOT, r#"{"2":"correct","3":"incorrect"}"#)
        .await
        .unwrap();

    let harness = setup_quiz_harness(&[1, 2, 3], Arc::new(repo)).await;

    let html = harness.render();
    assert!(
        html.contains("Progress: 2/3 answered (1 correct)"),
        "missing saved progress in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_remount_keeps_grades_from_this_run() {
    let repo = InMemoryRepository::new();
    let mut harness = setup_quiz_harness(&[1, 2, 3], Arc::new(repo.clone())).await;

    harness.dispatch(QuizIntent::Reveal);
    harness.dispatch(QuizIntent::Grade(Outcome::Correct));
    harness.drive_async().await;

    harness.remount();

    let html = harness.render();
    assert!(html.contains("Question 1 of 3"), "remount did not restart in {html}");
    assert!(
        html.contains("Progress: 1/3 answered (1 correct)"),
        "remount lost progress in {html}"
    );

    harness.dispatch(QuizIntent::Next);
    harness.dispatch(QuizIntent::Reveal);
    harness.dispatch(QuizIntent::Grade(Outcome::Incorrect));
    harness.drive_async().await;

    let saved = repo.get_value(DEFAULT_PROGRESS_SLOT).await.unwrap();
    assert_eq!(saved.as_deref(), Some(r#"{"1":"correct","2":"incorrect"}"#));
}

struct FailingSlots;

#[async_trait::async_trait]
impl KeyValueRepository for FailingSlots {
    async fn get_value(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }

    async fn put_value(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_reports_failed_save() {
    let mut harness = setup_quiz_harness(&[1, 2], Arc::new(FailingSlots)).await;

    harness.dispatch(QuizIntent::Reveal);
    harness.dispatch(QuizIntent::Grade(Outcome::Correct));
    harness.drive_async().await;

    let html = harness.render();
    assert!(
        html.contains("Progress could not be saved"),
        "missing save error in {html}"
    );
    assert!(
        html.contains("Progress: 1/2 answered (1 correct)"),
        "in-memory grade lost in {html}"
    );
}
