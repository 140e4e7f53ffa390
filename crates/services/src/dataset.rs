//! Question dataset loading.

use std::path::Path;

use serde::Deserialize;

use quiz_core::model::{Question, QuestionBank, QuestionId};

use crate::error::DatasetError;

/// Dataset compiled into the binary, used when no question file is given.
pub const DEFAULT_DATASET: &str = include_str!("../data/questions.json");

#[derive(Debug, Deserialize)]
struct QuestionRecord {
    id: u64,
    question: String,
    answer: String,
}

/// Parse a JSON array of `{ "id", "question", "answer" }` records.
///
/// # Errors
///
/// Returns `DatasetError` if the JSON is malformed or the questions do not
/// form a valid bank.
pub fn parse_question_bank(json: &str) -> Result<QuestionBank, DatasetError> {
    let records: Vec<QuestionRecord> = serde_json::from_str(json)?;
    let questions = records
        .into_iter()
        .map(|record| Question::new(QuestionId::new(record.id), record.question, record.answer))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(QuestionBank::new(questions)?)
}

/// Load the bank from `path`, or the embedded dataset when `path` is `None`.
///
/// # Errors
///
/// Returns `DatasetError` if the file cannot be read or parsed.
pub fn load_question_bank(path: Option<&Path>) -> Result<QuestionBank, DatasetError> {
    let Some(path) = path else {
        return parse_question_bank(DEFAULT_DATASET);
    };
    let raw = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let bank = parse_question_bank(&raw)?;
    tracing::info!(path = %path.display(), questions = bank.len().get(), "loaded question file");
    Ok(bank)
}
