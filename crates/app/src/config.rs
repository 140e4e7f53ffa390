use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use thiserror::Error;

#[derive(Debug, Parser)]
#[command(name = "app", version, about = "Flashcard quiz with self-grading and saved progress")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub config: ConfigArgs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Open the quiz window (default)
    Ui,
    /// Print the saved progress summary and exit
    Stats,
}

#[derive(Debug, Clone, Args)]
pub struct ConfigArgs {
    /// SQLite database holding saved progress
    #[arg(long = "db", env = "QUIZ_DB_URL", default_value = "sqlite:quiz.sqlite3", global = true)]
    pub db_url: String,

    /// JSON file with the questions; the built-in set is used when omitted
    #[arg(long, env = "QUIZ_QUESTIONS", global = true)]
    pub questions: Option<PathBuf>,

    /// Window and page title
    #[arg(long, env = "QUIZ_TITLE", default_value = "Hard Problems Quiz", global = true)]
    pub title: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid --db value: {raw:?}")]
    InvalidDbUrl { raw: String },
    #[error("no database at {}; run the quiz once to create it", path.display())]
    MissingDatabase { path: PathBuf },
    #[error("could not create database file {}", path.display())]
    CreateDatabase {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub db_url: String,
    pub questions: Option<PathBuf>,
    pub title: String,
}

impl AppConfig {
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidDbUrl` for a blank database URL.
    pub fn from_args(args: ConfigArgs, cwd: &Path) -> Result<Self, ConfigError> {
        if args.db_url.trim().is_empty() {
            return Err(ConfigError::InvalidDbUrl { raw: args.db_url });
        }
        Ok(Self {
            db_url: normalize_sqlite_url(&args.db_url, cwd),
            questions: args.questions,
            title: args.title,
        })
    }
}

/// Turn `quiz.sqlite3`, `sqlite:quiz.sqlite3` or an absolute path into a
/// `sqlite://` URL with an absolute path.
pub fn normalize_sqlite_url(raw: &str, cwd: &Path) -> String {
    let trimmed = raw.trim();
    if trimmed == "sqlite::memory:" || trimmed.starts_with("sqlite://") {
        return trimmed.to_string();
    }

    let path_str = trimmed.strip_prefix("sqlite:").unwrap_or(trimmed);
    let path = Path::new(path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    };
    format!("sqlite://{}", absolute.display())
}

/// Filesystem path behind a normalized `sqlite://` URL, `None` for in-memory.
fn sqlite_file_path(db_url: &str) -> Result<Option<PathBuf>, ConfigError> {
    if db_url == "sqlite::memory:" {
        return Ok(None);
    }

    let invalid = || ConfigError::InvalidDbUrl {
        raw: db_url.to_string(),
    };
    let path = db_url.strip_prefix("sqlite://").ok_or_else(invalid)?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(invalid());
    }
    Ok(Some(PathBuf::from(path)))
}

/// Make sure the database file and its parent directory exist.
///
/// # Errors
///
/// Returns an error for an unusable URL or if the file cannot be created.
pub fn prepare_sqlite_file(db_url: &str) -> Result<(), ConfigError> {
    let Some(path) = sqlite_file_path(db_url)? else {
        return Ok(());
    };
    let create_err = |source| ConfigError::CreateDatabase {
        path: path.clone(),
        source,
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(create_err)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(&path)
            .map_err(create_err)?;
        tracing::info!(path = %path.display(), "created database file");
    }

    Ok(())
}

/// Check that the database file already exists, without creating anything.
///
/// # Errors
///
/// Returns `ConfigError::MissingDatabase` when the file is absent.
pub fn require_sqlite_file(db_url: &str) -> Result<(), ConfigError> {
    match sqlite_file_path(db_url)? {
        Some(path) if !path.is_file() => Err(ConfigError::MissingDatabase { path }),
        _ => Ok(()),
    }
}
