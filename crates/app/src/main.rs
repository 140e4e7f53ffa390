use std::sync::Arc;

use clap::Parser;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quiz_core::model::ProgressMap;
use services::{QuizLoopService, QuizServices, load_question_bank};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

mod config;

use config::{AppConfig, Cli, Command, prepare_sqlite_file, require_sqlite_file};

struct DesktopApp {
    title: String,
    initial_progress: ProgressMap,
    quiz_loop: Arc<QuizLoopService>,
}

impl UiApp for DesktopApp {
    fn title(&self) -> String {
        self.title.clone()
    }

    fn initial_progress(&self) -> ProgressMap {
        self.initial_progress.clone()
    }

    fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let cwd = std::env::current_dir()?;
    let config = AppConfig::from_args(cli.config, &cwd)?;
    let command = cli.command.unwrap_or(Command::Ui);

    let bank = Arc::new(load_question_bank(config.questions.as_deref())?);
    tracing::info!(questions = bank.len().get(), db = %config.db_url, "question bank loaded");

    // Open + migrate SQLite at startup. Keep this in the binary glue so core/services stay pure.
    // `stats` only reads, so it never creates a database for a mistyped path.
    match command {
        Command::Ui => prepare_sqlite_file(&config.db_url)?,
        Command::Stats => require_sqlite_file(&config.db_url)?,
    }
    let quiz_loop = QuizServices::new_sqlite(&config.db_url, Arc::clone(&bank))
        .await?
        .quiz_loop();
    let progress = quiz_loop.load_progress().await;

    match command {
        Command::Ui => {
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
                title: config.title.clone(),
                initial_progress: progress,
                quiz_loop,
            });
            let context = build_app_context(&app);

            // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title(config.title)
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::Stats => {
            println!("{}", progress.stats().summary(bank.len().get()));
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() {
    init_tracing();
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
