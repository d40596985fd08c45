//! Main app runners: interactive session, show, clear

use std::env;
use std::process::ExitCode;

use tokio::sync::mpsc;

use crate::application::ports::{ConfigStore, PresentationSink};
use crate::application::{DictationSession, SessionOptions, TranscriptStore};
use crate::domain::config::AppConfig;
use crate::infrastructure::{ConsoleSink, JsonFileStorage, XdgConfigStore};

use super::args::RunOptions;
use super::console::{read_loop, ConsoleInput};
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Run the interactive dictation session until `:quit` or EOF.
pub async fn run_session(options: RunOptions) -> ExitCode {
    let presenter = Presenter::new();

    let input = ConsoleInput::new();
    let listening = input.listening_flag();
    let store = TranscriptStore::new(storage_for(&options));
    let mut session = DictationSession::new(input, ConsoleSink::new(), store);

    let (tx, rx) = mpsc::channel(32);
    let reader = tokio::spawn(read_loop(tx, listening));

    presenter.info("Dictation session started; :help lists commands");
    session
        .run(
            rx,
            SessionOptions {
                auto_listen: options.auto_listen,
            },
        )
        .await;
    reader.abort();

    presenter.info(&format!(
        "Session ended with {} entries",
        session.store().entries().len()
    ));
    ExitCode::from(EXIT_SUCCESS)
}

/// Render the stored transcript once and exit.
pub async fn run_show(options: RunOptions) -> ExitCode {
    let presenter = Presenter::new();
    let mut store = TranscriptStore::new(storage_for(&options));
    store.hydrate().await;

    let sink = ConsoleSink::new();
    if let Err(e) = sink.render(store.entries()).await {
        presenter.error(&e.to_string());
        return ExitCode::from(EXIT_ERROR);
    }
    ExitCode::from(EXIT_SUCCESS)
}

/// Delete the stored transcript.
pub async fn run_clear(options: RunOptions) -> ExitCode {
    let presenter = Presenter::new();
    let mut store = TranscriptStore::new(storage_for(&options));
    store.hydrate().await;

    match store.clear().await {
        Ok(()) => {
            presenter.success("Transcript cleared");
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn storage_for(options: &RunOptions) -> JsonFileStorage {
    match options.data_path.as_deref() {
        Some(path) => JsonFileStorage::with_path(path),
        None => JsonFileStorage::new(),
    }
}

/// Load and merge configuration from file, env, and CLI
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = store.load().await.unwrap_or_else(|_| AppConfig::empty());

    // Build env config
    let env_config = AppConfig {
        data_path: env::var("EXAM_SCRIBE_DATA_PATH").ok().filter(|s| !s.is_empty()),
        ..Default::default()
    };

    // Merge: defaults < file < env < cli
    AppConfig::defaults()
        .merge(file_config)
        .merge(env_config)
        .merge(cli_config)
}
