//! ExamScribe CLI entry point

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use exam_scribe::cli::{
    app::{load_merged_config, run_clear, run_session, run_show, EXIT_ERROR},
    args::{Cli, Commands, RunOptions},
    config_cmd::handle_config_command,
    presenter::Presenter,
};
use exam_scribe::domain::config::AppConfig;
use exam_scribe::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let presenter = Presenter::new();

    // Handle subcommands
    match cli.command {
        Some(Commands::Config { action }) => {
            let store = XdgConfigStore::new();
            if let Err(e) = handle_config_command(action, &store, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            return ExitCode::SUCCESS;
        }
        Some(Commands::Show) => {
            let options = resolve_options(cli.data_path, false).await;
            return run_show(options).await;
        }
        Some(Commands::Clear) => {
            let options = resolve_options(cli.data_path, false).await;
            return run_clear(options).await;
        }
        None => {}
    }

    let options = resolve_options(cli.data_path, cli.listen).await;
    run_session(options).await
}

async fn resolve_options(data_path: Option<String>, listen: bool) -> RunOptions {
    // Build CLI config from args
    let cli_config = AppConfig {
        data_path,
        auto_listen: if listen { Some(true) } else { None },
    };

    let config = load_merged_config(cli_config).await;

    RunOptions {
        data_path: config.data_path.clone(),
        auto_listen: config.auto_listen_or_default(),
    }
}
