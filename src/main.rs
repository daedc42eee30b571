//! MoodCart gateway entry point

use std::process::ExitCode;

use clap::Parser;

use moodcart::cli::{
    app::{load_merged_config, run_server, EXIT_ERROR, EXIT_SUCCESS},
    args::{Cli, Commands},
    config_cmd::handle_config_command,
    presenter::Presenter,
};
use moodcart::application::ports::ConfigStore;
use moodcart::infrastructure::XdgConfigStore;

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is not an error
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let presenter = Presenter::new();

    let store = match cli.config.clone() {
        Some(path) => XdgConfigStore::with_path(path),
        None => XdgConfigStore::new(),
    };

    if let Some(Commands::Config { action }) = cli.command {
        return match handle_config_command(action, &store, &presenter).await {
            Ok(()) => ExitCode::from(EXIT_SUCCESS),
            Err(e) => {
                presenter.config_error(&e, Some(store.path().as_path()));
                ExitCode::from(EXIT_ERROR)
            }
        };
    }

    let config = match load_merged_config(&store, cli.to_config()).await {
        Ok(config) => config,
        Err(e) => {
            presenter.config_error(&e, Some(store.path().as_path()));
            return ExitCode::from(EXIT_ERROR);
        }
    };

    run_server(config).await
}
