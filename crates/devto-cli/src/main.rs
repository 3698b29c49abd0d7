//! create-post-devto - post a draft article to dev.to
//!
//! Sends the fixed template article to `POST /api/articles` with the key from
//! `$DEV_TO_GIT_TOKEN` and prints the raw response body.
//!
//! # Examples
//!
//! ```bash
//! DEV_TO_GIT_TOKEN=... create-post-devto
//! ```

use devto_cli::{ArticlePayload, Cli, Client, logger, write_body};
use devto_config::Config;

use std::process::ExitCode;

use clap::Parser;
use log::warn;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let _cli = Cli::parse();

    // Load .env file if present (development)
    let _ = dotenvy::dotenv();

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = logger::initialize(config.logging.level, config.logging.colored) {
        eprintln!("Error: failed to initialize logger: {}", e);
        return ExitCode::FAILURE;
    }
    config.log_summary();

    let client = Client::from_config(&config);

    let response = match client.create_article(&ArticlePayload::template()).await {
        Ok(response) => response,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // The exit code never depends on the status; surface it on stderr only
    if !response.status.is_success() {
        warn!("dev.to answered {}; printing the response body as-is", response.status);
    }

    match write_body(&mut std::io::stdout().lock(), &response.body) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error writing response: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn load_config() -> devto_config::ConfigErrorResult<Config> {
    let config = Config::load()?;
    config.devto.validate()?;
    Ok(config)
}
