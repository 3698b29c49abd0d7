//! translate-articles - translate Markdown articles with DeepL
//!
//! Every `articles/*.md` without a counterpart in `translate/` is translated
//! (title, description and body) and written there with its front matter.
//!
//! # Examples
//!
//! ```bash
//! DEEPL_API_KEY=... translate-articles
//! translate-articles --source-dir posts --output-dir posts-en --target-lang EN-GB
//! ```

use devto_cli::{ArticleProcessor, DeepLClient, TranslateCli, logger};
use devto_config::Config;

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use log::info;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = TranslateCli::parse();

    // Load .env file if present (development)
    let _ = dotenvy::dotenv();

    let config = match load_config(&cli) {
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

    let auth_key = std::env::var(&config.deepl.api_key_var).unwrap_or_default();
    if auth_key.is_empty() {
        eprintln!("Error: ${} is not set", config.deepl.api_key_var);
        return ExitCode::FAILURE;
    }

    let translator = DeepLClient::new(
        config.deepl.base_url.as_deref(),
        &auth_key,
        &config.deepl.target_lang,
    );
    info!("Translating with {} into {}", translator.base_url, translator.target_lang);

    let processor = ArticleProcessor::new(translator);
    let result = processor
        .process_dir(
            Path::new(&config.translate.source_dir),
            Path::new(&config.translate.output_dir),
        )
        .await;

    match result {
        Ok(summary) => {
            println!(
                "Translated {}, skipped {}, failed {}",
                summary.translated, summary.skipped, summary.failed
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn load_config(cli: &TranslateCli) -> devto_config::ConfigErrorResult<Config> {
    let mut config = Config::load()?;
    cli.apply_to(&mut config);
    config.validate()?;
    Ok(config)
}
