use clap::Parser;

/// `create-post-devto` takes no options beyond --help and --version.
#[derive(Parser, Debug)]
#[command(name = "create-post-devto")]
#[command(about = "Create a draft article on dev.to and print the API response")]
#[command(
    long_about = "Create a draft article on dev.to and print the API response.\n\n\
    The API key is read from $DEV_TO_GIT_TOKEN. The raw response body is \
    written to stdout whatever the HTTP status."
)]
#[command(version)]
pub struct Cli {}

#[derive(Parser, Debug)]
#[command(name = "translate-articles")]
#[command(about = "Translate Markdown articles with DeepL")]
#[command(version)]
pub struct TranslateCli {
    /// Directory containing the source *.md articles (default: articles)
    #[arg(long)]
    pub source_dir: Option<String>,

    /// Directory the translated articles are written to (default: translate)
    #[arg(long)]
    pub output_dir: Option<String>,

    /// DeepL target language code (default: EN-US)
    #[arg(long)]
    pub target_lang: Option<String>,
}

impl TranslateCli {
    /// Apply explicit flags on top of the loaded configuration.
    pub fn apply_to(&self, config: &mut devto_config::Config) {
        if let Some(ref dir) = self.source_dir {
            config.translate.source_dir = dir.clone();
        }
        if let Some(ref dir) = self.output_dir {
            config.translate.output_dir = dir.clone();
        }
        if let Some(ref lang) = self.target_lang {
            config.deepl.target_lang = lang.clone();
        }
    }
}
