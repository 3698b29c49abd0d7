//! devto-cli library
//!
//! Exports the dev.to and DeepL HTTP clients, the fixed article payload and
//! the article translator for the binaries and the integration tests.

pub(crate) mod article;
pub(crate) mod cli;
pub(crate) mod client;
pub mod logger;
pub(crate) mod output;
pub(crate) mod translate;


pub use article::{Article, ArticlePayload};
pub use cli::{Cli, TranslateCli};
pub use client::{ArticleResponse, CliClientResult, Client, ClientError, DeepLClient};
pub use output::write_body;
pub use translate::{
    ArticleFrontMatter, ArticleProcessor, RunSummary, TranslateError, TranslateErrorResult,
    TranslatedArticle, Translator,
};
