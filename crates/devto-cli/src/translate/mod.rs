pub(crate) mod error;
pub(crate) mod front_matter;
pub(crate) mod processor;
pub(crate) mod translator;

pub use error::{Result as TranslateErrorResult, TranslateError};
pub use front_matter::ArticleFrontMatter;
pub use processor::{ArticleProcessor, RunSummary, TranslatedArticle};
pub use translator::Translator;
