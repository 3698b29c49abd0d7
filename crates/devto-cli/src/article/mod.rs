pub(crate) mod article_payload;

pub use article_payload::{Article, ArticlePayload};
