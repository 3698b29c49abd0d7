use serde::{Deserialize, Serialize};

const TEMPLATE_TITLE: &str = "Template";
const TEMPLATE_BODY_MARKDOWN: &str = "Body";
const TEMPLATE_TAGS: [&str; 2] = ["tag1", "tag2"];

/// Request body of `POST /api/articles`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticlePayload {
    pub article: Article,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub body_markdown: String,
    pub published: bool,
    pub tags: Vec<String>,
}

impl ArticlePayload {
    /// The draft article posted by `create-post-devto`. Always the same value.
    pub fn template() -> Self {
        Self {
            article: Article {
                title: String::from(TEMPLATE_TITLE),
                body_markdown: String::from(TEMPLATE_BODY_MARKDOWN),
                published: false,
                tags: TEMPLATE_TAGS.iter().map(|t| t.to_string()).collect(),
            },
        }
    }
}
