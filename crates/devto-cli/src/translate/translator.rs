use crate::CliClientResult;

use async_trait::async_trait;

/// Something that can translate a piece of text into a fixed target language
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, text: &str) -> CliClientResult<String>;
}
