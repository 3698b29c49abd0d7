use crate::translate::front_matter::read_markdown;
use crate::{
    ArticleProcessor, CliClientResult, ClientError, RunSummary, TranslateError, Translator,
};

use std::path::Path;

use async_trait::async_trait;
use serde_yaml::Value;
use tempfile::TempDir;

/// Wraps text in brackets
struct BracketTranslator;

#[async_trait]
impl Translator for BracketTranslator {
    async fn translate(&self, text: &str) -> CliClientResult<String> {
        Ok(format!("[{}]", text))
    }
}

/// Fails on any text containing "boom"
struct FailingTranslator;

#[async_trait]
impl Translator for FailingTranslator {
    async fn translate(&self, text: &str) -> CliClientResult<String> {
        if text.contains("boom") {
            return Err(ClientError::api_error(456, String::from("Quota exceeded")));
        }
        Ok(text.to_uppercase())
    }
}

fn write(dir: &Path, name: &str, contents: &str) {
    std::fs::write(dir.join(name), contents).unwrap();
}

#[tokio::test]
async fn process_article_translates_title_description_and_body() {
    let temp = TempDir::new().unwrap();
    write(
        temp.path(),
        "post.md",
        "---\ntitle: タイトル\ndescription: 説明\ntags: [rust]\npublished: false\ncover_image: c.png\n---\n本文\n",
    );
    let processor = ArticleProcessor::new(BracketTranslator);

    let article = processor
        .process_article(&temp.path().join("post.md"))
        .await
        .unwrap();

    assert_eq!(article.front_matter.title, "[タイトル]");
    assert_eq!(article.front_matter.description.as_deref(), Some("[説明]"));
    assert_eq!(article.front_matter.published, Some(Value::Bool(false)));
    assert!(article.front_matter.tags.is_some());
    assert_eq!(article.body, "[本文\n]");
}

#[tokio::test]
async fn process_article_without_optional_keys_leaves_them_out() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "post.md", "---\ntitle: t\n---\nbody\n");
    let processor = ArticleProcessor::new(BracketTranslator);

    let article = processor
        .process_article(&temp.path().join("post.md"))
        .await
        .unwrap();

    assert!(article.front_matter.description.is_none());
    assert!(article.front_matter.tags.is_none());
    assert!(article.front_matter.published.is_none());
}

#[tokio::test]
async fn process_article_without_title_fails() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "post.md", "---\ndescription: d\n---\nbody\n");
    let processor = ArticleProcessor::new(BracketTranslator);

    let err = processor
        .process_article(&temp.path().join("post.md"))
        .await
        .unwrap_err();

    assert!(matches!(err, TranslateError::MissingTitle));
}

#[tokio::test]
async fn process_article_translation_failure_is_client_error() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "post.md", "---\ntitle: boom\n---\nbody\n");
    let processor = ArticleProcessor::new(FailingTranslator);

    let err = processor
        .process_article(&temp.path().join("post.md"))
        .await
        .unwrap_err();

    assert!(matches!(err, TranslateError::Client(ClientError::Api { status: 456, .. })));
}

#[tokio::test]
async fn process_article_missing_file_is_io_error() {
    let temp = TempDir::new().unwrap();
    let processor = ArticleProcessor::new(BracketTranslator);

    let err = processor
        .process_article(&temp.path().join("absent.md"))
        .await
        .unwrap_err();

    assert!(matches!(err, TranslateError::Io { .. }));
}

#[tokio::test]
async fn save_article_creates_output_directory() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "post.md", "---\ntitle: t\ntags: [a, b]\n---\nbody\n");
    let processor = ArticleProcessor::new(BracketTranslator);
    let article = processor
        .process_article(&temp.path().join("post.md"))
        .await
        .unwrap();
    let dest = temp.path().join("out/nested/post.md");

    processor.save_article(&dest, &article).unwrap();

    let written = std::fs::read_to_string(dest).unwrap();
    assert!(written.starts_with("---\n"));
    assert!(written.ends_with("---\n\n[body\n]\n"));
    let document = read_markdown(&written).unwrap();
    assert_eq!(document.front_matter.title.as_deref(), Some("[t]"));
    assert_eq!(document.front_matter.tags, article.front_matter.tags);
}

#[tokio::test]
async fn process_dir_skips_existing_and_ignores_other_files() {
    let temp = TempDir::new().unwrap();
    let source = temp.path().join("articles");
    let output = temp.path().join("translate");
    std::fs::create_dir_all(&source).unwrap();
    std::fs::create_dir_all(&output).unwrap();
    write(&source, "a.md", "---\ntitle: a\n---\nA\n");
    write(&source, "b.md", "---\ntitle: b\n---\nB\n");
    write(&source, "notes.txt", "not markdown");
    write(&output, "b.md", "already translated");

    let processor = ArticleProcessor::new(BracketTranslator);
    let summary = processor.process_dir(&source, &output).await.unwrap();

    assert_eq!(
        summary,
        RunSummary {
            translated: 1,
            skipped: 1,
            failed: 0
        }
    );
    assert!(output.join("a.md").exists());
    assert!(!output.join("notes.txt").exists());
    assert_eq!(
        std::fs::read_to_string(output.join("b.md")).unwrap(),
        "already translated"
    );
}

#[tokio::test]
async fn process_dir_continues_after_a_failure() {
    let temp = TempDir::new().unwrap();
    let source = temp.path().join("articles");
    let output = temp.path().join("translate");
    std::fs::create_dir_all(&source).unwrap();
    write(&source, "1-bad.md", "---\ntitle: boom\n---\nx\n");
    write(&source, "2-no-front-matter.md", "just text\n");
    write(&source, "3-good.md", "---\ntitle: fine\n---\nok\n");

    let processor = ArticleProcessor::new(FailingTranslator);
    let summary = processor.process_dir(&source, &output).await.unwrap();

    assert_eq!(summary.translated, 1);
    assert_eq!(summary.failed, 2);
    assert!(!output.join("1-bad.md").exists());
    assert!(output.join("3-good.md").exists());
}

#[tokio::test]
async fn process_dir_missing_source_dir_fails() {
    let temp = TempDir::new().unwrap();
    let processor = ArticleProcessor::new(BracketTranslator);

    let result = processor
        .process_dir(&temp.path().join("nope"), &temp.path().join("out"))
        .await;

    assert!(matches!(result, Err(TranslateError::Io { .. })));
}
