use crate::translate::front_matter::{ArticleFrontMatter, read_markdown, write_markdown};
use crate::{TranslateError, TranslateErrorResult, Translator};

use std::path::{Path, PathBuf};

use log::{error, info};

/// A translated article, ready to be written out
#[derive(Debug, Clone, PartialEq)]
pub struct TranslatedArticle {
    pub front_matter: ArticleFrontMatter,
    pub body: String,
}

/// Outcome counts of one directory run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub translated: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Translates Markdown articles (front matter and body) one file at a time
pub struct ArticleProcessor<T> {
    translator: T,
}

impl<T: Translator> ArticleProcessor<T> {
    pub fn new(translator: T) -> Self {
        Self { translator }
    }

    /// Translate one article.
    ///
    /// `title` is required and translated, `description` is translated when
    /// present, `tags` and `published` are copied. Other keys are dropped.
    pub async fn process_article(
        &self,
        src_path: &Path,
    ) -> TranslateErrorResult<TranslatedArticle> {
        info!("Processing {}...", src_path.display());

        let input =
            std::fs::read_to_string(src_path).map_err(|e| TranslateError::io(src_path, e))?;
        let document = read_markdown(&input)?;
        let source = document.front_matter;

        let title = source.title.ok_or(TranslateError::MissingTitle)?;
        let title = self.translator.translate(&title).await?;

        let description = match source.description {
            Some(ref description) => Some(self.translator.translate(description).await?),
            None => None,
        };

        info!("Translating content...");
        let body = self.translator.translate(&document.body).await?;
        info!("Translation completed.");

        Ok(TranslatedArticle {
            front_matter: ArticleFrontMatter {
                title,
                description,
                tags: source.tags,
                published: source.published,
            },
            body,
        })
    }

    /// Write a translated article, creating parent directories as needed.
    pub fn save_article(
        &self,
        dest_path: &Path,
        article: &TranslatedArticle,
    ) -> TranslateErrorResult<()> {
        if let Some(parent) = dest_path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| TranslateError::io(parent, e))?;
        }

        let contents = write_markdown(&article.front_matter, &article.body)?;
        std::fs::write(dest_path, contents).map_err(|e| TranslateError::io(dest_path, e))?;

        info!("Saved translated article to: {}", dest_path.display());
        Ok(())
    }

    /// Translate every `*.md` file of `source_dir` into `output_dir`.
    ///
    /// Files already present in `output_dir` are skipped. A failing file is
    /// logged and counted; the run carries on with the next one. Only an
    /// unreadable `source_dir` fails the whole run.
    pub async fn process_dir(
        &self,
        source_dir: &Path,
        output_dir: &Path,
    ) -> TranslateErrorResult<RunSummary> {
        let mut summary = RunSummary::default();

        for src_path in markdown_files(source_dir)? {
            let Some(file_name) = src_path.file_name() else {
                continue;
            };
            let dest_path = output_dir.join(file_name);

            if dest_path.exists() {
                info!("Translation already exists: {}", dest_path.display());
                summary.skipped += 1;
                continue;
            }

            let result = self
                .process_article(&src_path)
                .await
                .and_then(|article| self.save_article(&dest_path, &article));

            match result {
                Ok(()) => summary.translated += 1,
                Err(e) => {
                    error!("Error processing {}: {}", src_path.display(), e);
                    summary.failed += 1;
                }
            }
        }

        Ok(summary)
    }
}

/// `*.md` files directly inside `dir`, sorted by path
fn markdown_files(dir: &Path) -> TranslateErrorResult<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|e| TranslateError::io(dir, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| TranslateError::io(dir, e))?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "md") {
            files.push(path);
        }
    }
    files.sort();

    Ok(files)
}
