use crate::{TranslateError, TranslateErrorResult};

use serde::{Deserialize, Serialize};
use serde_yaml::Value;

/// Front matter keys the translator understands. Anything else is dropped.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct SourceFrontMatter {
    pub title: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Value>,
    pub published: Option<Value>,
}

/// Front matter written next to a translated body.
///
/// `tags` and `published` are carried over untouched, whatever their YAML shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArticleFrontMatter {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<Value>,
}

#[derive(Debug)]
pub(crate) struct MarkdownDocument {
    pub front_matter: SourceFrontMatter,
    pub body: String,
}

/// Read Markdown with YAML front matter.
pub(crate) fn read_markdown(input: &str) -> TranslateErrorResult<MarkdownDocument> {
    let input = input.strip_prefix('\u{feff}').unwrap_or(input);
    let (front_matter, body) = split_yaml_front_matter(input)?;

    let front_matter = if front_matter.trim().is_empty() {
        SourceFrontMatter::default()
    } else {
        let yaml_value: Value = serde_yaml::from_str(front_matter)?;
        if !matches!(yaml_value, Value::Mapping(_)) {
            return Err(TranslateError::FrontMatterNotMapping);
        }
        serde_yaml::from_value(yaml_value)?
    };

    Ok(MarkdownDocument {
        front_matter,
        body: body.trim_start_matches(['\n', '\r']).to_string(),
    })
}

/// Write Markdown with YAML front matter, a blank line, then the body.
pub(crate) fn write_markdown(
    front_matter: &ArticleFrontMatter,
    body: &str,
) -> TranslateErrorResult<String> {
    let mut out = String::new();
    out.push_str("---\n");
    let yaml = serde_yaml::to_string(front_matter)?;
    out.push_str(&yaml);
    if !yaml.ends_with('\n') {
        out.push('\n');
    }
    out.push_str("---\n\n");
    out.push_str(body);
    if !body.ends_with('\n') {
        out.push('\n');
    }
    Ok(out)
}

fn split_yaml_front_matter(input: &str) -> TranslateErrorResult<(&str, &str)> {
    let mut chunks = input.split_inclusive('\n');

    let first = chunks.next().ok_or(TranslateError::MissingFrontMatter)?;
    let first_line = first.trim_end_matches(['\n', '\r']);
    if first_line != "---" {
        return Err(TranslateError::MissingFrontMatter);
    }

    let mut offset = first.len();

    for chunk in chunks {
        let line = chunk.trim_end_matches(['\n', '\r']);
        if line == "---" {
            let front = &input[first.len()..offset];
            let body = &input[offset + chunk.len()..];
            return Ok((front, body));
        }
        offset += chunk.len();
    }

    Err(TranslateError::UnterminatedFrontMatter)
}
