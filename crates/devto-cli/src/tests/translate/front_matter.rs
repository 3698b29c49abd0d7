use crate::TranslateError;
use crate::translate::front_matter::{ArticleFrontMatter, read_markdown, write_markdown};

use serde_yaml::Value;

#[test]
fn reads_front_matter_and_body() {
    let input = "---\ntitle: 記事\ndescription: 説明\ntags: [rust, cli]\npublished: true\n---\n# 見出し\n本文\n";

    let document = read_markdown(input).expect("parse");

    assert_eq!(document.front_matter.title.as_deref(), Some("記事"));
    assert_eq!(document.front_matter.description.as_deref(), Some("説明"));
    assert_eq!(document.front_matter.published, Some(Value::Bool(true)));
    assert!(document.front_matter.tags.is_some());
    assert_eq!(document.body, "# 見出し\n本文\n");
}

#[test]
fn unknown_keys_are_ignored() {
    let input = "---\ntitle: t\ncover_image: x.png\nseries: s\n---\nbody\n";

    let document = read_markdown(input).expect("parse");

    assert_eq!(document.front_matter.title.as_deref(), Some("t"));
}

#[test]
fn tolerates_bom_and_crlf() {
    let input = "\u{feff}---\r\ntitle: t\r\n---\r\nbody\r\n";

    let document = read_markdown(input).expect("parse");

    assert_eq!(document.front_matter.title.as_deref(), Some("t"));
    assert_eq!(document.body, "body\r\n");
}

#[test]
fn leading_blank_lines_of_body_are_dropped() {
    let document = read_markdown("---\ntitle: t\n---\n\n\nbody\n").expect("parse");
    assert_eq!(document.body, "body\n");
}

#[test]
fn empty_front_matter_has_no_title() {
    let document = read_markdown("---\n---\nbody\n").expect("parse");
    assert!(document.front_matter.title.is_none());
}

#[test]
fn rejects_missing_front_matter() {
    let err = read_markdown("# No front matter").unwrap_err();
    assert!(matches!(err, TranslateError::MissingFrontMatter));
}

#[test]
fn rejects_empty_input() {
    let err = read_markdown("").unwrap_err();
    assert!(matches!(err, TranslateError::MissingFrontMatter));
}

#[test]
fn rejects_unterminated_front_matter() {
    let err = read_markdown("---\ntitle: t\nbody\n").unwrap_err();
    assert!(matches!(err, TranslateError::UnterminatedFrontMatter));
}

#[test]
fn rejects_non_mapping_front_matter() {
    let err = read_markdown("---\n- a\n- b\n---\nbody\n").unwrap_err();
    assert!(matches!(err, TranslateError::FrontMatterNotMapping));
}

#[test]
fn rejects_invalid_yaml() {
    let err = read_markdown("---\ntitle: [unclosed\n---\nbody\n").unwrap_err();
    assert!(matches!(err, TranslateError::Yaml { .. }));
}

#[test]
fn writes_front_matter_blank_line_and_body() {
    let front_matter = ArticleFrontMatter {
        title: String::from("Title"),
        description: None,
        tags: None,
        published: Some(Value::Bool(false)),
    };

    let out = write_markdown(&front_matter, "Body").expect("write");

    assert_eq!(out, "---\ntitle: Title\npublished: false\n---\n\nBody\n");
}

#[test]
fn written_document_reads_back() {
    let front_matter = ArticleFrontMatter {
        title: String::from("Title"),
        description: Some(String::from("Desc")),
        tags: Some(Value::String(String::from("rust, cli"))),
        published: None,
    };

    let out = write_markdown(&front_matter, "# Heading\n").expect("write");
    let document = read_markdown(&out).expect("parse");

    assert_eq!(document.front_matter.title.as_deref(), Some("Title"));
    assert_eq!(document.front_matter.description.as_deref(), Some("Desc"));
    assert_eq!(
        document.front_matter.tags,
        Some(Value::String(String::from("rust, cli")))
    );
    assert_eq!(document.body, "# Heading\n");
}
