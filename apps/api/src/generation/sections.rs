//! Labeled-section parser for the text provider's response body.
//!
//! The generation prompt instructs the model to answer in a fixed section
//! format (`TITLE:`, `EXCERPT:`, `META_DESCRIPTION:`, `IMAGE_PROMPT:`,
//! `CONTENT:`, `KEYWORDS:`). Each section runs from the end of its label to
//! the start of the next label found in the body, or end-of-string.
//!
//! EXCERPT, META_DESCRIPTION, IMAGE_PROMPT and CONTENT are required; a
//! missing one fails the whole parse. Downstream SEO checks depend on real
//! content, so empty-string substitution is never acceptable here.

use crate::errors::AppError;

const LABELS: [&str; 6] = [
    "TITLE:",
    "EXCERPT:",
    "META_DESCRIPTION:",
    "IMAGE_PROMPT:",
    "CONTENT:",
    "KEYWORDS:",
];

const REQUIRED: [&str; 4] = ["EXCERPT:", "META_DESCRIPTION:", "IMAGE_PROMPT:", "CONTENT:"];

/// Structured sections extracted from one completion body.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedSections {
    /// Upstream-optimized title, when the model supplied one.
    pub title: Option<String>,
    pub excerpt: String,
    pub meta_description: String,
    pub image_prompt: String,
    pub content: String,
    /// Comma-separated keyword list, when the model supplied one.
    pub keywords: Option<Vec<String>>,
}

/// Parses the labeled sections out of a completion body.
///
/// Fails with `MalformedResponse` naming the first missing required label.
pub fn parse_sections(body: &str) -> Result<ParsedSections, AppError> {
    // Locate every label that actually appears, ordered by position.
    let mut found: Vec<(&str, usize)> = LABELS
        .iter()
        .filter_map(|&label| body.find(label).map(|pos| (label, pos)))
        .collect();
    found.sort_by_key(|&(_, pos)| pos);

    let section = |label: &str| -> Option<String> {
        let idx = found.iter().position(|&(l, _)| l == label)?;
        let (_, pos) = found[idx];
        let start = pos + label.len();
        let end = found
            .get(idx + 1)
            .map(|&(_, next)| next)
            .unwrap_or(body.len());
        Some(body[start..end].trim().to_string())
    };

    for label in REQUIRED {
        if !found.iter().any(|&(l, _)| l == label) {
            return Err(AppError::MalformedResponse(format!(
                "response is missing the {} section",
                label.trim_end_matches(':')
            )));
        }
    }

    let keywords = section("KEYWORDS:").map(|raw| {
        raw.split(',')
            .map(|k| k.trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect::<Vec<String>>()
    });

    Ok(ParsedSections {
        title: section("TITLE:").filter(|t| !t.is_empty()),
        excerpt: section("EXCERPT:").unwrap_or_default(),
        meta_description: section("META_DESCRIPTION:").unwrap_or_default(),
        image_prompt: section("IMAGE_PROMPT:").unwrap_or_default(),
        content: section("CONTENT:").unwrap_or_default(),
        keywords: keywords.filter(|k| !k.is_empty()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_BODY: &str = "TITLE:\nLearning English Fast\n\nEXCERPT:\nA quick guide.\n\nMETA_DESCRIPTION:\nEverything you need to know about learning English quickly and well.\n\nIMAGE_PROMPT:\nA stack of colorful books on a desk\n\nCONTENT:\n## Why it matters\n\nEnglish opens doors.\n\nKEYWORDS:\nenglish, learning, fluency";

    const MINIMAL_BODY: &str = "EXCERPT:\nA quick guide.\n\nMETA_DESCRIPTION:\nA description.\n\nIMAGE_PROMPT:\nBooks on a desk\n\nCONTENT:\nBody text here.";

    #[test]
    fn test_parses_all_six_sections() {
        let parsed = parse_sections(FULL_BODY).unwrap();
        assert_eq!(parsed.title.as_deref(), Some("Learning English Fast"));
        assert_eq!(parsed.excerpt, "A quick guide.");
        assert!(parsed.meta_description.starts_with("Everything you need"));
        assert_eq!(parsed.image_prompt, "A stack of colorful books on a desk");
        assert!(parsed.content.contains("English opens doors."));
        assert_eq!(
            parsed.keywords,
            Some(vec![
                "english".to_string(),
                "learning".to_string(),
                "fluency".to_string()
            ])
        );
    }

    #[test]
    fn test_parses_without_optional_sections() {
        let parsed = parse_sections(MINIMAL_BODY).unwrap();
        assert!(parsed.title.is_none());
        assert!(parsed.keywords.is_none());
        assert_eq!(parsed.content, "Body text here.");
    }

    #[test]
    fn test_content_runs_to_end_of_string_when_last() {
        let parsed = parse_sections(MINIMAL_BODY).unwrap();
        assert_eq!(parsed.content, "Body text here.");
    }

    #[test]
    fn test_missing_content_section_fails() {
        let body = "EXCERPT:\na\n\nMETA_DESCRIPTION:\nb\n\nIMAGE_PROMPT:\nc";
        let err = parse_sections(body).unwrap_err();
        match err {
            AppError::MalformedResponse(msg) => assert!(msg.contains("CONTENT")),
            other => panic!("expected MalformedResponse, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_excerpt_section_fails() {
        let body = "META_DESCRIPTION:\nb\n\nIMAGE_PROMPT:\nc\n\nCONTENT:\nd";
        let err = parse_sections(body).unwrap_err();
        match err {
            AppError::MalformedResponse(msg) => assert!(msg.contains("EXCERPT")),
            other => panic!("expected MalformedResponse, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_body_fails() {
        assert!(parse_sections("").is_err());
    }

    #[test]
    fn test_sections_are_trimmed() {
        let body = "EXCERPT:\n   padded   \n\nMETA_DESCRIPTION:\nb\n\nIMAGE_PROMPT:\nc\n\nCONTENT:\nd";
        let parsed = parse_sections(body).unwrap();
        assert_eq!(parsed.excerpt, "padded");
    }

    #[test]
    fn test_keyword_list_is_lowercased_and_trimmed() {
        let body = format!("{MINIMAL_BODY}\n\nKEYWORDS:\n English , GRAMMAR,fluency ");
        let parsed = parse_sections(&body).unwrap();
        assert_eq!(
            parsed.keywords,
            Some(vec![
                "english".to_string(),
                "grammar".to_string(),
                "fluency".to_string()
            ])
        );
    }

    #[test]
    fn test_empty_keywords_section_treated_as_absent() {
        let body = format!("{MINIMAL_BODY}\n\nKEYWORDS:\n");
        let parsed = parse_sections(&body).unwrap();
        assert!(parsed.keywords.is_none());
    }

    #[test]
    fn test_blank_title_treated_as_absent() {
        let body = format!("TITLE:\n\n{MINIMAL_BODY}");
        let parsed = parse_sections(&body).unwrap();
        assert!(parsed.title.is_none());
    }
}
