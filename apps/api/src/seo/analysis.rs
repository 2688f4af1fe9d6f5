//! SEO analysis engine — pure, bit-reproducible metrics over post fields.
//!
//! The output is advisory only: nothing on the post entity depends on it,
//! and the whole report can be recomputed or discarded at any time. The
//! readability score is delegated to an external analysis pass persisted in
//! the seo_analysis table; this engine merely merges it into the report.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::post::SeoAnalysisRow;

/// Post fields the engine reads. Mirrors what the editor holds in memory —
/// analysis runs against unsaved edits, not the stored row.
#[derive(Debug, Clone, Deserialize)]
pub struct SeoInput {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub meta_description: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// One optimization checklist entry: a boundary check plus the literal
/// current value, so the UI can show both verdict and context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub label: String,
    pub passed: bool,
    pub current: String,
}

/// The full advisory report rendered next to the editor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeoReport {
    /// Readability score from the persisted advisory record, 0 when absent.
    pub overall_score: i32,
    pub keyword_density: f64,
    pub word_count: usize,
    pub internal_links_count: i32,
    pub external_links_count: i32,
    pub checklist: Vec<ChecklistItem>,
    pub suggestions: Option<Value>,
}

/// Counts whitespace-delimited non-empty tokens.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Density of one keyword among whitespace tokens, as a percentage.
/// Exact token equality after lowercasing both sides; zero for empty text.
pub fn keyword_density(text: &str, keyword: &str) -> f64 {
    let keyword = keyword.to_lowercase();
    let lowered = text.to_lowercase();
    let mut total = 0usize;
    let mut matches = 0usize;

    for token in lowered.split_whitespace() {
        total += 1;
        if token == keyword {
            matches += 1;
        }
    }

    if total == 0 {
        return 0.0;
    }
    (matches as f64 / total as f64) * 100.0
}

/// Computes the advisory report for a post, merging the persisted analysis
/// record when one exists. Never fails: missing or degenerate inputs produce
/// zero counts, not errors.
pub fn analyze(input: &SeoInput, record: Option<&SeoAnalysisRow>) -> SeoReport {
    // Intentional simplification carried over from the original product:
    // only the first keyword drives the density metric, even though the
    // full list is accepted and counted by the checklist.
    let density = input
        .keywords
        .first()
        .map(|keyword| keyword_density(&input.content, keyword))
        .unwrap_or(0.0);

    let words = word_count(&input.content);
    let title_len = input.title.chars().count();
    let description_len = input.meta_description.chars().count();

    let checklist = vec![
        ChecklistItem {
            label: "Title length (40-60 characters)".to_string(),
            passed: (40..=60).contains(&title_len),
            current: format!("{title_len} characters"),
        },
        ChecklistItem {
            label: "Meta description length (120-160 characters)".to_string(),
            passed: (120..=160).contains(&description_len),
            current: format!("{description_len} characters"),
        },
        ChecklistItem {
            label: "Keywords defined".to_string(),
            passed: input.keywords.len() >= 3,
            current: format!("{} keywords", input.keywords.len()),
        },
        ChecklistItem {
            label: "Minimum content length (300 words)".to_string(),
            passed: words >= 300,
            current: format!("{words} words"),
        },
    ];

    SeoReport {
        overall_score: record.and_then(|r| r.readability_score).unwrap_or(0),
        keyword_density: density,
        word_count: words,
        internal_links_count: record.and_then(|r| r.internal_links_count).unwrap_or(0),
        external_links_count: record.and_then(|r| r.external_links_count).unwrap_or(0),
        checklist,
        suggestions: record.and_then(|r| r.suggestions.clone()),
    }
}
