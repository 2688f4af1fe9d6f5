//! Keyword extraction fallback — used when the model response carries no
//! KEYWORDS section.

use std::collections::HashMap;

/// Common words that never make useful keywords.
const STOP_WORDS: [&str; 11] = [
    "the", "and", "or", "but", "in", "on", "at", "to", "for", "a", "an",
];

/// Number of keywords suggested for a generated draft.
const KEYWORD_LIMIT: usize = 10;

/// Extracts the top keywords from article content by frequency.
///
/// Tokenizes on non-word-character boundaries, lowercases, drops tokens of
/// length <= 3 and stop words, then ranks by descending frequency. Ties keep
/// first-encountered order (stable sort), so the result is deterministic for
/// a given input.
pub fn extract_keywords(content: &str) -> Vec<String> {
    let lowered = content.to_lowercase();

    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();

    for token in lowered.split(|c: char| !(c.is_alphanumeric() || c == '_')) {
        if token.len() <= 3 || STOP_WORDS.contains(&token) {
            continue;
        }
        let count = counts.entry(token).or_insert(0);
        if *count == 0 {
            order.push(token);
        }
        *count += 1;
    }

    order.sort_by(|a, b| counts[b].cmp(&counts[a]));

    order
        .into_iter()
        .take(KEYWORD_LIMIT)
        .map(String::from)
        .collect()
}
