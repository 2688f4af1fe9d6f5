//! Style parameters — tone and length class, mapped to prompt directives.
//!
//! These are interpolated into the generation prompt as instructions; nothing
//! validates the model actually honored them. Enum membership is the only
//! validation — an unknown value is rejected at deserialization.

use serde::{Deserialize, Serialize};

/// Tone of voice for the generated article.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Professional,
    Casual,
    Humorous,
    Formal,
    Technical,
}

impl Tone {
    pub fn directive(self) -> &'static str {
        match self {
            Tone::Professional => "a professional, authoritative tone",
            Tone::Casual => "a relaxed, conversational tone",
            Tone::Humorous => "a light, humorous tone with occasional wit",
            Tone::Formal => "a formal, precise tone",
            Tone::Technical => "a technical, detail-oriented tone",
        }
    }
}

/// Length class for the generated article, each mapped to an explicit
/// target word-count range the prompt asks the model to hit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Length {
    Short,
    #[default]
    Medium,
    Long,
}

impl Length {
    /// Target (min, max) word counts. Short ~500, medium ~1000, long ~2000.
    pub fn word_range(self) -> (u32, u32) {
        match self {
            Length::Short => (400, 600),
            Length::Medium => (800, 1200),
            Length::Long => (1600, 2400),
        }
    }

    pub fn directive(self) -> String {
        let (min, max) = self.word_range();
        format!("between {min} and {max} words")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_deserializes_lowercase() {
        let tone: Tone = serde_json::from_str(r#""humorous""#).unwrap();
        assert_eq!(tone, Tone::Humorous);
    }

    #[test]
    fn test_unknown_tone_is_rejected() {
        let result: Result<Tone, _> = serde_json::from_str(r#""sarcastic""#);
        assert!(result.is_err(), "unknown tone values must fail to parse");
    }

    #[test]
    fn test_tone_default_is_professional() {
        assert_eq!(Tone::default(), Tone::Professional);
    }

    #[test]
    fn test_length_deserializes_lowercase() {
        let length: Length = serde_json::from_str(r#""long""#).unwrap();
        assert_eq!(length, Length::Long);
    }

    #[test]
    fn test_unknown_length_is_rejected() {
        let result: Result<Length, _> = serde_json::from_str(r#""epic""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_length_default_is_medium() {
        assert_eq!(Length::default(), Length::Medium);
    }

    #[test]
    fn test_word_ranges_do_not_overlap() {
        let (_, s_max) = Length::Short.word_range();
        let (m_min, m_max) = Length::Medium.word_range();
        let (l_min, _) = Length::Long.word_range();
        assert!(s_max <= m_min);
        assert!(m_max <= l_min);
    }

    #[test]
    fn test_length_directive_names_both_bounds() {
        let d = Length::Medium.directive();
        assert!(d.contains("800"));
        assert!(d.contains("1200"));
    }
}
