//! Draft generation — orchestrates the two-stage AI pipeline.
//!
//! Flow: validate topic → build prompt → text provider → parse sections →
//!       image provider → derive slug → keywords → assemble draft.
//!
//! All-or-nothing: a failure at the image stage discards the already
//! generated text. Nothing is persisted here — the caller decides whether
//! the draft becomes a post.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::generation::keywords::extract_keywords;
use crate::generation::prompts::{CONTENT_PROMPT_TEMPLATE, CONTENT_SYSTEM};
use crate::generation::sections::parse_sections;
use crate::generation::tone::{Length, Tone};
use crate::posts::slug::derive_slug;
use crate::providers::{ImageGenerator, TextGenerator};

/// Request body for draft generation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateDraftRequest {
    pub topic: String,
    #[serde(default)]
    pub tone: Tone,
    #[serde(default)]
    pub length: Length,
    pub target_audience: Option<String>,
    pub additional_instructions: Option<String>,
}

/// An assembled draft, returned to the caller and never persisted here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedDraft {
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub meta_description: String,
    pub image_url: String,
    pub slug: String,
    pub scheduled_date: DateTime<Utc>,
    pub suggested_keywords: Vec<String>,
}

/// Runs the full draft generation pipeline.
///
/// Two sequential provider round trips: the image call depends on the
/// `IMAGE_PROMPT` section of the text call, so there is nothing to
/// parallelize. Neither call is retried — failures surface to the caller.
pub async fn generate_draft(
    text_gen: &dyn TextGenerator,
    image_gen: &dyn ImageGenerator,
    request: GenerateDraftRequest,
) -> Result<GeneratedDraft, AppError> {
    let topic = request.topic.trim();
    if topic.is_empty() {
        return Err(AppError::Validation("topic is required".to_string()));
    }

    info!("Generating draft for topic: {topic}");

    let prompt = build_content_prompt(&request);
    let body = text_gen.generate_text(CONTENT_SYSTEM, &prompt).await?;

    let sections = parse_sections(&body)?;

    // Image generation only runs once the text response parsed cleanly, so a
    // malformed body never costs an image call.
    let image_url = image_gen.generate_image(&sections.image_prompt).await?;
    info!("Featured image generated for topic: {topic}");

    // Prefer the upstream-optimized title; slug derivation follows it.
    let title = sections.title.unwrap_or_else(|| topic.to_string());
    let slug = derive_slug(&title);

    let suggested_keywords = sections
        .keywords
        .unwrap_or_else(|| extract_keywords(&sections.content));

    Ok(GeneratedDraft {
        title,
        content: sections.content,
        excerpt: sections.excerpt,
        meta_description: sections.meta_description,
        image_url,
        slug,
        scheduled_date: Utc::now(),
        suggested_keywords,
    })
}

/// Fills the generation prompt template with the request's style directives.
fn build_content_prompt(request: &GenerateDraftRequest) -> String {
    let audience = request.target_audience.as_deref().unwrap_or("general");
    let additional = request
        .additional_instructions
        .as_deref()
        .map(|extra| format!("- Additional instructions: {extra}"))
        .unwrap_or_default();

    CONTENT_PROMPT_TEMPLATE
        .replace("{topic}", request.topic.trim())
        .replace("{tone_directive}", request.tone.directive())
        .replace("{length_directive}", &request.length.directive())
        .replace("{audience}", audience)
        .replace("{additional_instructions}", &additional)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
