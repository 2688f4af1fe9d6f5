// All prompt constants for the draft generation pipeline.

/// System prompt for article generation.
pub const CONTENT_SYSTEM: &str = "You are an expert blog writer and SEO specialist.";

/// Article generation prompt template.
/// Replace: {topic}, {tone_directive}, {length_directive}, {audience},
///          {additional_instructions}
///
/// The labeled-section format below is a contract: `sections::parse_sections`
/// locates each label in order and slices the text between them. TITLE and
/// KEYWORDS are optional in the response; the other four are required.
pub const CONTENT_PROMPT_TEMPLATE: &str = r#"Create a comprehensive blog post about "{topic}" with the following specifications:
- Write in {tone_directive}
- Target length: {length_directive}
- Target audience: {audience}
- Include a compelling excerpt (max 160 characters)
- Structure the content with proper markdown headings (H2, H3)
- Include bullet points for key takeaways
- Optimize for SEO with relevant keywords
- Include a detailed meta description
- Suggest an image prompt that captures the essence of the post
{additional_instructions}

Format the response in this exact structure:
TITLE:
[SEO-optimized title here]

EXCERPT:
[excerpt here]

META_DESCRIPTION:
[meta description here]

IMAGE_PROMPT:
[image generation prompt here]

CONTENT:
[main content here]

KEYWORDS:
[comma-separated keywords here]"#;
