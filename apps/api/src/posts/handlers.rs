//! Axum route handlers for post persistence and the public blog surface.
//!
//! Generic CRUD plumbing, kept deliberately thin: the interesting rules
//! (slug uniqueness, publish timestamps) live in `slug` and `lifecycle`.

use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::post::{PostRow, PostSummary};
use crate::posts::lifecycle::{publication_timestamp, PostStatus};
use crate::posts::slug::{derive_slug, resolve_unique_slug};
use crate::seo::analysis::word_count;
use crate::state::AppState;

/// Words-per-minute assumed when estimating reading time.
const READING_WPM: usize = 200;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Body for both create and update. The editor always sends the full post.
#[derive(Debug, Clone, Deserialize)]
pub struct SavePostRequest {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    /// Caller-supplied slug; derived from the title when absent.
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub featured_image: Option<String>,
    #[serde(default)]
    pub meta_title: Option<String>,
    #[serde(default)]
    pub meta_description: Option<String>,
    #[serde(default)]
    pub meta_keywords: Option<Vec<String>>,
    #[serde(default)]
    pub scheduled_for: Option<DateTime<Utc>>,
    #[serde(default)]
    pub status: PostStatus,
    #[serde(default)]
    pub category_id: Option<Uuid>,
    #[serde(default)]
    pub author_id: Option<Uuid>,
}

#[derive(Debug, Serialize)]
pub struct PostDetailResponse {
    pub post: PostRow,
    pub related: Vec<PostSummary>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/posts
///
/// Creates a post. The slug is resolved for uniqueness and `published_at`
/// is set when the post is born published.
pub async fn handle_create_post(
    State(state): State<AppState>,
    Json(request): Json<SavePostRequest>,
) -> Result<Json<PostRow>, AppError> {
    let candidate = slug_candidate(&request)?;
    let slug = resolve_unique_slug(&state.db, &candidate, None).await?;

    let now = Utc::now();
    let published_at = publication_timestamp(request.status, None, now);
    let reading_time = reading_time_minutes(&request.content);

    let post = sqlx::query_as::<_, PostRow>(
        r#"
        INSERT INTO posts
            (id, slug, title, content, excerpt, featured_image,
             meta_title, meta_description, meta_keywords, reading_time,
             status, scheduled_for, published_at, category_id, author_id)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&slug)
    .bind(request.title.trim())
    .bind(&request.content)
    .bind(&request.excerpt)
    .bind(&request.featured_image)
    .bind(&request.meta_title)
    .bind(&request.meta_description)
    .bind(&request.meta_keywords)
    .bind(reading_time)
    .bind(request.status.as_str())
    .bind(request.scheduled_for)
    .bind(published_at)
    .bind(request.category_id)
    .bind(request.author_id)
    .fetch_one(&state.db)
    .await?;

    info!("Created post {} (slug: {})", post.id, post.slug);
    Ok(Json(post))
}

/// PUT /api/v1/posts/:id
///
/// Full-replace update. The slug is re-resolved excluding this post, and
/// the first-publish timestamp survives every subsequent save.
pub async fn handle_update_post(
    State(state): State<AppState>,
    Path(post_id): Path<Uuid>,
    Json(request): Json<SavePostRequest>,
) -> Result<Json<PostRow>, AppError> {
    let existing = sqlx::query_as::<_, PostRow>("SELECT * FROM posts WHERE id = $1")
        .bind(post_id)
        .fetch_optional(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Post {post_id} not found")))?;

    let candidate = slug_candidate(&request)?;
    let slug = resolve_unique_slug(&state.db, &candidate, Some(post_id)).await?;

    let now = Utc::now();
    let published_at = publication_timestamp(request.status, existing.published_at, now);
    let reading_time = reading_time_minutes(&request.content);

    let post = sqlx::query_as::<_, PostRow>(
        r#"
        UPDATE posts SET
            slug = $2, title = $3, content = $4, excerpt = $5,
            featured_image = $6, meta_title = $7, meta_description = $8,
            meta_keywords = $9, reading_time = $10, status = $11,
            scheduled_for = $12, published_at = $13, category_id = $14,
            updated_at = $15
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(post_id)
    .bind(&slug)
    .bind(request.title.trim())
    .bind(&request.content)
    .bind(&request.excerpt)
    .bind(&request.featured_image)
    .bind(&request.meta_title)
    .bind(&request.meta_description)
    .bind(&request.meta_keywords)
    .bind(reading_time)
    .bind(request.status.as_str())
    .bind(request.scheduled_for)
    .bind(published_at)
    .bind(request.category_id)
    .bind(now)
    .fetch_one(&state.db)
    .await?;

    info!("Updated post {} (slug: {})", post.id, post.slug);
    Ok(Json(post))
}

/// GET /api/v1/posts
///
/// Admin listing: every post, newest first.
pub async fn handle_list_posts(
    State(state): State<AppState>,
) -> Result<Json<Vec<PostRow>>, AppError> {
    let posts = sqlx::query_as::<_, PostRow>("SELECT * FROM posts ORDER BY created_at DESC")
        .fetch_all(&state.db)
        .await?;

    Ok(Json(posts))
}

/// GET /api/v1/blog/:slug
///
/// Public point lookup by slug, with up to three related published posts
/// from the same category, newest published first.
pub async fn handle_get_post_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<PostDetailResponse>, AppError> {
    let post = sqlx::query_as::<_, PostRow>("SELECT * FROM posts WHERE slug = $1")
        .bind(&slug)
        .fetch_optional(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No post with slug '{slug}'")))?;

    let related = match post.category_id {
        Some(category_id) => {
            sqlx::query_as::<_, PostSummary>(
                r#"
                SELECT id, slug, title, excerpt, featured_image, published_at
                FROM posts
                WHERE category_id = $1 AND status = 'published' AND slug <> $2
                ORDER BY published_at DESC
                LIMIT 3
                "#,
            )
            .bind(category_id)
            .bind(&slug)
            .fetch_all(&state.db)
            .await?
        }
        None => Vec::new(),
    };

    Ok(Json(PostDetailResponse { post, related }))
}

/// GET /sitemap.xml
///
/// Renders a sitemap of all published posts under the configured base URL.
pub async fn handle_sitemap(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let slugs: Vec<(String,)> =
        sqlx::query_as("SELECT slug FROM posts WHERE status = 'published'")
            .fetch_all(&state.db)
            .await?;

    let xml = render_sitemap(
        &state.config.site_base_url,
        slugs.iter().map(|(s,)| s.as_str()),
    );

    Ok(([(header::CONTENT_TYPE, "application/xml")], xml))
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

/// Picks the slug candidate: the caller's slug when present, otherwise
/// derived from the title. Either way the result must be non-empty.
fn slug_candidate(request: &SavePostRequest) -> Result<String, AppError> {
    if request.title.trim().is_empty() {
        return Err(AppError::Validation("title is required".to_string()));
    }
    if request.content.trim().is_empty() {
        return Err(AppError::Validation("content is required".to_string()));
    }

    let candidate = match request.slug.as_deref().map(str::trim) {
        Some(slug) if !slug.is_empty() => derive_slug(slug),
        _ => derive_slug(&request.title),
    };

    if candidate.is_empty() {
        return Err(AppError::Validation(
            "title must contain at least one alphanumeric character".to_string(),
        ));
    }

    Ok(candidate)
}

/// Estimated reading time in minutes at 200 wpm, rounded up.
fn reading_time_minutes(content: &str) -> i32 {
    word_count(content).div_ceil(READING_WPM) as i32
}

fn render_sitemap<'a>(base_url: &str, slugs: impl Iterator<Item = &'a str>) -> String {
    let base_url = base_url.trim_end_matches('/');
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    xml.push_str(&format!(
        "  <url>\n    <loc>{base_url}</loc>\n    <changefreq>daily</changefreq>\n    <priority>1.0</priority>\n  </url>\n"
    ));
    xml.push_str(&format!(
        "  <url>\n    <loc>{base_url}/blog</loc>\n    <changefreq>daily</changefreq>\n    <priority>0.8</priority>\n  </url>\n"
    ));
    for slug in slugs {
        xml.push_str(&format!(
            "  <url>\n    <loc>{base_url}/blog/{slug}</loc>\n    <changefreq>weekly</changefreq>\n    <priority>0.7</priority>\n  </url>\n"
        ));
    }
    xml.push_str("</urlset>\n");
    xml
}

#[cfg(test)]
mod tests {
    use super::*;

    fn save_request(title: &str, content: &str, slug: Option<&str>) -> SavePostRequest {
        SavePostRequest {
            title: title.to_string(),
            content: content.to_string(),
            excerpt: None,
            slug: slug.map(String::from),
            featured_image: None,
            meta_title: None,
            meta_description: None,
            meta_keywords: None,
            scheduled_for: None,
            status: PostStatus::Draft,
            category_id: None,
            author_id: None,
        }
    }

    #[test]
    fn test_slug_candidate_prefers_caller_slug() {
        let request = save_request("A Title", "body", Some("Custom Slug"));
        assert_eq!(slug_candidate(&request).unwrap(), "custom-slug");
    }

    #[test]
    fn test_slug_candidate_derives_from_title() {
        let request = save_request("English Idioms, Explained!", "body", None);
        assert_eq!(slug_candidate(&request).unwrap(), "english-idioms-explained");
    }

    #[test]
    fn test_slug_candidate_ignores_blank_caller_slug() {
        let request = save_request("A Title", "body", Some("   "));
        assert_eq!(slug_candidate(&request).unwrap(), "a-title");
    }

    #[test]
    fn test_slug_candidate_rejects_empty_title() {
        let request = save_request("  ", "body", None);
        assert!(matches!(
            slug_candidate(&request),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_slug_candidate_rejects_empty_content() {
        let request = save_request("A Title", "", None);
        assert!(matches!(
            slug_candidate(&request),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_slug_candidate_rejects_symbol_only_title() {
        let request = save_request("!!!", "body", None);
        assert!(matches!(
            slug_candidate(&request),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_reading_time_rounds_up() {
        let content = vec!["word"; 201].join(" ");
        assert_eq!(reading_time_minutes(&content), 2);
    }

    #[test]
    fn test_reading_time_exact_page() {
        let content = vec!["word"; 400].join(" ");
        assert_eq!(reading_time_minutes(&content), 2);
    }

    #[test]
    fn test_reading_time_empty_content_is_zero() {
        assert_eq!(reading_time_minutes(""), 0);
    }

    #[test]
    fn test_sitemap_lists_root_blog_and_posts() {
        let xml = render_sitemap(
            "https://example.com/",
            ["first-post", "second-post"].into_iter(),
        );
        assert!(xml.starts_with("<?xml version=\"1.0\""));
        assert!(xml.contains("<loc>https://example.com</loc>"));
        assert!(xml.contains("<loc>https://example.com/blog</loc>"));
        assert!(xml.contains("<loc>https://example.com/blog/first-post</loc>"));
        assert!(xml.contains("<loc>https://example.com/blog/second-post</loc>"));
        assert!(xml.trim_end().ends_with("</urlset>"));
    }

    #[test]
    fn test_sitemap_without_posts_still_lists_static_urls() {
        let xml = render_sitemap("https://example.com", std::iter::empty::<&str>());
        assert_eq!(xml.matches("<url>").count(), 2);
    }
}
