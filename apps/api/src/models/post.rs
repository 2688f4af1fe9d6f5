use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// A row of the posts table — the central entity.
///
/// `status` is stored as text and constrained to "draft"/"published" by the
/// schema; `posts::lifecycle::PostStatus` is the typed view at the API edge.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PostRow {
    pub id: Uuid,
    pub slug: String,
    pub title: String,
    pub content: String,
    pub excerpt: Option<String>,
    pub featured_image: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub meta_keywords: Option<Vec<String>>,
    pub seo_score: Option<i32>,
    pub readability_score: Option<i32>,
    pub keyword_density: Option<f64>,
    pub reading_time: Option<i32>,
    pub status: String,
    pub scheduled_for: Option<DateTime<Utc>>,
    pub published_at: Option<DateTime<Utc>>,
    pub category_id: Option<Uuid>,
    pub author_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A row of the seo_analysis side table — advisory, recomputable, keyed by
/// post. Never authoritative for anything on the post itself.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SeoAnalysisRow {
    pub id: Uuid,
    pub post_id: Uuid,
    pub readability_score: Option<i32>,
    pub internal_links_count: Option<i32>,
    pub external_links_count: Option<i32>,
    pub keyword_density: Option<f64>,
    pub suggestions: Option<Value>,
    pub analyzed_at: Option<DateTime<Utc>>,
}

/// Compact projection used by related-post lookups and public listings.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PostSummary {
    pub id: Uuid,
    pub slug: String,
    pub title: String,
    pub excerpt: Option<String>,
    pub featured_image: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
}
