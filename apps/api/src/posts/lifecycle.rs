//! Post status state machine.
//!
//! Two states, `draft` and `published`. `published_at` records the *first*
//! publish and is never cleared or overwritten afterwards — unpublishing and
//! republishing keep the original timestamp. `scheduled_for` is advisory
//! metadata only; no activation job lives in this service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    #[default]
    Draft,
    Published,
}

impl PostStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            PostStatus::Draft => "draft",
            PostStatus::Published => "published",
        }
    }
}

/// Computes the `published_at` value for a save with the given target status.
///
/// Set exactly once: on the first transition to published. Every other save,
/// including unpublish, carries the existing value through unchanged.
pub fn publication_timestamp(
    status: PostStatus,
    existing: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> Option<DateTime<Utc>> {
    match (status, existing) {
        (PostStatus::Published, None) => Some(now),
        (_, existing) => existing,
    }
}
