//! Slug derivation and uniqueness resolution.
//!
//! Derivation is pure and idempotent; uniqueness is a point lookup against
//! the posts table followed by a timestamp suffix on collision. The
//! check-then-act window between lookup and insert is not transactional —
//! two concurrent creations with the same candidate could both pass. The
//! posts table carries a unique constraint on `slug`, so the loser of that
//! race surfaces as a database error rather than silent duplication.

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;

/// Derives a URL slug from a title: lowercase, every maximal run of
/// non-alphanumeric characters collapsed to a single hyphen, no leading or
/// trailing hyphen. Idempotent — an already-slugified string maps to itself.
pub fn derive_slug(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;

    for c in title.chars() {
        let c = c.to_ascii_lowercase();
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

/// Resolves a candidate slug to one that is unique among all posts.
///
/// When another post (not the one being edited) already owns the candidate,
/// a unix-millisecond suffix is appended. The suffixed value is not
/// re-checked — a second collision within the same millisecond is not a
/// realistic event at this system's scale.
pub async fn resolve_unique_slug(
    pool: &PgPool,
    candidate: &str,
    exclude_id: Option<Uuid>,
) -> Result<String, AppError> {
    let existing: Option<(Uuid,)> = sqlx::query_as("SELECT id FROM posts WHERE slug = $1")
        .bind(candidate)
        .fetch_optional(pool)
        .await?;

    Ok(disambiguate(
        candidate,
        existing.map(|(id,)| id),
        exclude_id,
        Utc::now().timestamp_millis(),
    ))
}

/// Pure collision decision: the candidate survives unless a *different* post
/// already owns it.
fn disambiguate(
    candidate: &str,
    owner: Option<Uuid>,
    exclude_id: Option<Uuid>,
    now_millis: i64,
) -> String {
    match owner {
        None => candidate.to_string(),
        Some(id) if Some(id) == exclude_id => candidate.to_string(),
        Some(_) => format!("{candidate}-{now_millis}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_slug_spec_example() {
        assert_eq!(derive_slug("Hello, World!  Foo"), "hello-world-foo");
    }

    #[test]
    fn test_derive_slug_lowercases() {
        assert_eq!(derive_slug("Learning English FAST"), "learning-english-fast");
    }

    #[test]
    fn test_derive_slug_collapses_runs() {
        assert_eq!(derive_slug("a --- b !!! c"), "a-b-c");
    }

    #[test]
    fn test_derive_slug_trims_edge_hyphens() {
        assert_eq!(derive_slug("...tips..."), "tips");
    }

    #[test]
    fn test_derive_slug_keeps_digits() {
        assert_eq!(derive_slug("Top 10 Idioms of 2025"), "top-10-idioms-of-2025");
    }

    #[test]
    fn test_derive_slug_is_idempotent() {
        let inputs = [
            "Hello, World!  Foo",
            "Top 10 Idioms of 2025",
            "...tips...",
            "already-a-slug",
        ];
        for input in inputs {
            let once = derive_slug(input);
            assert_eq!(derive_slug(&once), once, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn test_derive_slug_charset() {
        let slug = derive_slug("Weird  ~~ Input @@@ 42 ### end?");
        assert!(slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
        assert!(!slug.starts_with('-'));
        assert!(!slug.ends_with('-'));
    }

    #[test]
    fn test_derive_slug_all_symbols_yields_empty() {
        assert_eq!(derive_slug("!!!"), "");
    }

    #[test]
    fn test_disambiguate_no_collision_keeps_candidate() {
        assert_eq!(disambiguate("my-post", None, None, 1_700_000_000_000), "my-post");
    }

    #[test]
    fn test_disambiguate_self_collision_keeps_candidate() {
        let id = Uuid::new_v4();
        assert_eq!(
            disambiguate("my-post", Some(id), Some(id), 1_700_000_000_000),
            "my-post"
        );
    }

    #[test]
    fn test_disambiguate_foreign_collision_appends_millis() {
        let resolved = disambiguate(
            "my-post",
            Some(Uuid::new_v4()),
            Some(Uuid::new_v4()),
            1_700_000_000_000,
        );
        assert_eq!(resolved, "my-post-1700000000000");
    }

    #[test]
    fn test_disambiguate_collision_without_exclusion_appends_millis() {
        let resolved = disambiguate("my-post", Some(Uuid::new_v4()), None, 42);
        assert!(resolved.starts_with("my-post-"));
        assert!(resolved["my-post-".len()..].chars().all(|c| c.is_ascii_digit()));
    }
}
