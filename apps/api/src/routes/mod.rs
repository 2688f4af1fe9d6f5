pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::generation::handlers as generation;
use crate::posts::handlers as posts;
use crate::seo::handlers as seo;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Generation API
        .route("/api/v1/posts/generate", post(generation::handle_generate))
        // Posts API (admin editor)
        .route(
            "/api/v1/posts",
            post(posts::handle_create_post).get(posts::handle_list_posts),
        )
        .route("/api/v1/posts/:id", put(posts::handle_update_post))
        // SEO API
        .route("/api/v1/seo/analyze", post(seo::handle_analyze))
        // Public blog surface
        .route("/api/v1/blog/:slug", get(posts::handle_get_post_by_slug))
        .route("/sitemap.xml", get(posts::handle_sitemap))
        .with_state(state)
}
