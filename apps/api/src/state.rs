use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::providers::{ImageGenerator, TextGenerator};

/// Shared application state injected into all route handlers via Axum extractors.
///
/// The generation providers are trait objects so tests (and alternative
/// vendors) can substitute a compliant backend without touching handler code.
/// In production both point at the same `OpenAiClient`.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub text_gen: Arc<dyn TextGenerator>,
    pub image_gen: Arc<dyn ImageGenerator>,
    pub config: Config,
}
