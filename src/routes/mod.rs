pub(crate) mod health;
mod spa;

use axum::Router;
use axum::routing::get;

use crate::server::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        // Liveness, handled before any path classification
        .route("/health", get(health::health))
        // Everything else: SPA entry document or static asset
        .fallback(spa::dispatch)
}
