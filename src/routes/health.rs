use axum::Json;
use serde::Serialize;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const BUILD_ID: &str = env!("UI_SERVER_BUILD_ID");

/// Field order is the wire format:
/// `{"status":"ok","version":"...","build":"..."}`.
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
    pub build: &'static str,
}

/// GET /health
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        version: VERSION,
        build: BUILD_ID,
    })
}
