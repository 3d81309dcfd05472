use axum::body::Body;
use axum::extract::State;
use axum::http::{HeaderValue, Request, StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::classify::{PathClass, classify};
use crate::server::AppState;

const INDEX_DOCUMENT: &str = "index.html";

/// Fallback handler for every path except `/health`: classifies the request
/// path, then serves either the SPA entry document or the addressed file
/// from the active asset source.
pub async fn dispatch(State(state): State<AppState>, req: Request<Body>) -> Response {
    let resp = match classify(req.uri().path()) {
        PathClass::SpaEntry => serve_entry(&state).await,
        // No API namespace exists yet; /api paths take the same file-serving
        // path as any other asset and normally 404.
        PathClass::StaticAsset | PathClass::ApiOrOther => state.assets.serve(req).await,
    };
    with_security_headers(resp)
}

/// Serve the SPA entry document, or 404 when the bundle lacks one.
async fn serve_entry(state: &AppState) -> Response {
    match state.assets.read(INDEX_DOCUMENT).await {
        Some(bytes) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
            bytes,
        )
            .into_response(),
        None => (StatusCode::NOT_FOUND, "page not found").into_response(),
    }
}

/// Fixed headers on every dispatcher response, success and 404 alike.
/// `/health` does not pass through here.
fn with_security_headers(mut resp: Response) -> Response {
    let headers = resp.headers_mut();
    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));
    headers.insert(
        header::X_XSS_PROTECTION,
        HeaderValue::from_static("1; mode=block"),
    );
    resp
}
