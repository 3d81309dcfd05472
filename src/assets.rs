use std::borrow::Cow;
use std::path::{Component, Path, PathBuf};

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum::response::{IntoResponse, Response};
use rust_embed::Embed;
use tower::ServiceExt;
use tower_http::services::ServeDir;
use tracing::info;

use crate::config::Mode;
use crate::error::AppError;

/// Frontend build output compiled into the binary.
#[derive(Embed)]
#[folder = "dist"]
struct BundledAssets;

/// Where static bytes come from: the local `dist/` directory (development,
/// reads hit the filesystem so edits are visible without a restart) or the
/// resource table embedded at build time (production, single self-contained
/// artifact). Exactly one variant is constructed per process; request
/// handling never branches on mode again.
pub enum AssetSource {
    Directory(DirectorySource),
    Embedded(EmbeddedSource),
}

impl AssetSource {
    pub fn from_mode(mode: Mode) -> Result<Self, AppError> {
        match mode {
            Mode::Development => Ok(Self::Directory(DirectorySource::new("dist")?)),
            Mode::Production => Ok(Self::Embedded(EmbeddedSource::new()?)),
        }
    }

    /// Full contents of the asset at `logical`, or `None` when the path
    /// does not resolve inside the root. Paths escaping the root resolve
    /// as `None`, never as a file outside it.
    pub async fn read(&self, logical: &str) -> Option<Cow<'static, [u8]>> {
        match self {
            Self::Directory(dir) => dir.read(logical).await.map(Cow::Owned),
            Self::Embedded(bundle) => bundle.read(logical),
        }
    }

    /// Generic file serving for the exact request path: content-type from
    /// the file extension, 404 when the path does not resolve.
    pub async fn serve(&self, req: Request<Body>) -> Response {
        match self {
            Self::Directory(dir) => dir.serve(req).await,
            Self::Embedded(bundle) => bundle.serve(req.uri().path()),
        }
    }
}

/// Serves from a filesystem directory, resolved at each call.
#[derive(Debug)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    /// Fails when the root is not an existing directory: development mode
    /// requires a prior frontend build, and a missing root must stop the
    /// process before any socket is bound.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, AppError> {
        let root = root.into();
        if !root.is_dir() {
            return Err(AppError::Config(format!(
                "asset directory not found: {}",
                root.display()
            )));
        }
        info!(root = %root.display(), "serving assets from local directory");
        Ok(Self { root })
    }

    async fn read(&self, logical: &str) -> Option<Vec<u8>> {
        let rel = sanitize(logical)?;
        tokio::fs::read(self.root.join(rel)).await.ok()
    }

    /// `ServeDir` handles streaming, content-type, conditional and range
    /// requests, and rejects traversal outside the root.
    async fn serve(&self, req: Request<Body>) -> Response {
        match ServeDir::new(&self.root).oneshot(req).await {
            Ok(resp) => resp.into_response(),
            Err(infallible) => match infallible {},
        }
    }
}

/// Serves from the resource table embedded at build time; immutable for the
/// process lifetime, so concurrent reads need no synchronization.
pub struct EmbeddedSource;

impl EmbeddedSource {
    /// Fails when the embedded table holds no assets at all: production
    /// cannot start without its bundle.
    pub fn new() -> Result<Self, AppError> {
        if BundledAssets::iter().next().is_none() {
            return Err(AppError::Config(
                "embedded asset bundle is empty; rebuild with a populated dist/".into(),
            ));
        }
        info!("serving assets embedded in the binary");
        Ok(Self)
    }

    fn read(&self, logical: &str) -> Option<Cow<'static, [u8]>> {
        BundledAssets::get(logical.trim_start_matches('/')).map(|file| file.data)
    }

    fn serve(&self, path: &str) -> Response {
        let logical = path.trim_start_matches('/');
        match BundledAssets::get(logical) {
            Some(file) => {
                let mime = mime_guess::from_path(logical).first_or_octet_stream();
                (
                    StatusCode::OK,
                    [(header::CONTENT_TYPE, mime.as_ref())],
                    file.data,
                )
                    .into_response()
            }
            None => StatusCode::NOT_FOUND.into_response(),
        }
    }
}

/// A logical path is only usable relative to the root: no parent-directory
/// components, no absolute paths.
fn sanitize(logical: &str) -> Option<&Path> {
    let rel = Path::new(logical.trim_start_matches('/'));
    if rel
        .components()
        .all(|c| matches!(c, Component::Normal(_)))
    {
        Some(rel)
    } else {
        None
    }
}
