/// Startup-time failures. Request handling never produces these: a path
/// that does not resolve is answered with an HTTP 404 by the dispatcher,
/// not surfaced as an error.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
