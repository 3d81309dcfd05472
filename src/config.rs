use crate::Cli;

/// Which asset source the process runs against. Selected once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Development,
    Production,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Development => write!(f, "development"),
            Mode::Production => write!(f, "production"),
        }
    }
}

/// Effective bind address and mode, resolved once before any request is
/// served and immutable afterwards.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub mode: Mode,
}

impl ServerConfig {
    pub fn resolve(cli: &Cli) -> Self {
        Self {
            host: cli.host.clone(),
            port: resolve_port(cli.port, std::env::var("PORT").ok().as_deref()),
            mode: if cli.dev {
                Mode::Development
            } else {
                Mode::Production
            },
        }
    }

    /// Host suitable for printing a reachable URL; a wildcard bind is
    /// reported as loopback.
    pub fn display_host(&self) -> &str {
        if self.host == "0.0.0.0" || self.host.is_empty() {
            "127.0.0.1"
        } else {
            &self.host
        }
    }
}

/// `PORT` wins over the flag when it parses as a port number; otherwise the
/// flag value (default 3000) stands.
fn resolve_port(flag: u16, env_override: Option<&str>) -> u16 {
    match env_override.and_then(|v| v.parse().ok()) {
        Some(port) => port,
        None => flag,
    }
}
