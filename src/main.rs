mod assets;
mod classify;
mod config;
mod error;
mod routes;
mod server;


use clap::Parser;
use config::{Mode, ServerConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "ui-server",
    about = "Serves the UI Generator single-page application",
    version,
    after_help = "\
Environment:
  PORT    bind port; overrides --port when set

Examples:
  ui-server                  # embedded assets on port 3000
  ui-server --port 8080      # embedded assets on port 8080
  ui-server --dev            # serve from the local dist/ directory
  PORT=5000 ui-server        # port from the environment"
)]
struct Cli {
    /// Port to listen on
    #[arg(long, default_value_t = 3000)]
    port: u16,

    /// Address to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Development mode: serve assets from the local dist/ directory
    /// instead of the copy embedded in the binary
    #[arg(long)]
    dev: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    print_banner();
    init_tracing();

    let config = ServerConfig::resolve(&cli);

    let assets = match assets::AssetSource::from_mode(config.mode) {
        Ok(assets) => assets,
        Err(e) => {
            eprintln!("Error: {e}");
            if config.mode == Mode::Development {
                eprintln!("Run the frontend build (`npm run build`) to populate dist/ first.");
            }
            std::process::exit(1);
        }
    };

    if let Err(e) = server::run(config, assets).await {
        tracing::error!("server error: {e}");
        std::process::exit(1);
    }
}

fn print_banner() {
    let cyan = "\x1b[36m";
    let dim = "\x1b[2m";
    let reset = "\x1b[0m";

    eprintln!();
    eprintln!("{cyan}  UI Generator{reset}");
    eprintln!(
        "{dim}  SPA asset server v{version}{reset}",
        version = env!("CARGO_PKG_VERSION"),
    );
    eprintln!();
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
