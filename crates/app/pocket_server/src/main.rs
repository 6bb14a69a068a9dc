//! Pocket Joe server binary.
//!
//! Serves `GET /`, `GET /api/hello`, `GET /health` and the MCP endpoint at
//! `/mcp` on a single listener.

use clap::Parser;
use pocket_api::config::{
    ALLOWED_ORIGINS_ENV, AllowedOrigins, ApiConfig, ConfigError, HOST_ENV, PORT_ENV,
};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// CLI arguments for the server.
///
/// Values are handed to [`ApiConfig::from_lookup`] so flags and the
/// environment go through the same parsing and defaults.
#[derive(Parser, Debug)]
#[command(name = "pocket_server", version, about = "Pocket Joe REST + MCP server")]
struct Args {
    /// Interface to bind [default: 127.0.0.1].
    #[arg(long, env = HOST_ENV)]
    host: Option<String>,

    /// Port to listen on, 0 for ephemeral [default: 8000].
    #[arg(long, env = PORT_ENV)]
    port: Option<String>,

    /// Comma-separated origins allowed by CORS. Unset or `*` allows any origin.
    ///
    /// Restrict this to your frontend's origin in production.
    #[arg(long, env = ALLOWED_ORIGINS_ENV)]
    allowed_origins: Option<String>,
}

impl Args {
    fn api_config(&self) -> Result<ApiConfig, ConfigError> {
        ApiConfig::from_lookup(|key| match key {
            HOST_ENV => self.host.clone(),
            PORT_ENV => self.port.clone(),
            ALLOWED_ORIGINS_ENV => self.allowed_origins.clone(),
            _ => None,
        })
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,pocket_api=debug,pocket_mcp=debug".into()),
        )
        .init();

    let args = Args::parse();
    let config = args.api_config()?;

    match &config.allowed_origins {
        AllowedOrigins::Any => {
            warn!("CORS allows any origin; set ALLOWED_ORIGINS to restrict it in production")
        }
        AllowedOrigins::List(origins) => info!(?origins, "CORS restricted"),
    }

    let ct = CancellationToken::new();
    let app = pocket_api::router(&config, pocket_core::hello_world, ct.clone());

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    let local_addr = listener.local_addr()?;
    info!(
        addr = %local_addr,
        version = pocket_core::version(),
        "Pocket Joe server listening"
    );

    let shutdown = {
        let ct = ct.clone();
        async move {
            tokio::select! {
                _ = tokio::signal::ctrl_c() => info!("ctrl-c received, shutting down"),
                _ = ct.cancelled() => {}
            }
            // Close open MCP streams so graceful shutdown can finish.
            ct.cancel();
        }
    };

    pocket_api::serve(listener, app, shutdown).await?;
    info!("server stopped");

    Ok(())
}
