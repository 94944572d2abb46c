//! CORS relay
//!
//! ```text
//!     Client Request                     ┌──────────────────────────────┐
//!     ─────────────────────────────────▶ │  http server (axum)          │
//!       OPTIONS /…                       │    └─▶ relay                 │
//!       GET|POST|… /…?url=<target>       │         ├─ preflight (204)   │
//!                                        │         ├─ missing url (400) │
//!     Client Response                    │         └─ forward ──────────┼──▶ Target
//!     ◀───────────────────────────────── │   + CORS headers ◀───────────┼─── Response
//!                                        └──────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use cors_relay::config::{load_config, validate_config, ConfigError, RelayConfig};
use cors_relay::lifecycle::{signals, Shutdown};
use cors_relay::observability;
use cors_relay::RelayServer;

#[derive(Parser)]
#[command(name = "cors-relay")]
#[command(
    about = "Relay requests to ?url=<target> and add permissive CORS headers",
    long_about = None
)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Bind address, overriding `listener.bind_address`.
    #[arg(short, long)]
    bind: Option<String>,

    /// User-Agent sent upstream, overriding `upstream.user_agent`.
    #[arg(long)]
    user_agent: Option<String>,

    /// Log level, overriding `observability.log_level`.
    #[arg(long)]
    log_level: Option<String>,

    /// Emit JSON log lines.
    #[arg(long)]
    json_logs: bool,
}

impl Cli {
    fn into_config(self) -> Result<RelayConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => RelayConfig::default(),
        };

        if let Some(bind) = self.bind {
            config.listener.bind_address = bind;
        }
        if let Some(user_agent) = self.user_agent {
            config.upstream.user_agent = user_agent;
        }
        if let Some(level) = self.log_level {
            config.observability.log_level = level;
        }
        if self.json_logs {
            config.observability.json = true;
        }

        validate_config(&config).map_err(ConfigError::Validation)?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Cli::parse().into_config()?;

    observability::init_logging(&config.observability);

    tracing::info!("cors-relay v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        user_agent = %config.upstream.user_agent,
        max_redirects = config.upstream.max_redirects,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server = RelayServer::new(&config)?;
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        signals::wait_for_signal().await;
        shutdown.trigger();
    });

    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
