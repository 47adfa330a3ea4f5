use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::api::create_router;
use crate::application::BankService;

/// Bankline - in-memory banking ledger over HTTP
#[derive(Parser)]
#[command(name = "bankline")]
#[command(about = "A minimal in-memory banking ledger served over HTTP")]
#[command(version)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server (state is lost when it stops)
    Serve {
        /// Address to bind
        #[arg(long, env = "BANKLINE_HOST", default_value = "0.0.0.0")]
        host: String,

        /// Port to listen on
        #[arg(short, long, env = "BANKLINE_PORT", default_value_t = 3333)]
        port: u16,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        init_tracing(self.verbose);

        match self.command {
            Commands::Serve { host, port } => serve(&host, port).await,
        }
    }
}

/// Install the global subscriber. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into());

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .init();
}

async fn serve(host: &str, port: u16) -> Result<()> {
    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .with_context(|| format!("Invalid listen address {}:{}", host, port))?;

    let app = create_router(BankService::new());
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Listening on http://{}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", err);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_defaults() {
        let cli = Cli::try_parse_from(["bankline", "serve"]).unwrap();
        assert!(!cli.verbose);
        match cli.command {
            Commands::Serve { host, port } => {
                assert_eq!(host, "0.0.0.0");
                assert_eq!(port, 3333);
            }
        }
    }

    #[test]
    fn test_serve_overrides() {
        let cli =
            Cli::try_parse_from(["bankline", "serve", "--host", "127.0.0.1", "-p", "8080", "-v"])
                .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Serve { host, port } => {
                assert_eq!(host, "127.0.0.1");
                assert_eq!(port, 8080);
            }
        }
    }

    #[test]
    fn test_rejects_invalid_port() {
        assert!(Cli::try_parse_from(["bankline", "serve", "--port", "not-a-port"]).is_err());
    }
}
