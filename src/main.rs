use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use inhand_engine::advisor::HttpAdvisor;
use inhand_engine::api::{AppState, create_router};
use inhand_engine::config::ConfigLoader;

/// Serve the InHand salary breakdown API.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Directory holding engine.yaml and regimes/.
    #[arg(long, env = "INHAND_CONFIG_DIR", default_value = "./config/inhand")]
    config: PathBuf,

    /// Address to listen on.
    #[arg(long, env = "INHAND_BIND_ADDR", default_value = "127.0.0.1:8080")]
    bind: SocketAddr,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();

    let config = ConfigLoader::load(&args.config)?;
    info!(
        config_dir = %args.config.display(),
        default_regime = %config.metadata().default_regime,
        "Configuration loaded"
    );

    let mut state = AppState::new(config.clone());
    match HttpAdvisor::from_env(&config.metadata().advisor) {
        Ok(advisor) => {
            info!(endpoint = %advisor.endpoint(), "Advisory service enabled");
            state = state.with_advisor(Arc::new(advisor));
        }
        Err(err) => warn!(error = %err, "Advisory service disabled"),
    }

    let listener = tokio::net::TcpListener::bind(args.bind).await?;
    info!(address = %args.bind, "Listening");
    axum::serve(listener, create_router(state)).await?;

    Ok(())
}
