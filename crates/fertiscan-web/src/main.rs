use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use fertiscan_web::{AppState, ServerConfig, create_router};

/// Soil fertility predictor UI
#[derive(Parser, Debug)]
#[command(name = "fertiscan-web")]
#[command(version)]
#[command(about = "Form-based predictor for the soil fertility classifier")]
struct Cli {
    /// Port to listen on
    #[arg(short, long, default_value = "8080")]
    port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Path of the model artifact produced by the trainer
    #[arg(short, long, default_value = "models/soil_fertility_model.bin")]
    model: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = ServerConfig {
        host: cli.host,
        port: cli.port,
        model_path: cli.model,
    };

    let state = Arc::new(AppState::load(&config));
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!(%addr, "predictor UI listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
