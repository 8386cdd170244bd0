use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use promptrelay::{api_router, Container, ContainerConfig};

#[derive(Parser)]
#[command(name = "promptrelay")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long)]
    verbose: bool,

    /// Address to listen on.
    #[arg(short, long, default_value = "127.0.0.1:8080")]
    listen: String,

    /// Base URL of the inference server.
    #[arg(long, env = "OLLAMA_BASE_URL", default_value = "http://localhost:11434")]
    model_url: String,

    /// Model identifier sent with every generation request.
    #[arg(short, long, env = "OLLAMA_MODEL", default_value = "gemma:2b")]
    model: String,

    /// Path of the interaction log.
    #[arg(long, default_value = "logs/log.jsonl")]
    log_file: String,

    /// Keep the interaction log in memory (nothing written to disk).
    #[arg(long)]
    memory_storage: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let container = Arc::new(Container::new(ContainerConfig {
        model_url: cli.model_url,
        model: cli.model,
        log_file: cli.log_file,
        memory_storage: cli.memory_storage,
    })?);

    info!(
        "Relaying prompts to {} (model {})",
        container.model_url(),
        container.model()
    );
    if container.memory_storage() {
        info!("Interaction log kept in memory");
    } else {
        info!("Interaction log at {}", container.log_file());
    }

    let listener = tokio::net::TcpListener::bind(&cli.listen).await?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, api_router(container)).await?;

    Ok(())
}
