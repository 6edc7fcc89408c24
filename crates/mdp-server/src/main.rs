use anyhow::{Context, Result};
use clap::Parser;
use mdp_core::{config, logging};

mod app;
mod error;
mod handlers;
mod stream;


/// Web-facing media download proxy backed by yt-dlp.
#[derive(Debug, Parser)]
#[command(name = "mdp")]
#[command(about = "MDP: web-facing media download proxy", long_about = None)]
struct Args {
    /// Override the bind host from config.toml.
    #[arg(long)]
    host: Option<String>,

    /// Override the bind port from config.toml.
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() {
    // Initialize logging as early as possible; fall back to stderr when
    // the state dir is unwritable.
    if logging::init_file().is_err() {
        logging::init_stderr();
    }

    if let Err(err) = run().await {
        eprintln!("mdp error: {:#}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let args = Args::parse();
    let mut cfg = config::load_or_init()?;
    if let Some(host) = args.host {
        cfg.bind_host = host;
    }
    if let Some(port) = args.port {
        cfg.bind_port = port;
    }

    let addr = format!("{}:{}", cfg.bind_host, cfg.bind_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("bind {addr}"))?;
    tracing::info!("mdp listening on {}", addr);

    axum::serve(listener, app::build_router(cfg))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("shutdown signal received");
}
