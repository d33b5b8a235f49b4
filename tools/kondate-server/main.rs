use clap::Parser;
use kondate::prelude::*;
use kondate::server;
use std::sync::Arc;
use tracing::{error, info};

/// Serve a recipe catalog over HTTP
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Address to listen on
    #[arg(long, env = "KONDATE_ADDR", default_value = "127.0.0.1:8080")]
    addr: String,

    /// Optional JSON array of entries to load before serving
    #[arg(long, env = "KONDATE_SEED")]
    seed: Option<String>,

    /// Only reject duplicate required items when they are listed next to each other
    #[arg(long)]
    adjacent_duplicates: bool,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let mode = if cli.adjacent_duplicates {
        DuplicateCheck::Adjacent
    } else {
        DuplicateCheck::Pairwise
    };
    let cookbook = Cookbook::builder().duplicate_check(mode).build();

    if let Some(path) = &cli.seed {
        let admitted = CatalogFile::from_file(path)
            .map_err(|e| e.to_string())
            .and_then(|file| cookbook.seed(file).map_err(|e| e.to_string()))
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to seed from '{}': {}", path, e)));
        info!("Seeded {} entries from '{}'", admitted, path);
    }

    let listener = tokio::net::TcpListener::bind(&cli.addr)
        .await
        .unwrap_or_else(|e| exit_with_error(&format!("Could not bind '{}': {}", cli.addr, e)));

    if let Err(e) = server::serve(listener, Arc::new(cookbook)).await {
        error!("Server error: {}", e);
        std::process::exit(1);
    }
}

fn exit_with_error(message: &str) -> ! {
    error!("{}", message);
    std::process::exit(1);
}
