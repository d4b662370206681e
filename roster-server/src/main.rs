use std::{net::SocketAddr, sync::Arc, time::Duration};

use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use roster_core::{
    backend::{StoreBackend, StoreBackendBuilder},
    store::DocumentStore,
};
use roster_memory::InMemoryStore;
use roster_mongodb::{DEFAULT_CONNECT_TIMEOUT, MongoDbStore};
use roster_server::handlers;

#[derive(Parser, Debug)]
#[command(name = "roster-server", version, about = "HTTP employee roster service")]
struct Cli {
    /// Address to listen on.
    #[arg(long, default_value = "127.0.0.1:3000")]
    bind: SocketAddr,

    /// MongoDB connection string.
    #[arg(long, default_value = "mongodb://localhost:27017")]
    mongodb_uri: String,

    /// Database holding the employee collection.
    #[arg(long, default_value = "roster")]
    database: String,

    /// Seconds to wait for the initial store connection.
    #[arg(long, default_value_t = DEFAULT_CONNECT_TIMEOUT.as_secs())]
    connect_timeout: u64,

    /// Serve from a transient in-memory store instead of MongoDB.
    #[arg(long)]
    in_memory: bool,

    /// Increase log verbosity (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = match cli.verbose {
        0 => "info,tower_http=debug",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()),
        )
        .init();

    if cli.in_memory {
        tracing::info!("serving from a transient in-memory store");
        serve(cli.bind, InMemoryStore::new()).await
    } else {
        let backend = MongoDbStore::builder(&cli.mongodb_uri, &cli.database)
            .connect_timeout(Duration::from_secs(cli.connect_timeout))
            .build()
            .await
            .with_context(|| format!("failed to connect to {}", cli.mongodb_uri))?;
        tracing::info!(database = %cli.database, "connected to mongodb");
        serve(cli.bind, backend).await
    }
}

async fn serve<B: StoreBackend + 'static>(bind: SocketAddr, backend: B) -> anyhow::Result<()> {
    let store = Arc::new(DocumentStore::new(backend));
    let app = handlers::router(store.clone());

    let listener = TcpListener::bind(bind)
        .await
        .with_context(|| format!("failed to bind {bind}"))?;
    tracing::info!("listening on {bind}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    // In-flight requests have drained, so this is the last reference.
    if let Ok(store) = Arc::try_unwrap(store) {
        store.shutdown().await?;
    }

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {e}");
    }
    tracing::info!("shutting down");
}
