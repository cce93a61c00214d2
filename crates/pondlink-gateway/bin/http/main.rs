mod cli;
mod telemetry;

use crate::cli::{StorageBackendArg, CLI};
use clap::Parser;
use pondlink_core::{Alphabet, Codec};
use pondlink_gateway::{App, AppState};
use pondlink_shortener::{Shortener, ShortenerService, UrlPatternValidator};
use pondlink_storage::{HashStore, LinkRegistry, LinkStore, SlotStore};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CLI::parse();
    telemetry::init(config.log_format);

    info!(
        listen_addr = %config.listen_addr,
        base_url = %config.base_url,
        capacity = config.capacity,
        storage_backend = %config.storage,
        alphabet = %config.alphabet,
        "starting link shortener"
    );

    let alphabet = config.alphabet.alphabet();
    let shortener = match config.storage {
        StorageBackendArg::Slots => build_shortener(SlotStore::with_capacity(config.capacity), alphabet),
        StorageBackendArg::Hash => build_shortener(HashStore::with_capacity(config.capacity), alphabet),
    };
    let state = AppState::new(shortener, config.base_url);

    let listener = TcpListener::bind(config.listen_addr).await?;
    info!(listen_addr = %listener.local_addr()?, "listening");

    axum::serve(listener, App::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("shut down");
    Ok(())
}

fn build_shortener<S: LinkStore>(store: S, alphabet: &'static Alphabet) -> Arc<dyn Shortener> {
    Arc::new(ShortenerService::with_parts(
        LinkRegistry::new(store),
        Codec::new(alphabet),
        UrlPatternValidator,
    ))
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::warn!(%error, "failed to listen for ctrl-c");
    }
}
