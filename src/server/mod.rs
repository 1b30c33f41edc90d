mod filters;
mod handlers;

use std::{path::PathBuf, sync::Arc};

use clap::Parser;
use serde::{Deserialize, Serialize};
use tokio::{
    signal::{self, unix::SignalKind},
    sync::broadcast,
};
use tracing::info;
use warp::Filter;

pub const PORT_DEFAULT: u16 = 5000;
pub const INDEX_FILE_DEFAULT: &str = "index.html";

/// Serve a static HTML page on `/`.
#[derive(Parser, Debug, Clone)]
#[command(name = "html-checker-web", version)]
pub struct ServerConfig {
    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = PORT_DEFAULT)]
    pub port: u16,

    /// HTML file served on `/`, read again for every request
    #[arg(short, long, env = "INDEX_FILE", default_value = INDEX_FILE_DEFAULT)]
    pub index: PathBuf,
}

/// JSON body sent when the page cannot be served.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Create the webserver and serve the page until a shutdown signal arrives.
pub async fn server(config: ServerConfig) -> anyhow::Result<()> {
    let (shutdown_tx, mut shutdown_rx) = broadcast::channel(1);

    let routes = filters::index(Arc::new(config.index)).with(warp::trace::request());

    let mut sigterm = signal::unix::signal(SignalKind::terminate())?;
    let mut sigquit = signal::unix::signal(SignalKind::quit())?;
    tokio::spawn(async move {
        let kill = signal::ctrl_c();

        let send_kill = move || {
            info!("Received shutdown signal. Shutting down.");
            let _ = shutdown_tx.send(());
        };
        tokio::select! {
            _ = sigterm.recv() => send_kill(),
            _ = sigquit.recv() => send_kill(),
            _ = kill => send_kill(),
        }
    });

    let (addr, server) = warp::serve(routes).try_bind_with_graceful_shutdown(
        ([0, 0, 0, 0], config.port),
        async move {
            shutdown_rx.recv().await.ok();
        },
    )?;

    info!("Listening on {}", addr.port());
    server.await;

    Ok(())
}
