//! Headline scoring UI entrypoint.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use headline_ui::{HeadlineSession, ScoreClient, UiState, create_router};
use headlines::config::UiConfig;
use headlines::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = UiConfig::from_env()?;
    logging::init(&config.log_level);

    let addr: SocketAddr = config.socket_addr().parse()?;
    tracing::info!(
        addr = %addr,
        api_url = %config.api_url,
        "Headline UI starting"
    );

    let state = UiState::new(HeadlineSession::new(&config), Arc::new(ScoreClient::new()));
    let app = create_router(state);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(addr = %addr, "UI listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("Received Ctrl+C, shutting down");
            }
        })
        .await?;

    Ok(())
}
