//! Headline scoring service entrypoint.

use std::net::SocketAddr;
use std::time::Duration;

use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tokio::signal;

use headline_api::gateway::{AppState, create_router_with_state};
use headlines::config::Config;
use headlines::loader::{FetchPolicy, ModelPaths, load_scorer};
use headlines::logging;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    if std::env::args().any(|arg| arg == "--health-check") {
        std::process::exit(run_health_check(config.port).await);
    }

    logging::init(&config.log_level);
    config.validate()?;
    let addr: SocketAddr = config.socket_addr().parse()?;

    tracing::info!(
        bind_addr = %config.bind_addr,
        port = config.port,
        "Headline scoring service starting"
    );

    let paths = ModelPaths::from_config(&config)?;
    let scorer = match load_scorer(&paths, FetchPolicy::from_offline_flag(config.offline)).await {
        Ok(scorer) => scorer,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load model");
            return Err(e.into());
        }
    };

    let app = create_router_with_state(AppState::new(scorer));

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(addr = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

async fn run_health_check(port: u16) -> i32 {
    let url = format!("http://127.0.0.1:{}/status", port);

    let client = match reqwest::Client::builder()
        .timeout(Duration::from_secs(1))
        .build()
    {
        Ok(client) => client,
        Err(_) => return 1,
    };

    match client.get(&url).send().await {
        Ok(res) if res.status().is_success() => 0,
        _ => 1,
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
