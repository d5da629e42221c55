//! Test server harness.

use std::net::SocketAddr;
use std::time::Duration;

use headline_api::gateway::{AppState, create_router_with_state};
use headlines::classifier::{LinearArtifact, LinearClassifier};
use headlines::constants::DEFAULT_EMBEDDING_DIM;
use headlines::embedding::{EncoderConfig, SentenceEncoder};
use headlines::scoring::HeadlineScorer;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

const STARTUP_WAIT_TIMEOUT_SECS: u64 = 5;
const STARTUP_POLL_INTERVAL_MS: u64 = 50;

pub struct TestServer {
    pub addr: SocketAddr,
    _server_handle: JoinHandle<()>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl TestServer {
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ServerStartupError {
    #[error("Server failed to start within timeout")]
    Timeout,
    #[error("Failed to bind to address: {0}")]
    BindError(#[from] std::io::Error),
    #[error("Server startup failed: {0}")]
    StartupFailed(String),
}

/// Binary classifier that splits stub embeddings on their first component.
pub fn stub_classifier() -> LinearClassifier {
    let mut row = vec![0.0f32; DEFAULT_EMBEDDING_DIM];
    row[0] = 1.0;
    LinearClassifier::from_artifact(LinearArtifact {
        classes: vec!["Pessimistic".to_string(), "Optimistic".to_string()],
        coef: vec![row],
        intercept: vec![0.0],
    })
    .expect("valid stub artifact")
}

async fn wait_for_server_ready(addr: SocketAddr) -> Result<(), ServerStartupError> {
    let timeout = Duration::from_secs(STARTUP_WAIT_TIMEOUT_SECS);
    let interval = Duration::from_millis(STARTUP_POLL_INTERVAL_MS);
    let start = std::time::Instant::now();

    loop {
        if start.elapsed() > timeout {
            return Err(ServerStartupError::Timeout);
        }

        match tokio::net::TcpStream::connect(addr).await {
            Ok(_) => return Ok(()),
            Err(_) => tokio::time::sleep(interval).await,
        }
    }
}

/// Spawns the service on an ephemeral port with a stub encoder.
pub async fn spawn_test_server() -> Result<TestServer, ServerStartupError> {
    let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
    let local_addr = listener.local_addr()?;

    let encoder = SentenceEncoder::load(EncoderConfig::stub())
        .map_err(|e| ServerStartupError::StartupFailed(e.to_string()))?;
    let state = AppState::new(HeadlineScorer::new(encoder, stub_classifier()));
    let app = create_router_with_state(state);

    let (shutdown_tx, shutdown_rx) = oneshot::channel();
    let server_handle = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
            })
            .await
            .unwrap();
    });

    wait_for_server_ready(local_addr).await?;

    Ok(TestServer {
        addr: local_addr,
        _server_handle: server_handle,
        shutdown_tx: Some(shutdown_tx),
    })
}
