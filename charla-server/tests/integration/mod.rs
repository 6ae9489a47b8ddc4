
use charla_core::Translator;
use charla_server::{AppState, router, translate};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing::Level;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_test_writer()
        .try_init();
}

pub async fn spawn_hub() -> SocketAddr {
    let app = router(AppState::new(vec![]));
    spawn(app).await
}

pub async fn spawn_translate(engine: Arc<dyn Translator>) -> SocketAddr {
    spawn(translate::router(engine)).await
}

async fn spawn(app: axum::Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    addr
}

/// Let in-flight joins/leaves land in the session actor before asserting
/// on relay behavior.
pub async fn settle() {
    tokio::time::sleep(Duration::from_millis(100)).await;
}
