use charla_server::config::TRANSLATE_PORT;
use charla_server::translate;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let app = translate::router(Arc::new(translate::PassthroughTranslator));

    let addr = SocketAddr::from(([0, 0, 0, 0], TRANSLATE_PORT));
    info!("Translation service listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
