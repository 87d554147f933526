use anyhow::Result;
use osky_backend::{config::ServerConfig, routes::create_router};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,osky_backend=debug".parse().unwrap()),
        )
        .init();

    let config = ServerConfig::from_env()?;
    let app = create_router(&config);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    let addr = listener.local_addr()?;
    info!(%addr, "OSKY backend listening");

    axum::serve(listener, app).await?;
    Ok(())
}
