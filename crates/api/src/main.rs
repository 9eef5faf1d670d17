use anyhow::Context;

use estoque_api::config::ApiConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ApiConfig::from_env()?;
    estoque_observability::init(config.log_format);

    let app = estoque_api::app::build_app(&config);

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!(
        addr = %listener.local_addr()?,
        id_strategy = ?config.id_strategy,
        "listening"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
