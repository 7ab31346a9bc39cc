use anyhow::Context;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    userbase_observability::init();

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

    let app = userbase_api::app::build_app();

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("server exited")?;

    Ok(())
}
