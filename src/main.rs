use std::env;

use anyhow::Context;
use squad_draw::http::{router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    squad_draw::logger::init();

    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.json".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let addr = format!("0.0.0.0:{port}");

    let state = AppState::new(&config_path);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!(%addr, config = %config_path, "server starting");
    axum::serve(listener, router(state))
        .await
        .context("server error")?;

    Ok(())
}
