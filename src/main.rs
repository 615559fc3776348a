use anyhow::Context;
use roast_my_friends::{router, AppState, MistralClient};
use tracing::{info, warn};
use tracing_subscriber::filter::LevelFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let level = std::env::var("ROAST_LOG")
        .ok()
        .and_then(|value| value.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::INFO);
    tracing_subscriber::fmt().with_max_level(level).init();

    // Credential absence is recoverable: the page collects a key instead.
    let api_key = std::env::var("MISTRAL_KEY")
        .ok()
        .filter(|key| !key.trim().is_empty());
    if api_key.is_none() {
        warn!("MISTRAL_KEY is not set; roasts will need a key typed into the page");
    }

    let addr = std::env::var("ROAST_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let state = AppState::new(MistralClient::new(), api_key);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("could not bind {addr}"))?;

    info!("🔥 Roast My Friends listening on http://{addr}");
    info!("📸 Open it in a browser and upload a photo to get roasted");

    axum::serve(listener, router(state))
        .await
        .context("server error")?;
    Ok(())
}
