mod api_doc;
mod app;
mod config;
mod error;
mod handlers;
mod models;
mod routes;
mod state;
mod store;

use anyhow::Context;
use config::Config;
use state::AppState;
use store::ItemStore;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    tracing::info!("items-api starting");

    if let Err(err) = run().await {
        tracing::error!("Server failed: {:#}", err);
        return Err(err);
    }

    Ok(())
}

async fn run() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    config.log_startup();

    let router = app::build_router(AppState::new(ItemStore::new()));

    let addr = config.socket_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Server listening on {}", addr);
    tracing::info!("API docs available at http://{}{}", addr, routes::SWAGGER_UI);

    axum::serve(listener, router)
        .await
        .context("HTTP server terminated")?;

    Ok(())
}
