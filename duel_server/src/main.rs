use std::{fs, io, net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::{get, get_service},
    Extension, Router,
};
use tower_http::services::ServeDir;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;

mod config;
mod page;

/// The rendered `index.html`, shared by every request
struct IndexPage(String);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = ServerConfig::from_env()?;
    let game_config = config.load_game_config()?;

    let template_path = config.dist_dir.join("index.html");
    let template = fs::read_to_string(&template_path).with_context(|| {
        format!(
            "failed to read {}, run `cargo run --bin pack-wasm` first",
            template_path.display()
        )
    })?;
    let index = Arc::new(IndexPage(page::inject_config(&template, &game_config)?));

    let app = Router::new()
        .route("/", get(index_handler))
        .route("/index.html", get(index_handler))
        .route("/api/health", get(health_handler))
        .fallback(get_service(ServeDir::new(&config.dist_dir)).handle_error(handle_io_error))
        .layer(Extension(index));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("serving {} on {}", config.dist_dir.display(), addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .context("server stopped unexpectedly")?;

    Ok(())
}

async fn index_handler(Extension(index): Extension<Arc<IndexPage>>) -> impl IntoResponse {
    Html(index.0.clone())
}

/// Health Check Endpoint used to verify the service is live
async fn health_handler() -> impl IntoResponse {
    info!("HEALTH_CHECK ✓");
    "health check ✓".into_response()
}

async fn handle_io_error(err: io::Error) -> impl IntoResponse {
    error!("failed to serve static file :: {}", err);
    (StatusCode::INTERNAL_SERVER_ERROR, "something went wrong")
}
