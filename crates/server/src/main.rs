mod pages;
mod state;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;

use gist_summarize::Summarizer;

use crate::state::AppState;

fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(pages::index).post(pages::summarize))
        .route("/upload", get(pages::upload_form).post(pages::upload))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    gist_core::config::load_dotenv();
    let config = gist_core::Config::from_env();
    config.log_summary();

    let summarizer = Summarizer::from_config(&config)?;
    let state = Arc::new(AppState::new(summarizer)?);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app(state)).await?;

    Ok(())
}
