pub mod handlers;
pub mod types;

use crate::{Result, config::Config, llm::OpenAiClient, prompt::PromptBuilder};
use axum::{
    Router,
    routing::{get, post},
};
use handlers::AppState;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/convert", post(handlers::convert))
        .route("/debug", post(handlers::debug))
        .route("/check-quality", post(handlers::check_quality))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    if config.llm.api_key.is_empty() {
        warn!("No API key configured; completion requests will fail upstream");
    }

    let client = OpenAiClient::new(&config.llm);
    info!("Using completion model {}", client.model());

    let app_state = AppState::new(PromptBuilder::new(config.prompts.clone()), client);
    let app = router(app_state);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
