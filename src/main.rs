use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use quiz_backend::api::{self, AppState};
use quiz_backend::{Config, LlmService, MemoryStore, QuestionService};

#[tokio::main]
async fn main() -> Result<()> {
    quiz_backend::logger::init();

    let config = Config::from_env();

    let state = AppState {
        store: Arc::new(MemoryStore::new()),
        questions: Arc::new(
            QuestionService::new(LlmService::new(&config))
                .with_verbose_logging(config.verbose_logging),
        ),
    };

    let app = api::router(state);
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!("quiz backend listening on {}", config.bind_addr);
    info!("LLM model: {}", config.llm_model_name);

    axum::serve(listener, app).await?;

    Ok(())
}
