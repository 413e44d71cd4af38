//! aliasd API server

use std::{path::Path, sync::Arc};

use aliasd_api::{
    alias::WordList,
    auth::ApiKeyManager,
    config::Config,
    routes::create_router,
    state::AppState,
};
use aliasd_shared::db;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "aliasd_api=debug,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env()?;

    // Fatal if missing or empty: every randomized suffix draws from this list
    let words = WordList::load(Path::new(&config.words_file_path))?;
    tracing::info!(
        words = words.len(),
        domains = config.alias_domains.len(),
        "loaded suffix word list"
    );

    let pool = db::create_pool(&config.database_url, config.database_max_connections).await?;
    db::run_migrations(&pool).await?;

    let api_keys = ApiKeyManager::new(&config.api_key_hmac_secret);
    let bind_address = config.bind_address.clone();

    let state = AppState {
        pool,
        config: Arc::new(config),
        words: Arc::new(words),
        api_keys,
    };

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    tracing::info!(%bind_address, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
