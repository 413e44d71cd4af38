//! Shared application state

use std::sync::Arc;

use sqlx::PgPool;

use crate::{alias::WordList, auth::ApiKeyManager, config::Config};

/// State shared by all request handlers.
///
/// The word list is loaded once at startup and never re-read; requests only
/// ever take shared references to it.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<Config>,
    pub words: Arc<WordList>,
    pub api_keys: ApiKeyManager,
}
