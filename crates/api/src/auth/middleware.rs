//! API-key authentication middleware

use aliasd_shared::UserId;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::{error::ApiError, state::AppState};

/// Header carrying the API credential.
pub const AUTH_HEADER: &str = "authentication";

/// The authenticated caller, attached to the request by [`require_api_key`].
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: UserId,
}

/// Resolve the `Authentication` header to a user, or reject with 401.
///
/// Key signatures are verified locally first, so garbage credentials never
/// reach the database. Successful lookups bump the key's `last_used_at`.
pub async fn require_api_key(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let key = req
        .headers()
        .get(AUTH_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .ok_or(ApiError::Unauthorized)?;

    if !state
        .api_keys
        .validate_key(key)
        .map_err(|_| ApiError::Internal)?
    {
        tracing::debug!("rejected API key with bad signature");
        return Err(ApiError::Unauthorized);
    }

    let key_hash = state.api_keys.hash_key(key);

    #[derive(sqlx::FromRow)]
    struct KeyRow {
        user_id: Uuid,
    }

    let row: Option<KeyRow> = sqlx::query_as(
        "UPDATE api_keys SET last_used_at = NOW() WHERE key_hash = $1 RETURNING user_id",
    )
    .bind(&key_hash)
    .fetch_optional(&state.pool)
    .await?;

    let row = row.ok_or(ApiError::Unauthorized)?;

    req.extensions_mut().insert(AuthUser {
        user_id: UserId(row.user_id),
    });

    Ok(next.run(req).await)
}
