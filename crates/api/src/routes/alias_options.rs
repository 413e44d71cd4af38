//! Alias option endpoints
//!
//! Read-only resolution of what a user can do when creating a new alias:
//! their existing aliases, whether their plan allows another one, a prefix
//! suggestion derived from the originating hostname, the candidate
//! suffixes, and the alias they most recently used on that hostname.
//!
//! The legacy and v2 endpoints share one computation and differ only in
//! wire shape and the enabled-only filter on `existing`.

use aliasd_shared::UserId;
use axum::{
    extract::{Extension, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::{
    alias::{available_suffix_domains, catalog, make_suffix, quota, suggest_prefix, usage, WordList},
    auth::AuthUser,
    error::ApiError,
    state::AppState,
};

// ============================================================================
// Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct OptionsQuery {
    pub hostname: Option<String>,
}

/// Which wire format to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OptionsFormat {
    Legacy,
    V2,
}

/// A previously used alias suggested back for this hostname
#[derive(Debug, Serialize)]
pub struct Recommendation {
    pub alias: String,
    /// Echoes the requested hostname exactly, not a normalized form
    pub hostname: String,
}

#[derive(Debug, Serialize)]
pub struct LegacyCustom {
    pub suggestion: String,
    pub suffixes: Vec<String>,
}

/// Response shape of `GET /alias/options`
#[derive(Debug, Serialize)]
pub struct LegacyOptions {
    pub existing: Vec<String>,
    pub can_create_custom: bool,
    pub custom: LegacyCustom,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<Recommendation>,
}

/// Response shape of `GET /v2/alias/options`
#[derive(Debug, Serialize)]
pub struct OptionsV2 {
    pub existing: Vec<String>,
    pub can_create: bool,
    pub prefix_suggestion: String,
    pub suffixes: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<Recommendation>,
}

struct ComputedOptions {
    existing: Vec<String>,
    can_create: bool,
    suggestion: String,
    suffixes: Vec<String>,
    recommendation: Option<Recommendation>,
}

// ============================================================================
// Route handlers
// ============================================================================

/// Legacy alias options endpoint
pub async fn options(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Query(query): Query<OptionsQuery>,
) -> Result<Json<LegacyOptions>, ApiError> {
    tracing::warn!("/v2/alias/options should be used instead");

    let computed = compute_options(
        &state,
        auth_user.user_id,
        query.hostname.as_deref(),
        OptionsFormat::Legacy,
    )
    .await?;

    Ok(Json(LegacyOptions {
        existing: computed.existing,
        can_create_custom: computed.can_create,
        custom: LegacyCustom {
            suggestion: computed.suggestion,
            suffixes: computed.suffixes,
        },
        recommendation: computed.recommendation,
    }))
}

/// Current alias options endpoint
pub async fn options_v2(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Query(query): Query<OptionsQuery>,
) -> Result<Json<OptionsV2>, ApiError> {
    let computed = compute_options(
        &state,
        auth_user.user_id,
        query.hostname.as_deref(),
        OptionsFormat::V2,
    )
    .await?;

    Ok(Json(OptionsV2 {
        existing: computed.existing,
        can_create: computed.can_create,
        prefix_suggestion: computed.suggestion,
        suffixes: computed.suffixes,
        recommendation: computed.recommendation,
    }))
}

// ============================================================================
// Aggregation
// ============================================================================

async fn compute_options(
    state: &AppState,
    user_id: UserId,
    hostname: Option<&str>,
    format: OptionsFormat,
) -> Result<ComputedOptions, ApiError> {
    // v2 hides disabled aliases; the legacy endpoint lists everything
    let enabled_only = format == OptionsFormat::V2;
    let existing = alias_emails(&state.pool, user_id, enabled_only).await?;

    let can_create =
        quota::can_create_new_alias(&state.pool, user_id, state.config.max_aliases_free_plan)
            .await?;

    let hostname = hostname.filter(|h| !h.is_empty());

    let mut recommendation = None;
    let mut suggestion = String::new();
    if let Some(hostname) = hostname {
        if let Some(hit) = usage::most_recent_usage(&state.pool, user_id, hostname).await? {
            tracing::debug!(alias = %hit.alias_email, hostname, %user_id, "found recommendation");
            recommendation = Some(Recommendation {
                alias: hit.alias_email,
                hostname: hostname.to_string(),
            });
        }

        suggestion = suggest_prefix(hostname);
    }

    let custom_domains = catalog::verified_custom_domains(&state.pool, user_id).await?;
    let suffixes = render_suffixes(
        &state.config.alias_domains,
        &custom_domains,
        !state.config.disable_alias_suffix,
        &state.words,
    );

    Ok(ComputedOptions {
        existing,
        can_create,
        suggestion,
        suffixes,
        recommendation,
    })
}

/// Render the suffix list: global domains first, then custom domains, then
/// reversed so custom domains come first on the wire.
fn render_suffixes(
    global_domains: &[String],
    custom_domains: &[String],
    randomize_global: bool,
    words: &WordList,
) -> Vec<String> {
    let domains = available_suffix_domains(global_domains, custom_domains, randomize_global);

    let mut suffixes: Vec<String> = domains
        .iter()
        .map(|d| make_suffix(&d.domain, d.randomize, words))
        .collect();
    suffixes.reverse();
    suffixes
}

async fn alias_emails(
    pool: &PgPool,
    user_id: UserId,
    enabled_only: bool,
) -> Result<Vec<String>, sqlx::Error> {
    let sql = if enabled_only {
        "SELECT email FROM aliases WHERE user_id = $1 AND enabled ORDER BY created_at, id"
    } else {
        "SELECT email FROM aliases WHERE user_id = $1 ORDER BY created_at, id"
    };

    sqlx::query_scalar(sql).bind(user_id.0).fetch_all(pool).await
}
