//! Suffix domain catalog
//!
//! Resolves the ordered list of domains a user can mint an alias under:
//! the system-wide alias domains plus the user's verified custom domains.

use aliasd_shared::UserId;
use sqlx::PgPool;

/// Where a suffix domain comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainKind {
    /// System-configured domain available to every user
    Global,
    /// Domain the user has verified ownership of
    Custom,
}

/// A domain a user can mint an alias under
#[derive(Debug, Clone)]
pub struct SuffixDomain {
    pub kind: DomainKind,
    pub domain: String,
    pub randomize: bool,
}

/// Build the suffix domains available to a user.
///
/// Global domains come first in config order, then the user's verified
/// custom domains. Custom domains never carry a random word. Callers
/// reverse the rendered suffix list so custom domains end up first on
/// the wire.
pub fn available_suffix_domains(
    global_domains: &[String],
    custom_domains: &[String],
    randomize_global: bool,
) -> Vec<SuffixDomain> {
    let mut domains = Vec::with_capacity(global_domains.len() + custom_domains.len());

    for domain in global_domains {
        domains.push(SuffixDomain {
            kind: DomainKind::Global,
            domain: domain.clone(),
            randomize: randomize_global,
        });
    }

    for domain in custom_domains {
        domains.push(SuffixDomain {
            kind: DomainKind::Custom,
            domain: domain.clone(),
            randomize: false,
        });
    }

    domains
}

/// Fetch the user's verified custom domains, oldest first.
pub async fn verified_custom_domains(
    pool: &PgPool,
    user_id: UserId,
) -> Result<Vec<String>, sqlx::Error> {
    sqlx::query_scalar(
        "SELECT domain FROM custom_domains WHERE user_id = $1 AND verified ORDER BY created_at, id",
    )
    .bind(user_id.0)
    .fetch_all(pool)
    .await
}
