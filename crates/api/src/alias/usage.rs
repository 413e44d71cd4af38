//! Most-recently-used alias lookup
//!
//! Usage records are appended whenever an alias receives mail matched to a
//! hostname; this module only ever reads them back.

use aliasd_shared::{AliasId, UserId};
use sqlx::PgPool;
use time::OffsetDateTime;

/// The most recent use of one of the user's aliases on a hostname.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UsageHit {
    pub alias_id: AliasId,
    pub alias_email: String,
    pub created_at: OffsetDateTime,
}

/// Find the alias the user most recently used on `hostname`, if any.
///
/// A single bounded query: usage records joined to the user's aliases,
/// newest first. Ties on the timestamp fall back to the id ordering so the
/// result is deterministic.
pub async fn most_recent_usage(
    pool: &PgPool,
    user_id: UserId,
    hostname: &str,
) -> Result<Option<UsageHit>, sqlx::Error> {
    sqlx::query_as(
        r#"
        SELECT uo.alias_id, a.email AS alias_email, uo.created_at
        FROM alias_used_on uo
        JOIN aliases a ON uo.alias_id = a.id
        WHERE a.user_id = $1 AND uo.hostname = $2
        ORDER BY uo.created_at DESC, uo.id DESC
        LIMIT 1
        "#,
    )
    .bind(user_id.0)
    .bind(hostname)
    .fetch_optional(pool)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use aliasd_shared::db::create_pool;
    use uuid::Uuid;

    async fn seed_user(pool: &PgPool) -> UserId {
        let suffix = Uuid::new_v4().simple().to_string();
        let id: Uuid = sqlx::query_scalar(
            "INSERT INTO users (email) VALUES ($1) RETURNING id",
        )
        .bind(format!("usage-test-{suffix}@example.com"))
        .fetch_one(pool)
        .await
        .unwrap();
        UserId(id)
    }

    async fn seed_alias(pool: &PgPool, user_id: UserId, email: &str) -> AliasId {
        let id: Uuid = sqlx::query_scalar(
            "INSERT INTO aliases (user_id, email) VALUES ($1, $2) RETURNING id",
        )
        .bind(user_id.0)
        .bind(email)
        .fetch_one(pool)
        .await
        .unwrap();
        AliasId(id)
    }

    async fn record_usage(pool: &PgPool, alias_id: AliasId, hostname: &str, at: &str) {
        sqlx::query(
            "INSERT INTO alias_used_on (alias_id, hostname, created_at) VALUES ($1, $2, $3::timestamptz)",
        )
        .bind(alias_id.0)
        .bind(hostname)
        .bind(at)
        .execute(pool)
        .await
        .unwrap();
    }

    #[tokio::test]
    #[ignore] // Requires database
    async fn test_latest_usage_wins() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url, 5).await.unwrap();

        let user = seed_user(&pool).await;
        let suffix = Uuid::new_v4().simple().to_string();
        let older = seed_alias(&pool, user, &format!("older-{suffix}@example.com")).await;
        let newer = seed_alias(&pool, user, &format!("newer-{suffix}@example.com")).await;
        let hostname = format!("{suffix}.example.org");

        record_usage(&pool, older, &hostname, "2025-01-01T10:00:00Z").await;
        record_usage(&pool, newer, &hostname, "2025-01-02T10:00:00Z").await;

        let hit = most_recent_usage(&pool, user, &hostname)
            .await
            .unwrap()
            .expect("expected a hit");
        assert_eq!(hit.alias_id, newer);
        assert!(hit.alias_email.starts_with("newer-"));
    }

    #[tokio::test]
    #[ignore] // Requires database
    async fn test_no_usage_records_no_hit() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url, 5).await.unwrap();

        let user = seed_user(&pool).await;
        let suffix = Uuid::new_v4().simple().to_string();
        // The user owns an alias but never used it on this hostname
        seed_alias(&pool, user, &format!("unused-{suffix}@example.com")).await;

        let hit = most_recent_usage(&pool, user, &format!("{suffix}.example.org"))
            .await
            .unwrap();
        assert!(hit.is_none());
    }

    #[tokio::test]
    #[ignore] // Requires database
    async fn test_other_users_usage_is_invisible() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url, 5).await.unwrap();

        let user = seed_user(&pool).await;
        let other = seed_user(&pool).await;
        let suffix = Uuid::new_v4().simple().to_string();
        let theirs = seed_alias(&pool, other, &format!("theirs-{suffix}@example.com")).await;
        let hostname = format!("{suffix}.example.org");

        record_usage(&pool, theirs, &hostname, "2025-01-01T10:00:00Z").await;

        let hit = most_recent_usage(&pool, user, &hostname).await.unwrap();
        assert!(hit.is_none());
    }
}
