//! Alias creation quota

use aliasd_shared::UserId;
use sqlx::PgPool;
use time::OffsetDateTime;

#[derive(Debug, sqlx::FromRow)]
struct QuotaRow {
    lifetime: bool,
    trial_end: Option<OffsetDateTime>,
    alias_count: i64,
}

/// Whether the user may mint another alias under their plan.
///
/// Lifetime and in-trial users are unlimited; everyone else is capped at
/// `max_free_plan` aliases.
pub async fn can_create_new_alias(
    pool: &PgPool,
    user_id: UserId,
    max_free_plan: i64,
) -> Result<bool, sqlx::Error> {
    let row: QuotaRow = sqlx::query_as(
        r#"
        SELECT u.lifetime, u.trial_end,
               (SELECT COUNT(*) FROM aliases a WHERE a.user_id = u.id) AS alias_count
        FROM users u
        WHERE u.id = $1
        "#,
    )
    .bind(user_id.0)
    .fetch_one(pool)
    .await?;

    Ok(plan_allows(
        row.lifetime,
        row.trial_end,
        row.alias_count,
        max_free_plan,
        OffsetDateTime::now_utc(),
    ))
}

fn plan_allows(
    lifetime: bool,
    trial_end: Option<OffsetDateTime>,
    alias_count: i64,
    max_free_plan: i64,
    now: OffsetDateTime,
) -> bool {
    if lifetime {
        return true;
    }
    if let Some(trial_end) = trial_end {
        if trial_end > now {
            return true;
        }
    }
    alias_count < max_free_plan
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::Duration;

    fn now() -> OffsetDateTime {
        OffsetDateTime::UNIX_EPOCH + Duration::days(20_000)
    }

    #[test]
    fn test_lifetime_is_unlimited() {
        assert!(plan_allows(true, None, 1_000, 5, now()));
    }

    #[test]
    fn test_active_trial_is_unlimited() {
        let trial_end = Some(now() + Duration::days(7));
        assert!(plan_allows(false, trial_end, 1_000, 5, now()));
    }

    #[test]
    fn test_expired_trial_falls_back_to_cap() {
        let trial_end = Some(now() - Duration::days(1));
        assert!(!plan_allows(false, trial_end, 5, 5, now()));
        assert!(plan_allows(false, trial_end, 4, 5, now()));
    }

    #[test]
    fn test_free_plan_cap() {
        assert!(plan_allows(false, None, 0, 5, now()));
        assert!(plan_allows(false, None, 4, 5, now()));
        assert!(!plan_allows(false, None, 5, 5, now()));
        assert!(!plan_allows(false, None, 6, 5, now()));
    }
}
