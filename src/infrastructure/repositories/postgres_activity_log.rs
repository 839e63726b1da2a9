// src/infrastructure/repositories/postgres_activity_log.rs
use super::map_sqlx;
use crate::domain::activity::{
    ActivityAction, ActivityLog, ActivityLogEntry, ActivityLogFilter, ActivityLogId,
    ActivityLogRepository, ActivityType, NewActivityLog,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

#[derive(Clone)]
pub struct PostgresActivityLogRepository {
    pool: PgPool,
}

impl PostgresActivityLogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ActivityLogRow {
    id: Uuid,
    user_id: Uuid,
    customer_id: Option<Uuid>,
    #[sqlx(rename = "type")]
    activity_type: String,
    action: String,
    description: Option<String>,
    start_at: Option<DateTime<Utc>>,
    end_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

#[derive(Debug, FromRow)]
struct ActivityLogEntryRow {
    #[sqlx(flatten)]
    log: ActivityLogRow,
    username: Option<String>,
}

impl TryFrom<ActivityLogRow> for ActivityLog {
    type Error = DomainError;

    fn try_from(row: ActivityLogRow) -> Result<Self, Self::Error> {
        Ok(ActivityLog {
            id: ActivityLogId(row.id),
            user_id: UserId::from(row.user_id),
            customer_id: row.customer_id,
            activity_type: row.activity_type.parse::<ActivityType>()?,
            action: row.action.parse::<ActivityAction>()?,
            description: row.description,
            start_at: row.start_at,
            end_at: row.end_at,
            created_at: row.created_at,
        })
    }
}

const FILTER_SQL: &str = "($1::uuid IS NULL OR a.user_id = $1)
    AND ($2::text IS NULL OR a.type = $2)
    AND ($3::text IS NULL OR a.action = $3)
    AND ($4::timestamptz IS NULL OR a.created_at >= $4)
    AND ($5::timestamptz IS NULL OR a.created_at <= $5)";

#[async_trait]
impl ActivityLogRepository for PostgresActivityLogRepository {
    async fn insert(&self, log: NewActivityLog) -> DomainResult<ActivityLog> {
        let row = sqlx::query_as::<_, ActivityLogRow>(
            "INSERT INTO activity_logs (user_id, customer_id, type, action, description, \
                                        start_at, end_at, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING id, user_id, customer_id, type, action, description, start_at, end_at, \
                       created_at",
        )
        .bind(Uuid::from(log.user_id))
        .bind(log.customer_id)
        .bind(log.activity_type.as_str())
        .bind(log.action.as_str())
        .bind(log.description)
        .bind(log.start_at)
        .bind(log.end_at)
        .bind(log.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        ActivityLog::try_from(row)
    }

    async fn search(
        &self,
        filter: &ActivityLogFilter,
        page: u32,
        size: u32,
    ) -> DomainResult<(Vec<ActivityLogEntry>, u64)> {
        let user_id = filter.user_id.map(Uuid::from);
        let activity_type = filter.activity_type.map(|t| t.as_str().to_string());
        let action = filter.action.map(|a| a.as_str().to_string());

        let rows = sqlx::query_as::<_, ActivityLogEntryRow>(&format!(
            "SELECT a.id, a.user_id, a.customer_id, a.type, a.action, a.description,
                    a.start_at, a.end_at, a.created_at, u.username
             FROM activity_logs a
             LEFT JOIN users u ON u.id = a.user_id
             WHERE {FILTER_SQL}
             ORDER BY a.created_at DESC
             LIMIT $6 OFFSET $7"
        ))
        .bind(user_id)
        .bind(activity_type.clone())
        .bind(action.clone())
        .bind(filter.from)
        .bind(filter.to)
        .bind(i64::from(size))
        .bind(i64::from(page) * i64::from(size))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let total = sqlx::query_scalar::<_, i64>(&format!(
            "SELECT COUNT(1) FROM activity_logs a WHERE {FILTER_SQL}"
        ))
        .bind(user_id)
        .bind(activity_type)
        .bind(action)
        .bind(filter.from)
        .bind(filter.to)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let entries = rows
            .into_iter()
            .map(|row| {
                Ok(ActivityLogEntry {
                    log: ActivityLog::try_from(row.log)?,
                    username: row.username,
                })
            })
            .collect::<Result<Vec<_>, DomainError>>()?;

        Ok((entries, total as u64))
    }
}
