use crate::domain::activity::{ActivityAction, ActivityLogEntry, ActivityType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityLogDto {
    pub id: Uuid,
    pub user_id: Uuid,
    pub username: Option<String>,
    #[serde(rename = "type")]
    pub activity_type: ActivityType,
    pub action: ActivityAction,
    pub description: Option<String>,
    pub customer_id: Option<Uuid>,
    pub start_at: Option<DateTime<Utc>>,
    pub end_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<ActivityLogEntry> for ActivityLogDto {
    fn from(entry: ActivityLogEntry) -> Self {
        let log = entry.log;
        Self {
            id: log.id.into(),
            user_id: log.user_id.into(),
            username: entry.username,
            activity_type: log.activity_type,
            action: log.action,
            description: log.description,
            customer_id: log.customer_id,
            start_at: log.start_at,
            end_at: log.end_at,
            created_at: log.created_at,
        }
    }
}
