use crate::domain::activity::entity::{ActivityAction, ActivityLog, ActivityType, NewActivityLog};
use crate::domain::errors::DomainResult;
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Optional search constraints; present filters are ANDed together.
#[derive(Debug, Clone, Default)]
pub struct ActivityLogFilter {
    pub user_id: Option<UserId>,
    pub activity_type: Option<ActivityType>,
    pub action: Option<ActivityAction>,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

/// A log row joined with the acting user's name for display and export.
#[derive(Debug, Clone)]
pub struct ActivityLogEntry {
    pub log: ActivityLog,
    pub username: Option<String>,
}

#[async_trait]
pub trait ActivityLogRepository: Send + Sync {
    async fn insert(&self, log: NewActivityLog) -> DomainResult<ActivityLog>;

    /// Newest-first page of matching entries plus the total match count.
    async fn search(
        &self,
        filter: &ActivityLogFilter,
        page: u32,
        size: u32,
    ) -> DomainResult<(Vec<ActivityLogEntry>, u64)>;
}
