use crate::application::ports::time::Clock;
use crate::domain::activity::{
    ActivityAction, ActivityLogRepository, ActivityType, NewActivityLog,
};
use crate::domain::user::{UserId, UserRepository};
use std::sync::Arc;

/// Best-effort audit/interaction recorder.
///
/// Recording must never disturb the operation being recorded: a missing or
/// unknown user id is a silent no-op, and persistence failures are logged and
/// swallowed. There is no error channel for callers.
pub struct ActivityRecorder {
    activity_repo: Arc<dyn ActivityLogRepository>,
    user_repo: Arc<dyn UserRepository>,
    clock: Arc<dyn Clock>,
}

impl ActivityRecorder {
    pub fn new(
        activity_repo: Arc<dyn ActivityLogRepository>,
        user_repo: Arc<dyn UserRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            activity_repo,
            user_repo,
            clock,
        }
    }

    /// Persist one immutable record for `action` by `user_id`. When
    /// `activity_type` is `None` it is derived from the action.
    pub async fn record(
        &self,
        user_id: Option<UserId>,
        activity_type: Option<ActivityType>,
        action: ActivityAction,
        description: impl Into<String>,
    ) {
        let Some(user_id) = user_id else {
            tracing::debug!(%action, "skipping activity record without user id");
            return;
        };

        // Skip rather than fail on an unknown user; inserting would only trip
        // the foreign key.
        match self.user_repo.find_by_id(user_id).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                tracing::debug!(%user_id, %action, "skipping activity record for unknown user");
                return;
            }
            Err(err) => {
                tracing::warn!(%user_id, %action, error = %err, "activity user lookup failed");
                return;
            }
        }

        let log = NewActivityLog::new(
            user_id,
            activity_type,
            action,
            Some(description.into()),
            self.clock.now(),
        );

        if let Err(err) = self.activity_repo.insert(log).await {
            tracing::warn!(%user_id, %action, error = %err, "failed to persist activity record");
        }
    }
}
