// src/domain/activity/entity.rs
use crate::domain::errors::DomainError;
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActivityLogId(pub Uuid);

impl From<ActivityLogId> for Uuid {
    fn from(value: ActivityLogId) -> Self {
        value.0
    }
}

impl fmt::Display for ActivityLogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Category of an activity record: administrative audit trail or a
/// customer-facing interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ActivityType {
    Log,
    Interaction,
}

impl ActivityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityType::Log => "LOG",
            ActivityType::Interaction => "INTERACTION",
        }
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "LOG" => Ok(ActivityType::Log),
            "INTERACTION" => Ok(ActivityType::Interaction),
            other => Err(DomainError::Validation(format!(
                "unknown activity type '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ActivityAction {
    Create,
    Edit,
    Update,
    Login,
    Call,
    Email,
    Meeting,
    Other,
}

impl ActivityAction {
    /// The category an action belongs to when the caller does not supply one.
    pub fn derived_type(&self) -> ActivityType {
        match self {
            ActivityAction::Create
            | ActivityAction::Edit
            | ActivityAction::Update
            | ActivityAction::Login => ActivityType::Log,
            ActivityAction::Call
            | ActivityAction::Email
            | ActivityAction::Meeting
            | ActivityAction::Other => ActivityType::Interaction,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityAction::Create => "CREATE",
            ActivityAction::Edit => "EDIT",
            ActivityAction::Update => "UPDATE",
            ActivityAction::Login => "LOGIN",
            ActivityAction::Call => "CALL",
            ActivityAction::Email => "EMAIL",
            ActivityAction::Meeting => "MEETING",
            ActivityAction::Other => "OTHER",
        }
    }
}

impl fmt::Display for ActivityAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityAction {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "CREATE" => Ok(ActivityAction::Create),
            "EDIT" => Ok(ActivityAction::Edit),
            "UPDATE" => Ok(ActivityAction::Update),
            "LOGIN" => Ok(ActivityAction::Login),
            "CALL" => Ok(ActivityAction::Call),
            "EMAIL" => Ok(ActivityAction::Email),
            "MEETING" => Ok(ActivityAction::Meeting),
            "OTHER" => Ok(ActivityAction::Other),
            other => Err(DomainError::Validation(format!(
                "unknown activity action '{other}'"
            ))),
        }
    }
}

/// Append-only activity record. Written once, never updated.
#[derive(Debug, Clone)]
pub struct ActivityLog {
    pub id: ActivityLogId,
    pub user_id: UserId,
    pub customer_id: Option<Uuid>,
    pub activity_type: ActivityType,
    pub action: ActivityAction,
    pub description: Option<String>,
    pub start_at: Option<DateTime<Utc>>,
    pub end_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewActivityLog {
    pub user_id: UserId,
    pub customer_id: Option<Uuid>,
    pub activity_type: ActivityType,
    pub action: ActivityAction,
    pub description: Option<String>,
    pub start_at: Option<DateTime<Utc>>,
    pub end_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl NewActivityLog {
    pub fn new(
        user_id: UserId,
        activity_type: Option<ActivityType>,
        action: ActivityAction,
        description: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            user_id,
            customer_id: None,
            activity_type: activity_type.unwrap_or_else(|| action.derived_type()),
            action,
            description,
            start_at: None,
            end_at: None,
            created_at,
        }
    }
}
