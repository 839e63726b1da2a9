// src/domain/note/entity.rs
use crate::domain::customer::CustomerId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NoteId(pub Uuid);

impl From<NoteId> for Uuid {
    fn from(value: NoteId) -> Self {
        value.0
    }
}

impl From<Uuid> for NoteId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteContent(String);

impl NoteContent {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation(
                "note content cannot be empty".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<NoteContent> for String {
    fn from(value: NoteContent) -> Self {
        value.0
    }
}

#[derive(Debug, Clone)]
pub struct CustomerNote {
    pub id: NoteId,
    pub customer_id: CustomerId,
    pub staff_id: UserId,
    pub content: NoteContent,
    pub status: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewCustomerNote {
    pub customer_id: CustomerId,
    pub staff_id: UserId,
    pub content: NoteContent,
    pub created_at: DateTime<Utc>,
}
