use crate::domain::note::CustomerNote;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerNoteDto {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub staff_id: Uuid,
    pub content: String,
    pub status: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<CustomerNote> for CustomerNoteDto {
    fn from(note: CustomerNote) -> Self {
        Self {
            id: note.id.into(),
            customer_id: note.customer_id.into(),
            staff_id: note.staff_id.into(),
            content: note.content.into(),
            status: note.status,
            created_at: note.created_at,
            updated_at: note.updated_at,
        }
    }
}
