use crate::domain::customer::CustomerId;
use crate::domain::errors::DomainResult;
use crate::domain::note::entity::{CustomerNote, NewCustomerNote, NoteContent, NoteId};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Default)]
pub struct NoteListFilter {
    pub customer_id: Option<CustomerId>,
    pub staff_id: Option<UserId>,
}

#[async_trait]
pub trait CustomerNoteRepository: Send + Sync {
    async fn insert(&self, new_note: NewCustomerNote) -> DomainResult<CustomerNote>;

    async fn update_content(
        &self,
        id: NoteId,
        content: NoteContent,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<CustomerNote>;

    async fn find_by_id(&self, id: NoteId) -> DomainResult<Option<CustomerNote>>;

    async fn find_active_by_id(&self, id: NoteId) -> DomainResult<Option<CustomerNote>>;

    async fn delete(&self, id: NoteId) -> DomainResult<()>;

    async fn list_page(
        &self,
        filter: &NoteListFilter,
        page: u32,
        size: u32,
    ) -> DomainResult<(Vec<CustomerNote>, u64)>;
}
