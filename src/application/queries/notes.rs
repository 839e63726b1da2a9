use crate::application::{
    dto::{CustomerNoteDto, Page, normalize_size},
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::note::{CustomerNoteRepository, NoteId, NoteListFilter};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, Clone, Default)]
pub struct ListNotesQuery {
    pub filter: NoteListFilter,
    pub page: u32,
    pub size: u32,
}

pub struct NoteQueryService {
    note_repo: Arc<dyn CustomerNoteRepository>,
}

impl NoteQueryService {
    pub fn new(note_repo: Arc<dyn CustomerNoteRepository>) -> Self {
        Self { note_repo }
    }

    pub async fn list_notes(&self, query: ListNotesQuery) -> ApplicationResult<Page<CustomerNoteDto>> {
        let size = normalize_size(query.size);
        let (notes, total) = self
            .note_repo
            .list_page(&query.filter, query.page, size)
            .await?;

        let items: Vec<CustomerNoteDto> = notes.into_iter().map(Into::into).collect();
        Ok(Page::new(items, query.page, size, total))
    }

    /// Detail lookup returns active notes only.
    pub async fn get_note(&self, note_id: Uuid) -> ApplicationResult<CustomerNoteDto> {
        self.note_repo
            .find_active_by_id(NoteId::from(note_id))
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("customer note not found"))
    }
}
