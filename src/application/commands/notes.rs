use super::ActivityRecorder;
use crate::application::{
    dto::{AuthenticatedUser, CustomerNoteDto},
    error::{ApplicationError, ApplicationResult},
    ports::time::Clock,
};
use crate::domain::activity::ActivityAction;
use crate::domain::customer::{CustomerId, CustomerRepository};
use crate::domain::note::{
    CustomerNoteRepository, NewCustomerNote, NoteContent, NoteId,
};
use crate::domain::user::{UserId, UserRepository};
use std::sync::Arc;
use uuid::Uuid;

pub struct CreateNoteCommand {
    pub customer_id: Uuid,
    pub staff_id: Uuid,
    pub content: String,
}

pub struct NoteCommandService {
    note_repo: Arc<dyn CustomerNoteRepository>,
    customer_repo: Arc<dyn CustomerRepository>,
    user_repo: Arc<dyn UserRepository>,
    recorder: Arc<ActivityRecorder>,
    clock: Arc<dyn Clock>,
}

impl NoteCommandService {
    pub fn new(
        note_repo: Arc<dyn CustomerNoteRepository>,
        customer_repo: Arc<dyn CustomerRepository>,
        user_repo: Arc<dyn UserRepository>,
        recorder: Arc<ActivityRecorder>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            note_repo,
            customer_repo,
            user_repo,
            recorder,
            clock,
        }
    }

    pub async fn create_note(
        &self,
        command: CreateNoteCommand,
    ) -> ApplicationResult<CustomerNoteDto> {
        let customer = self
            .customer_repo
            .find_live_by_id(CustomerId::from(command.customer_id))
            .await?
            .ok_or_else(|| ApplicationError::not_found("customer not found or deleted"))?;

        let staff = self
            .user_repo
            .find_by_id(UserId::from(command.staff_id))
            .await?
            .ok_or_else(|| ApplicationError::not_found("staff not found"))?;

        let content = NoteContent::new(command.content)?;
        let note = self
            .note_repo
            .insert(NewCustomerNote {
                customer_id: customer.id,
                staff_id: staff.id,
                content,
                created_at: self.clock.now(),
            })
            .await?;

        self.recorder
            .record(
                Some(staff.id),
                None,
                ActivityAction::Create,
                format!("Created note for customer {}", customer.id),
            )
            .await;

        Ok(note.into())
    }

    pub async fn update_note(
        &self,
        note_id: Uuid,
        content: String,
    ) -> ApplicationResult<CustomerNoteDto> {
        let id = NoteId::from(note_id);
        let note = self
            .note_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("customer note not found"))?;

        let content = NoteContent::new(content)?;
        let updated = self
            .note_repo
            .update_content(id, content, self.clock.now())
            .await?;

        self.recorder
            .record(
                Some(note.staff_id),
                None,
                ActivityAction::Update,
                format!("Updated note {note_id}"),
            )
            .await;

        Ok(updated.into())
    }

    pub async fn delete_note(
        &self,
        actor: &AuthenticatedUser,
        note_id: Uuid,
    ) -> ApplicationResult<()> {
        let id = NoteId::from(note_id);
        self.note_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("customer note not found"))?;

        self.note_repo.delete(id).await?;

        self.recorder
            .record(
                Some(actor.id),
                None,
                ActivityAction::Edit,
                format!("Deleted note {note_id}"),
            )
            .await;

        Ok(())
    }
}
