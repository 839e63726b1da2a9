// src/infrastructure/repositories/postgres_note.rs
use super::map_sqlx;
use crate::domain::customer::CustomerId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::note::{
    CustomerNote, CustomerNoteRepository, NewCustomerNote, NoteContent, NoteId, NoteListFilter,
};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

#[derive(Clone)]
pub struct PostgresCustomerNoteRepository {
    pool: PgPool,
}

impl PostgresCustomerNoteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const NOTE_COLUMNS: &str = "id, customer_id, staff_id, content, status, created_at, updated_at";

#[derive(Debug, FromRow)]
struct NoteRow {
    id: Uuid,
    customer_id: Uuid,
    staff_id: Uuid,
    content: String,
    status: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<NoteRow> for CustomerNote {
    type Error = DomainError;

    fn try_from(row: NoteRow) -> Result<Self, Self::Error> {
        Ok(CustomerNote {
            id: NoteId::from(row.id),
            customer_id: CustomerId::from(row.customer_id),
            staff_id: UserId::from(row.staff_id),
            content: NoteContent::new(row.content)?,
            status: row.status,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl CustomerNoteRepository for PostgresCustomerNoteRepository {
    async fn insert(&self, new_note: NewCustomerNote) -> DomainResult<CustomerNote> {
        let row = sqlx::query_as::<_, NoteRow>(&format!(
            "INSERT INTO customer_notes (customer_id, staff_id, content, status, created_at, \
                                         updated_at)
             VALUES ($1, $2, $3, TRUE, $4, $4)
             RETURNING {NOTE_COLUMNS}"
        ))
        .bind(Uuid::from(new_note.customer_id))
        .bind(Uuid::from(new_note.staff_id))
        .bind(new_note.content.as_str())
        .bind(new_note.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        CustomerNote::try_from(row)
    }

    async fn update_content(
        &self,
        id: NoteId,
        content: NoteContent,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<CustomerNote> {
        let row = sqlx::query_as::<_, NoteRow>(&format!(
            "UPDATE customer_notes SET content = $2, updated_at = $3
             WHERE id = $1
             RETURNING {NOTE_COLUMNS}"
        ))
        .bind(Uuid::from(id))
        .bind(content.as_str())
        .bind(updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("customer note not found".into()))?;

        CustomerNote::try_from(row)
    }

    async fn find_by_id(&self, id: NoteId) -> DomainResult<Option<CustomerNote>> {
        let row = sqlx::query_as::<_, NoteRow>(&format!(
            "SELECT {NOTE_COLUMNS} FROM customer_notes WHERE id = $1"
        ))
        .bind(Uuid::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(CustomerNote::try_from).transpose()
    }

    async fn find_active_by_id(&self, id: NoteId) -> DomainResult<Option<CustomerNote>> {
        let row = sqlx::query_as::<_, NoteRow>(&format!(
            "SELECT {NOTE_COLUMNS} FROM customer_notes WHERE id = $1 AND status = TRUE"
        ))
        .bind(Uuid::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(CustomerNote::try_from).transpose()
    }

    async fn delete(&self, id: NoteId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM customer_notes WHERE id = $1")
            .bind(Uuid::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("customer note not found".into()));
        }
        Ok(())
    }

    async fn list_page(
        &self,
        filter: &NoteListFilter,
        page: u32,
        size: u32,
    ) -> DomainResult<(Vec<CustomerNote>, u64)> {
        const FILTER_SQL: &str = "($1::uuid IS NULL OR customer_id = $1)
            AND ($2::uuid IS NULL OR staff_id = $2)";

        let customer_id = filter.customer_id.map(Uuid::from);
        let staff_id = filter.staff_id.map(Uuid::from);

        let rows = sqlx::query_as::<_, NoteRow>(&format!(
            "SELECT {NOTE_COLUMNS} FROM customer_notes
             WHERE {FILTER_SQL}
             ORDER BY created_at DESC
             LIMIT $3 OFFSET $4"
        ))
        .bind(customer_id)
        .bind(staff_id)
        .bind(i64::from(size))
        .bind(i64::from(page) * i64::from(size))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let total = sqlx::query_scalar::<_, i64>(&format!(
            "SELECT COUNT(1) FROM customer_notes WHERE {FILTER_SQL}"
        ))
        .bind(customer_id)
        .bind(staff_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let notes = rows
            .into_iter()
            .map(CustomerNote::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((notes, total as u64))
    }
}
