// src/presentation/http/controllers/notes.rs
use crate::application::commands::notes::CreateNoteCommand;
use crate::application::dto::{CustomerNoteDto, Page};
use crate::application::queries::ListNotesQuery;
use crate::domain::note::NoteListFilter;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct CreateNoteRequest {
    pub customer_id: Uuid,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateNoteRequest {
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct ListNotesParams {
    #[serde(default)]
    pub customer_id: Option<Uuid>,
    #[serde(default)]
    pub staff_id: Option<Uuid>,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub size: u32,
}

pub async fn create_note(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Json(payload): Json<CreateNoteRequest>,
) -> HttpResult<Json<CustomerNoteDto>> {
    state
        .services
        .note_commands
        .create_note(CreateNoteCommand {
            customer_id: payload.customer_id,
            staff_id: actor.id.into(),
            content: payload.content,
        })
        .await
        .into_http()
        .map(Json)
}

pub async fn list_notes(
    Extension(state): Extension<HttpState>,
    Authenticated(_actor): Authenticated,
    Query(params): Query<ListNotesParams>,
) -> HttpResult<Json<Page<CustomerNoteDto>>> {
    state
        .services
        .note_queries
        .list_notes(ListNotesQuery {
            filter: NoteListFilter {
                customer_id: params.customer_id.map(Into::into),
                staff_id: params.staff_id.map(Into::into),
            },
            page: params.page,
            size: params.size,
        })
        .await
        .into_http()
        .map(Json)
}

pub async fn get_note(
    Extension(state): Extension<HttpState>,
    Authenticated(_actor): Authenticated,
    Path(id): Path<Uuid>,
) -> HttpResult<Json<CustomerNoteDto>> {
    state
        .services
        .note_queries
        .get_note(id)
        .await
        .into_http()
        .map(Json)
}

pub async fn update_note(
    Extension(state): Extension<HttpState>,
    Authenticated(_actor): Authenticated,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateNoteRequest>,
) -> HttpResult<Json<CustomerNoteDto>> {
    state
        .services
        .note_commands
        .update_note(id, payload.content)
        .await
        .into_http()
        .map(Json)
}

pub async fn delete_note(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Path(id): Path<Uuid>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .note_commands
        .delete_note(&actor, id)
        .await
        .into_http()?;
    Ok(Json(serde_json::json!({ "status": "deleted" })))
}
