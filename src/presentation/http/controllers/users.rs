// src/presentation/http/controllers/users.rs
use crate::application::commands::users::{CreateUserCommand, UpdateUserCommand};
use crate::application::dto::{Page, UserDto};
use crate::application::queries::ListUsersQuery;
use crate::domain::user::{Role, UserListFilter};
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
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub full_name: Option<String>,
    pub role: Option<Role>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateRoleRequest {
    pub role: Role,
}

#[derive(Debug, Deserialize)]
pub struct ListUsersParams {
    #[serde(default)]
    pub keyword: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub size: u32,
}

pub async fn create_user(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Json(payload): Json<CreateUserRequest>,
) -> HttpResult<Json<UserDto>> {
    state
        .services
        .user_commands
        .create_user(
            &actor,
            CreateUserCommand {
                username: payload.username,
                email: payload.email,
                password: payload.password,
                full_name: payload.full_name,
                role: payload.role,
            },
        )
        .await
        .into_http()
        .map(Json)
}

pub async fn list_users(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Query(params): Query<ListUsersParams>,
) -> HttpResult<Json<Page<UserDto>>> {
    state
        .services
        .user_queries
        .list_users(
            &actor,
            ListUsersQuery {
                filter: UserListFilter {
                    keyword: params.keyword,
                    is_active: params.is_active,
                    role: params.role,
                },
                page: params.page,
                size: params.size,
            },
        )
        .await
        .into_http()
        .map(Json)
}

pub async fn get_user(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Path(id): Path<Uuid>,
) -> HttpResult<Json<UserDto>> {
    state
        .services
        .user_queries
        .get_user(&actor, id)
        .await
        .into_http()
        .map(Json)
}

pub async fn update_user(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateUserRequest>,
) -> HttpResult<Json<UserDto>> {
    state
        .services
        .user_commands
        .update_user(
            &actor,
            UpdateUserCommand {
                user_id: id,
                email: payload.email,
                full_name: payload.full_name,
                password: payload.password,
            },
        )
        .await
        .into_http()
        .map(Json)
}

pub async fn update_role(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateRoleRequest>,
) -> HttpResult<Json<UserDto>> {
    state
        .services
        .user_commands
        .update_role(&actor, id, payload.role)
        .await
        .into_http()
        .map(Json)
}

pub async fn deactivate_user(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Path(id): Path<Uuid>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .user_commands
        .deactivate_user(&actor, id)
        .await
        .into_http()?;
    Ok(Json(serde_json::json!({ "status": "deactivated" })))
}

pub async fn reactivate_user(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Path(id): Path<Uuid>,
) -> HttpResult<Json<UserDto>> {
    state
        .services
        .user_commands
        .reactivate_user(&actor, id)
        .await
        .into_http()
        .map(Json)
}
