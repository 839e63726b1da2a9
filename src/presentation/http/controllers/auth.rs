// src/presentation/http/controllers/auth.rs
use crate::application::commands::AuthenticateCommand;
use crate::application::dto::{AuthTokensDto, UserDto};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

pub async fn login(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<LoginRequest>,
) -> HttpResult<Json<AuthTokensDto>> {
    state
        .services
        .auth
        .authenticate(AuthenticateCommand {
            email: payload.email,
            password: payload.password,
        })
        .await
        .into_http()
        .map(Json)
}

pub async fn detail(
    Extension(state): Extension<HttpState>,
    Authenticated(_actor): Authenticated,
    Path(id): Path<Uuid>,
) -> HttpResult<Json<UserDto>> {
    state.services.auth.get_detail(id).await.into_http().map(Json)
}
