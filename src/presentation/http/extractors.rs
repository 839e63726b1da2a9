// src/presentation/http/extractors.rs
use crate::{
    application::{dto::AuthenticatedUser, error::ApplicationError},
    presentation::http::state::HttpState,
};
use axum::{Extension, extract::FromRequestParts, http::request::Parts};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};

use super::error::HttpError;

/// Verified bearer identity; the token subject must resolve to an active user.
#[derive(Debug, Clone)]
pub struct Authenticated(pub AuthenticatedUser);

impl FromRequestParts<()> for Authenticated {
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &()) -> Result<Self, Self::Rejection> {
        let Extension(app_state) = Extension::<HttpState>::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                HttpError::from_error(ApplicationError::Infrastructure(
                    "application state missing".into(),
                ))
            })?;

        let header = parts
            .headers
            .typed_get::<Authorization<Bearer>>()
            .ok_or_else(|| {
                HttpError::from_error(ApplicationError::Unauthorized(
                    "missing Authorization header".into(),
                ))
            })?;

        let claims = app_state
            .services
            .token_issuer()
            .verify(header.token())
            .map_err(HttpError::from_error)?;

        let user = app_state
            .services
            .user_repo()
            .find_by_id(claims.subject)
            .await
            .map_err(|err| HttpError::from_error(ApplicationError::from(err)))?
            .filter(|user| user.is_active)
            .ok_or_else(|| {
                HttpError::from_error(ApplicationError::Unauthorized(
                    "token subject is unknown or inactive".into(),
                ))
            })?;

        Ok(Self(AuthenticatedUser::from(&user)))
    }
}
