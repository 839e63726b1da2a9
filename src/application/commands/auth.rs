use crate::application::{
    dto::{AuthTokensDto, UserDto},
    error::{ApplicationError, ApplicationResult},
    ports::security::{PasswordHasher, TokenIssuer, TokenKind},
};
use crate::domain::user::{Email, UserId, UserRepository};
use std::sync::Arc;
use uuid::Uuid;

pub struct AuthenticateCommand {
    pub email: String,
    pub password: String,
}

/// Single-shot credential check: validate input, look up an active user by
/// email, verify the password hash, then issue one access and one refresh
/// token keyed by the user id. No other side effects; in particular,
/// `last_login` is not touched here.
pub struct AuthService {
    user_repo: Arc<dyn UserRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
    token_issuer: Arc<dyn TokenIssuer>,
}

impl AuthService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_issuer: Arc<dyn TokenIssuer>,
    ) -> Self {
        Self {
            user_repo,
            password_hasher,
            token_issuer,
        }
    }

    pub async fn authenticate(
        &self,
        command: AuthenticateCommand,
    ) -> ApplicationResult<AuthTokensDto> {
        if command.email.trim().is_empty() {
            return Err(ApplicationError::validation("email is required"));
        }
        if command.password.trim().is_empty() {
            return Err(ApplicationError::validation("password is required"));
        }

        let email = Email::new(command.email)?;
        let user = self
            .user_repo
            .find_active_by_email(&email)
            .await?
            .ok_or_else(|| {
                ApplicationError::not_found("email not found or user is inactive")
            })?;

        self.password_hasher
            .verify(&command.password, user.password_hash.as_str())
            .await?;

        let access = self.token_issuer.issue(user.id, TokenKind::Access)?;
        let refresh = self.token_issuer.issue(user.id, TokenKind::Refresh)?;

        tracing::info!(user_id = %user.id, "user authenticated");

        Ok(AuthTokensDto {
            user_id: user.id.into(),
            access_token: access.token,
            refresh_token: refresh.token,
        })
    }

    /// Profile lookup used by the auth detail endpoint; inactive users are
    /// reported as not found, same as missing ones.
    pub async fn get_detail(&self, id: Uuid) -> ApplicationResult<UserDto> {
        let user = self
            .user_repo
            .find_by_id(UserId::from(id))
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("user not found: {id}")))?;

        if !user.is_active {
            return Err(ApplicationError::not_found(format!("user is inactive: {id}")));
        }

        Ok(user.into())
    }
}
