use crate::domain::user::{Role, User, UserId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Result of a successful login: the subject plus one token of each class.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthTokensDto {
    pub user_id: Uuid,
    pub access_token: String,
    pub refresh_token: String,
}

/// Verified caller identity attached to a request by the bearer extractor.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub role: Role,
}

impl AuthenticatedUser {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

impl From<&User> for AuthenticatedUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.to_string(),
            email: user.email.to_string(),
            role: user.role,
        }
    }
}
