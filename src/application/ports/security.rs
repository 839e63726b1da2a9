// src/application/ports/security.rs
use crate::application::error::ApplicationResult;
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &str) -> ApplicationResult<String>;

    /// Fails with `Unauthorized` on mismatch. A malformed stored hash is also
    /// treated as a mismatch rather than surfacing to the caller.
    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()>;
}

/// Access tokens are short-lived; refresh tokens differ only in lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Access,
    Refresh,
}

#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct TokenClaims {
    pub subject: UserId,
    pub token_id: Uuid,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

pub trait TokenIssuer: Send + Sync {
    fn issue(&self, subject: UserId, kind: TokenKind) -> ApplicationResult<IssuedToken>;

    /// Signature and expiry are both checked; malformed, tampered and expired
    /// tokens all fail with `Unauthorized`.
    fn verify(&self, token: &str) -> ApplicationResult<TokenClaims>;

    fn is_valid(&self, token: &str, expected_subject: UserId) -> bool {
        self.verify(token)
            .map(|claims| claims.subject == expected_subject)
            .unwrap_or(false)
    }
}
