use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::security::{IssuedToken, TokenClaims, TokenIssuer, TokenKind},
};
use crate::domain::user::UserId;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// HS256 JWTs. Access and refresh tokens are signed with the same symmetric
/// key and differ only in lifetime; there is no server-side revocation, so
/// logout stays a client concern.
pub struct JwtTokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

#[derive(Debug, Serialize, Deserialize)]
struct JwtClaims {
    sub: Uuid,
    jti: Uuid,
    iat: i64,
    exp: i64,
}

impl JwtTokenIssuer {
    pub fn new(secret: &str, access_ttl: Duration, refresh_ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            access_ttl,
            refresh_ttl,
        }
    }
}

impl TokenIssuer for JwtTokenIssuer {
    fn issue(&self, subject: UserId, kind: TokenKind) -> ApplicationResult<IssuedToken> {
        let ttl = match kind {
            TokenKind::Access => self.access_ttl,
            TokenKind::Refresh => self.refresh_ttl,
        };

        let issued_at = Utc::now();
        let expires_at = issued_at + ttl;
        let claims = JwtClaims {
            sub: subject.into(),
            jti: Uuid::new_v4(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        Ok(IssuedToken {
            token,
            issued_at,
            expires_at,
        })
    }

    fn verify(&self, token: &str) -> ApplicationResult<TokenClaims> {
        let validation = Validation::new(Algorithm::HS256);
        let data = decode::<JwtClaims>(token, &self.decoding_key, &validation)
            .map_err(|_| ApplicationError::unauthorized("invalid or expired token"))?;

        let claims = data.claims;
        Ok(TokenClaims {
            subject: UserId::from(claims.sub),
            token_id: claims.jti,
            issued_at: timestamp_to_datetime(claims.iat)?,
            expires_at: timestamp_to_datetime(claims.exp)?,
        })
    }
}

fn timestamp_to_datetime(secs: i64) -> ApplicationResult<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp(secs, 0)
        .ok_or_else(|| ApplicationError::unauthorized("invalid or expired token"))
}
