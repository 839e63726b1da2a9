use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::security::PasswordHasher,
};
use argon2::{
    Argon2,
    password_hash::{
        PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};
use async_trait::async_trait;

/// Salted adaptive hashing via Argon2 with library defaults. Hashing and
/// verification are CPU-bound, so both run on the blocking pool.
#[derive(Default, Clone)]
pub struct Argon2PasswordHasher;

#[async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        let password = password.to_owned();
        tokio::task::spawn_blocking(move || {
            let salt = SaltString::generate(&mut OsRng);
            Argon2::default()
                .hash_password(password.as_bytes(), &salt)
                .map(|hash| hash.to_string())
                .map_err(|err| ApplicationError::infrastructure(err.to_string()))
        })
        .await
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))?
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        let password = password.to_owned();
        let expected_hash = expected_hash.to_owned();
        tokio::task::spawn_blocking(move || -> Result<(), ApplicationError> {
            // A stored hash that does not parse must read as a mismatch, not
            // an internal error; it can be reached from user-facing login.
            let parsed = PasswordHash::new(&expected_hash)
                .map_err(|_| ApplicationError::unauthorized("incorrect password"))?;
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .map_err(|_| ApplicationError::unauthorized("incorrect password"))
        })
        .await
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))??;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn hash_then_verify_round_trips() {
        let hasher = Argon2PasswordHasher;
        let hashed = hasher.hash("hunter22").await.unwrap();

        assert!(hasher.verify("hunter22", &hashed).await.is_ok());
        assert!(matches!(
            hasher.verify("hunter23", &hashed).await,
            Err(ApplicationError::Unauthorized(_))
        ));
    }

    #[tokio::test]
    async fn malformed_stored_hash_reads_as_mismatch() {
        let hasher = Argon2PasswordHasher;
        assert!(matches!(
            hasher.verify("hunter22", "not-a-phc-string").await,
            Err(ApplicationError::Unauthorized(_))
        ));
    }
}
