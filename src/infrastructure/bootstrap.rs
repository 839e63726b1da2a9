// src/infrastructure/bootstrap.rs
use crate::application::ports::{security::PasswordHasher, time::Clock};
use crate::domain::user::{Email, NewUser, PasswordHash, Role, UserRepository, Username};
use anyhow::Result;
use std::sync::Arc;

/// Seed the default admin account when no user with the configured bootstrap
/// email exists yet. Idempotent across restarts, including after the seeded
/// account has been deactivated.
pub async fn seed_default_admin(
    user_repo: &Arc<dyn UserRepository>,
    password_hasher: &Arc<dyn PasswordHasher>,
    clock: &Arc<dyn Clock>,
    email: &str,
    password: &str,
) -> Result<()> {
    let email = Email::new(email).map_err(|err| anyhow::anyhow!(err.to_string()))?;

    if let Some(existing) = user_repo
        .find_by_email(&email)
        .await
        .map_err(|err| anyhow::anyhow!(err.to_string()))?
    {
        if existing.is_active {
            tracing::debug!("default admin already exists, skipping bootstrap");
        } else {
            tracing::warn!(
                user_id = %existing.id,
                "bootstrap admin account exists but is deactivated, skipping seed"
            );
        }
        return Ok(());
    }

    let hashed = password_hasher
        .hash(password)
        .await
        .map_err(|err| anyhow::anyhow!(err.to_string()))?;

    let admin = NewUser::new(
        Username::new("admin").map_err(|err| anyhow::anyhow!(err.to_string()))?,
        email,
        PasswordHash::new(hashed).map_err(|err| anyhow::anyhow!(err.to_string()))?,
        Some("System Administrator".to_string()),
        Role::Admin,
        clock.now(),
    );

    let user = user_repo
        .insert(admin)
        .await
        .map_err(|err| anyhow::anyhow!(err.to_string()))?;
    tracing::info!(user_id = %user.id, "default admin user created");

    Ok(())
}
