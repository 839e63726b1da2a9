use super::{ActivityRecorder, ensure_admin};
use crate::application::{
    dto::{AuthenticatedUser, UserDto},
    error::{ApplicationError, ApplicationResult},
    ports::{security::PasswordHasher, time::Clock},
};
use crate::domain::activity::ActivityAction;
use crate::domain::user::{
    Email, NewUser, PasswordHash, Role, User, UserId, UserRepository, UserUpdate, Username,
};
use std::sync::Arc;
use uuid::Uuid;

pub struct CreateUserCommand {
    pub username: String,
    pub email: String,
    pub password: String,
    pub full_name: Option<String>,
    pub role: Option<Role>,
}

pub struct UpdateUserCommand {
    pub user_id: Uuid,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub password: Option<String>,
}

pub struct UserCommandService {
    user_repo: Arc<dyn UserRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
    recorder: Arc<ActivityRecorder>,
    clock: Arc<dyn Clock>,
}

impl UserCommandService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        recorder: Arc<ActivityRecorder>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            user_repo,
            password_hasher,
            recorder,
            clock,
        }
    }

    pub async fn create_user(
        &self,
        actor: &AuthenticatedUser,
        command: CreateUserCommand,
    ) -> ApplicationResult<UserDto> {
        ensure_admin(actor)?;

        let username = Username::new(command.username)?;
        let email = Email::new(command.email)?;
        validate_password(&command.password)?;

        // Friendly fast paths; the unique constraints remain the source of
        // truth under concurrent creates.
        if self.user_repo.exists_by_username(&username).await? {
            return Err(ApplicationError::conflict(format!(
                "username already exists: {username}"
            )));
        }
        if self.user_repo.exists_by_email(&email).await? {
            return Err(ApplicationError::conflict(format!(
                "email already exists: {email}"
            )));
        }

        let hashed = self.password_hasher.hash(&command.password).await?;
        let new_user = NewUser::new(
            username,
            email,
            PasswordHash::new(hashed)?,
            command.full_name,
            command.role.unwrap_or_default(),
            self.clock.now(),
        );

        let user = self.user_repo.insert(new_user).await?;
        tracing::info!(user_id = %user.id, "user created");

        self.recorder
            .record(
                Some(actor.id),
                None,
                ActivityAction::Create,
                format!("Created user {}", user.username),
            )
            .await;

        Ok(user.into())
    }

    pub async fn update_user(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateUserCommand,
    ) -> ApplicationResult<UserDto> {
        ensure_admin(actor)?;

        let user = self.load_user(command.user_id).await?;
        if !user.is_active {
            return Err(ApplicationError::validation(
                "cannot update deactivated user",
            ));
        }

        let mut update = UserUpdate::new(user.id, self.clock.now());

        if let Some(email) = command.email {
            let email = Email::new(email)?;
            if email != user.email && self.user_repo.exists_by_email(&email).await? {
                return Err(ApplicationError::conflict(format!(
                    "email already exists: {email}"
                )));
            }
            update = update.with_email(email);
        }

        if let Some(full_name) = command.full_name {
            update = update.with_full_name(full_name);
        }

        if let Some(password) = command.password {
            if !password.is_empty() {
                validate_password(&password)?;
                let hashed = self.password_hasher.hash(&password).await?;
                update = update.with_password_hash(PasswordHash::new(hashed)?);
            }
        }

        let updated = self.user_repo.update(update).await?;

        self.recorder
            .record(
                Some(actor.id),
                None,
                ActivityAction::Update,
                format!("Updated user {}", updated.id),
            )
            .await;

        Ok(updated.into())
    }

    pub async fn update_role(
        &self,
        actor: &AuthenticatedUser,
        user_id: Uuid,
        role: Role,
    ) -> ApplicationResult<UserDto> {
        ensure_admin(actor)?;

        let user = self.load_user(user_id).await?;
        let update = UserUpdate::new(user.id, self.clock.now()).with_role(role);
        let updated = self.user_repo.update(update).await?;
        tracing::info!(user_id = %updated.id, %role, "user role changed");

        self.recorder
            .record(
                Some(actor.id),
                None,
                ActivityAction::Edit,
                format!("Changed role of user {} to {role}", updated.id),
            )
            .await;

        Ok(updated.into())
    }

    pub async fn deactivate_user(
        &self,
        actor: &AuthenticatedUser,
        user_id: Uuid,
    ) -> ApplicationResult<()> {
        ensure_admin(actor)?;

        let user = self.load_user(user_id).await?;
        if !user.is_active {
            return Err(ApplicationError::validation("user is already deactivated"));
        }

        let update = UserUpdate::new(user.id, self.clock.now()).with_is_active(false);
        self.user_repo.update(update).await?;
        tracing::info!(%user_id, "user deactivated");

        self.recorder
            .record(
                Some(actor.id),
                None,
                ActivityAction::Edit,
                format!("Deactivated user {user_id}"),
            )
            .await;

        Ok(())
    }

    pub async fn reactivate_user(
        &self,
        actor: &AuthenticatedUser,
        user_id: Uuid,
    ) -> ApplicationResult<UserDto> {
        ensure_admin(actor)?;

        let user = self.load_user(user_id).await?;
        if user.is_active {
            return Err(ApplicationError::validation("user is already active"));
        }

        let update = UserUpdate::new(user.id, self.clock.now()).with_is_active(true);
        let updated = self.user_repo.update(update).await?;
        tracing::info!(%user_id, "user reactivated");

        self.recorder
            .record(
                Some(actor.id),
                None,
                ActivityAction::Edit,
                format!("Reactivated user {user_id}"),
            )
            .await;

        Ok(updated.into())
    }

    async fn load_user(&self, user_id: Uuid) -> ApplicationResult<User> {
        self.user_repo
            .find_by_id(UserId::from(user_id))
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("user not found: {user_id}")))
    }
}

fn validate_password(password: &str) -> ApplicationResult<()> {
    if password.len() < 8 {
        return Err(ApplicationError::validation(
            "password must be at least 8 characters long",
        ));
    }
    Ok(())
}
