use crate::application::{
    commands::ensure_admin,
    dto::{AuthenticatedUser, Page, UserDto, normalize_size},
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::user::{UserId, UserListFilter, UserRepository};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, Clone, Default)]
pub struct ListUsersQuery {
    pub filter: UserListFilter,
    pub page: u32,
    pub size: u32,
}

pub struct UserQueryService {
    user_repo: Arc<dyn UserRepository>,
}

impl UserQueryService {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    pub async fn list_users(
        &self,
        actor: &AuthenticatedUser,
        query: ListUsersQuery,
    ) -> ApplicationResult<Page<UserDto>> {
        ensure_admin(actor)?;

        let size = normalize_size(query.size);
        let (users, total) = self
            .user_repo
            .list_page(&query.filter, query.page, size)
            .await?;

        let items: Vec<UserDto> = users.into_iter().map(Into::into).collect();
        Ok(Page::new(items, query.page, size, total))
    }

    pub async fn get_user(
        &self,
        actor: &AuthenticatedUser,
        user_id: Uuid,
    ) -> ApplicationResult<UserDto> {
        ensure_admin(actor)?;

        self.user_repo
            .find_by_id(UserId::from(user_id))
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found(format!("user not found: {user_id}")))
    }
}
