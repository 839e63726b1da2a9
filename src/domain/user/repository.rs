use crate::domain::errors::DomainResult;
use crate::domain::user::{
    entity::{NewUser, User, UserUpdate},
    value_objects::{Email, Role, UserId, Username},
};
use async_trait::async_trait;

/// Optional filters for the paged user listing; absent filter = no constraint.
#[derive(Debug, Clone, Default)]
pub struct UserListFilter {
    pub keyword: Option<String>,
    pub is_active: Option<bool>,
    pub role: Option<Role>,
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User>;

    async fn update(&self, update: UserUpdate) -> DomainResult<User>;

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>>;

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>>;

    async fn find_active_by_email(&self, email: &Email) -> DomainResult<Option<User>>;

    async fn exists_by_username(&self, username: &Username) -> DomainResult<bool>;

    async fn exists_by_email(&self, email: &Email) -> DomainResult<bool>;

    /// Newest-first page of users plus the total row count for the filter.
    async fn list_page(
        &self,
        filter: &UserListFilter,
        page: u32,
        size: u32,
    ) -> DomainResult<(Vec<User>, u64)>;
}
