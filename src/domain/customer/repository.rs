use crate::domain::customer::entity::{Customer, CustomerId, CustomerUpdate, NewCustomer};
use crate::domain::errors::DomainResult;
use crate::domain::user::Email;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait CustomerRepository: Send + Sync {
    async fn insert(&self, new_customer: NewCustomer) -> DomainResult<Customer>;

    async fn update(&self, update: CustomerUpdate) -> DomainResult<Customer>;

    /// Lookup that ignores soft-deleted rows.
    async fn find_live_by_id(&self, id: CustomerId) -> DomainResult<Option<Customer>>;

    /// Lookup including soft-deleted rows, used by restore.
    async fn find_by_id(&self, id: CustomerId) -> DomainResult<Option<Customer>>;

    async fn find_live_by_email(&self, email: &Email) -> DomainResult<Option<Customer>>;

    async fn find_live_by_phone(&self, phone: &str) -> DomainResult<Option<Customer>>;

    async fn exists_live_by_email(&self, email: &Email) -> DomainResult<bool>;

    async fn exists_live_by_phone(&self, phone: &str) -> DomainResult<bool>;

    /// Keyword search over name/email/phone/address among live customers,
    /// newest first, plus the total match count.
    async fn search(
        &self,
        keyword: Option<&str>,
        page: u32,
        size: u32,
    ) -> DomainResult<(Vec<Customer>, u64)>;

    async fn find_recent(&self, limit: u32) -> DomainResult<Vec<Customer>>;

    async fn soft_delete(&self, id: CustomerId, deleted_at: DateTime<Utc>) -> DomainResult<()>;

    async fn restore(&self, id: CustomerId, updated_at: DateTime<Utc>) -> DomainResult<Customer>;
}
