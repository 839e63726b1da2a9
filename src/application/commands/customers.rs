use super::ActivityRecorder;
use crate::application::{
    dto::{AuthenticatedUser, CustomerDto},
    error::{ApplicationError, ApplicationResult},
    ports::time::Clock,
};
use crate::domain::activity::ActivityAction;
use crate::domain::customer::{
    Customer, CustomerId, CustomerRepository, CustomerUpdate, NewCustomer,
};
use crate::domain::user::Email;
use chrono::Duration;
use std::sync::Arc;
use uuid::Uuid;

/// How long after soft deletion a customer can still be restored.
pub const RESTORE_WINDOW_DAYS: i64 = 30;

pub struct CreateCustomerCommand {
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub description: Option<String>,
}

pub struct UpdateCustomerCommand {
    pub customer_id: Uuid,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub description: Option<String>,
}

pub struct CustomerCommandService {
    customer_repo: Arc<dyn CustomerRepository>,
    recorder: Arc<ActivityRecorder>,
    clock: Arc<dyn Clock>,
}

impl CustomerCommandService {
    pub fn new(
        customer_repo: Arc<dyn CustomerRepository>,
        recorder: Arc<ActivityRecorder>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            customer_repo,
            recorder,
            clock,
        }
    }

    pub async fn create_customer(
        &self,
        actor: &AuthenticatedUser,
        command: CreateCustomerCommand,
    ) -> ApplicationResult<CustomerDto> {
        if command.full_name.trim().is_empty() {
            return Err(ApplicationError::validation("full name is required"));
        }
        let email = Email::new(command.email)?;

        if self.customer_repo.exists_live_by_email(&email).await? {
            return Err(ApplicationError::conflict(format!(
                "email already exists: {email}"
            )));
        }
        if let Some(phone) = command.phone.as_deref() {
            if !phone.is_empty() && self.customer_repo.exists_live_by_phone(phone).await? {
                return Err(ApplicationError::conflict(format!(
                    "phone number already exists: {phone}"
                )));
            }
        }

        let new_customer = NewCustomer {
            full_name: command.full_name,
            email,
            phone: command.phone,
            address: command.address,
            description: command.description,
            created_by: Some(actor.id),
            created_at: self.clock.now(),
        };

        let customer = self.customer_repo.insert(new_customer).await?;
        tracing::info!(customer_id = %customer.id, "customer created");

        self.recorder
            .record(
                Some(actor.id),
                None,
                ActivityAction::Create,
                format!("Created customer {}", customer.id),
            )
            .await;

        Ok(customer.into())
    }

    pub async fn update_customer(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateCustomerCommand,
    ) -> ApplicationResult<CustomerDto> {
        let customer = self.load_live_customer(command.customer_id).await?;
        let email = Email::new(command.email)?;

        if let Some(existing) = self.customer_repo.find_live_by_email(&email).await? {
            if existing.id != customer.id {
                return Err(ApplicationError::conflict(format!(
                    "email already exists: {email}"
                )));
            }
        }
        if let Some(phone) = command.phone.as_deref() {
            if !phone.is_empty() {
                if let Some(existing) = self.customer_repo.find_live_by_phone(phone).await? {
                    if existing.id != customer.id {
                        return Err(ApplicationError::conflict(format!(
                            "phone number already exists: {phone}"
                        )));
                    }
                }
            }
        }

        let update = CustomerUpdate {
            id: customer.id,
            full_name: command.full_name,
            email,
            phone: command.phone,
            address: command.address,
            description: command.description,
            updated_at: self.clock.now(),
        };

        let updated = self.customer_repo.update(update).await?;

        self.recorder
            .record(
                Some(actor.id),
                None,
                ActivityAction::Update,
                format!("Updated customer {}", updated.id),
            )
            .await;

        Ok(updated.into())
    }

    pub async fn delete_customer(
        &self,
        actor: &AuthenticatedUser,
        customer_id: Uuid,
    ) -> ApplicationResult<()> {
        let customer = self.load_live_customer(customer_id).await?;

        self.customer_repo
            .soft_delete(customer.id, self.clock.now())
            .await?;
        tracing::info!(%customer_id, "customer soft-deleted");

        self.recorder
            .record(
                Some(actor.id),
                None,
                ActivityAction::Edit,
                format!("Deleted customer {customer_id}"),
            )
            .await;

        Ok(())
    }

    /// Undo a soft delete, allowed only within the restore window.
    pub async fn restore_customer(
        &self,
        actor: &AuthenticatedUser,
        customer_id: Uuid,
    ) -> ApplicationResult<CustomerDto> {
        let customer = self
            .customer_repo
            .find_by_id(CustomerId::from(customer_id))
            .await?
            .ok_or_else(|| {
                ApplicationError::not_found(format!("customer not found: {customer_id}"))
            })?;

        let Some(deleted_at) = customer.deleted_at else {
            return Err(ApplicationError::validation("customer is not deleted"));
        };

        let now = self.clock.now();
        if now - deleted_at > Duration::days(RESTORE_WINDOW_DAYS) {
            return Err(ApplicationError::validation(
                "restore window has expired for this customer",
            ));
        }

        let restored = self.customer_repo.restore(customer.id, now).await?;
        tracing::info!(%customer_id, "customer restored");

        self.recorder
            .record(
                Some(actor.id),
                None,
                ActivityAction::Edit,
                format!("Restored customer {customer_id}"),
            )
            .await;

        Ok(restored.into())
    }

    async fn load_live_customer(&self, customer_id: Uuid) -> ApplicationResult<Customer> {
        self.customer_repo
            .find_live_by_id(CustomerId::from(customer_id))
            .await?
            .ok_or_else(|| {
                ApplicationError::not_found(format!("customer not found: {customer_id}"))
            })
    }
}
