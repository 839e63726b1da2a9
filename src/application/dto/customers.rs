use crate::domain::customer::Customer;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerDto {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub description: Option<String>,
    pub created_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Customer> for CustomerDto {
    fn from(customer: Customer) -> Self {
        Self {
            id: customer.id.into(),
            full_name: customer.full_name,
            email: customer.email.into(),
            phone: customer.phone,
            address: customer.address,
            description: customer.description,
            created_by: customer.created_by.map(Into::into),
            created_at: customer.created_at,
            updated_at: customer.updated_at,
        }
    }
}
