// src/infrastructure/repositories/postgres_customer.rs
use super::map_sqlx;
use crate::domain::customer::{
    Customer, CustomerId, CustomerRepository, CustomerUpdate, NewCustomer,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{Email, UserId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

#[derive(Clone)]
pub struct PostgresCustomerRepository {
    pool: PgPool,
}

impl PostgresCustomerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const CUSTOMER_COLUMNS: &str = "id, full_name, email, phone, address, description, created_by, \
                                created_at, updated_at, deleted_at";

#[derive(Debug, FromRow)]
struct CustomerRow {
    id: Uuid,
    full_name: String,
    email: String,
    phone: Option<String>,
    address: Option<String>,
    description: Option<String>,
    created_by: Option<Uuid>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl TryFrom<CustomerRow> for Customer {
    type Error = DomainError;

    fn try_from(row: CustomerRow) -> Result<Self, Self::Error> {
        Ok(Customer {
            id: CustomerId::from(row.id),
            full_name: row.full_name,
            email: Email::new(row.email)?,
            phone: row.phone,
            address: row.address,
            description: row.description,
            created_by: row.created_by.map(UserId::from),
            created_at: row.created_at,
            updated_at: row.updated_at,
            deleted_at: row.deleted_at,
        })
    }
}

#[async_trait]
impl CustomerRepository for PostgresCustomerRepository {
    async fn insert(&self, new_customer: NewCustomer) -> DomainResult<Customer> {
        let row = sqlx::query_as::<_, CustomerRow>(&format!(
            "INSERT INTO customers (full_name, email, phone, address, description, created_by, \
                                    created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $7)
             RETURNING {CUSTOMER_COLUMNS}"
        ))
        .bind(new_customer.full_name)
        .bind(new_customer.email.as_str())
        .bind(new_customer.phone)
        .bind(new_customer.address)
        .bind(new_customer.description)
        .bind(new_customer.created_by.map(Uuid::from))
        .bind(new_customer.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Customer::try_from(row)
    }

    async fn update(&self, update: CustomerUpdate) -> DomainResult<Customer> {
        let row = sqlx::query_as::<_, CustomerRow>(&format!(
            "UPDATE customers SET
                full_name = $2, email = $3, phone = $4, address = $5, description = $6,
                updated_at = $7
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {CUSTOMER_COLUMNS}"
        ))
        .bind(Uuid::from(update.id))
        .bind(update.full_name)
        .bind(update.email.as_str())
        .bind(update.phone)
        .bind(update.address)
        .bind(update.description)
        .bind(update.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("customer not found".into()))?;

        Customer::try_from(row)
    }

    async fn find_live_by_id(&self, id: CustomerId) -> DomainResult<Option<Customer>> {
        let row = sqlx::query_as::<_, CustomerRow>(&format!(
            "SELECT {CUSTOMER_COLUMNS} FROM customers WHERE id = $1 AND deleted_at IS NULL"
        ))
        .bind(Uuid::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Customer::try_from).transpose()
    }

    async fn find_by_id(&self, id: CustomerId) -> DomainResult<Option<Customer>> {
        let row = sqlx::query_as::<_, CustomerRow>(&format!(
            "SELECT {CUSTOMER_COLUMNS} FROM customers WHERE id = $1"
        ))
        .bind(Uuid::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Customer::try_from).transpose()
    }

    async fn find_live_by_email(&self, email: &Email) -> DomainResult<Option<Customer>> {
        let row = sqlx::query_as::<_, CustomerRow>(&format!(
            "SELECT {CUSTOMER_COLUMNS} FROM customers WHERE email = $1 AND deleted_at IS NULL"
        ))
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Customer::try_from).transpose()
    }

    async fn find_live_by_phone(&self, phone: &str) -> DomainResult<Option<Customer>> {
        let row = sqlx::query_as::<_, CustomerRow>(&format!(
            "SELECT {CUSTOMER_COLUMNS} FROM customers WHERE phone = $1 AND deleted_at IS NULL"
        ))
        .bind(phone)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Customer::try_from).transpose()
    }

    async fn exists_live_by_email(&self, email: &Email) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM customers WHERE email = $1 AND deleted_at IS NULL)",
        )
        .bind(email.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)
    }

    async fn exists_live_by_phone(&self, phone: &str) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM customers WHERE phone = $1 AND deleted_at IS NULL)",
        )
        .bind(phone)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)
    }

    async fn search(
        &self,
        keyword: Option<&str>,
        page: u32,
        size: u32,
    ) -> DomainResult<(Vec<Customer>, u64)> {
        const FILTER_SQL: &str = "deleted_at IS NULL
            AND ($1::text IS NULL OR
                 full_name ILIKE '%' || $1 || '%' OR
                 email ILIKE '%' || $1 || '%' OR
                 phone LIKE '%' || $1 || '%' OR
                 address ILIKE '%' || $1 || '%')";

        let rows = sqlx::query_as::<_, CustomerRow>(&format!(
            "SELECT {CUSTOMER_COLUMNS} FROM customers
             WHERE {FILTER_SQL}
             ORDER BY created_at DESC
             LIMIT $2 OFFSET $3"
        ))
        .bind(keyword)
        .bind(i64::from(size))
        .bind(i64::from(page) * i64::from(size))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let total = sqlx::query_scalar::<_, i64>(&format!(
            "SELECT COUNT(1) FROM customers WHERE {FILTER_SQL}"
        ))
        .bind(keyword)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let customers = rows
            .into_iter()
            .map(Customer::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((customers, total as u64))
    }

    async fn find_recent(&self, limit: u32) -> DomainResult<Vec<Customer>> {
        let rows = sqlx::query_as::<_, CustomerRow>(&format!(
            "SELECT {CUSTOMER_COLUMNS} FROM customers
             WHERE deleted_at IS NULL
             ORDER BY created_at DESC
             LIMIT $1"
        ))
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Customer::try_from).collect()
    }

    async fn soft_delete(&self, id: CustomerId, deleted_at: DateTime<Utc>) -> DomainResult<()> {
        let result = sqlx::query(
            "UPDATE customers SET deleted_at = $2, updated_at = $2
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(Uuid::from(id))
        .bind(deleted_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("customer not found".into()));
        }
        Ok(())
    }

    async fn restore(&self, id: CustomerId, updated_at: DateTime<Utc>) -> DomainResult<Customer> {
        let row = sqlx::query_as::<_, CustomerRow>(&format!(
            "UPDATE customers SET deleted_at = NULL, updated_at = $2
             WHERE id = $1 AND deleted_at IS NOT NULL
             RETURNING {CUSTOMER_COLUMNS}"
        ))
        .bind(Uuid::from(id))
        .bind(updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("customer not found".into()))?;

        Customer::try_from(row)
    }
}
