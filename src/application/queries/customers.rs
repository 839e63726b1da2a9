use crate::application::{
    dto::{CustomerDto, Page, normalize_size},
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::customer::{CustomerId, CustomerRepository};
use std::sync::Arc;
use uuid::Uuid;

const RECENT_CUSTOMERS_LIMIT: u32 = 5;

#[derive(Debug, Clone, Default)]
pub struct SearchCustomersQuery {
    pub keyword: Option<String>,
    pub page: u32,
    pub size: u32,
}

pub struct CustomerQueryService {
    customer_repo: Arc<dyn CustomerRepository>,
}

impl CustomerQueryService {
    pub fn new(customer_repo: Arc<dyn CustomerRepository>) -> Self {
        Self { customer_repo }
    }

    pub async fn search_customers(
        &self,
        query: SearchCustomersQuery,
    ) -> ApplicationResult<Page<CustomerDto>> {
        let size = normalize_size(query.size);
        let keyword = query
            .keyword
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty());

        let (customers, total) = self
            .customer_repo
            .search(keyword, query.page, size)
            .await?;

        let items: Vec<CustomerDto> = customers.into_iter().map(Into::into).collect();
        Ok(Page::new(items, query.page, size, total))
    }

    pub async fn get_customer(&self, customer_id: Uuid) -> ApplicationResult<CustomerDto> {
        self.customer_repo
            .find_live_by_id(CustomerId::from(customer_id))
            .await?
            .map(Into::into)
            .ok_or_else(|| {
                ApplicationError::not_found(format!("customer not found: {customer_id}"))
            })
    }

    pub async fn recent_customers(&self) -> ApplicationResult<Vec<CustomerDto>> {
        let customers = self.customer_repo.find_recent(RECENT_CUSTOMERS_LIMIT).await?;
        Ok(customers.into_iter().map(Into::into).collect())
    }
}
