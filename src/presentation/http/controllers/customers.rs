// src/presentation/http/controllers/customers.rs
use crate::application::commands::customers::{CreateCustomerCommand, UpdateCustomerCommand};
use crate::application::dto::{CustomerDto, Page};
use crate::application::queries::SearchCustomersQuery;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct CustomerPayload {
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchCustomersParams {
    #[serde(default)]
    pub keyword: Option<String>,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub size: u32,
}

pub async fn create_customer(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Json(payload): Json<CustomerPayload>,
) -> HttpResult<Json<CustomerDto>> {
    state
        .services
        .customer_commands
        .create_customer(
            &actor,
            CreateCustomerCommand {
                full_name: payload.full_name,
                email: payload.email,
                phone: payload.phone,
                address: payload.address,
                description: payload.description,
            },
        )
        .await
        .into_http()
        .map(Json)
}

pub async fn search_customers(
    Extension(state): Extension<HttpState>,
    Authenticated(_actor): Authenticated,
    Query(params): Query<SearchCustomersParams>,
) -> HttpResult<Json<Page<CustomerDto>>> {
    state
        .services
        .customer_queries
        .search_customers(SearchCustomersQuery {
            keyword: params.keyword,
            page: params.page,
            size: params.size,
        })
        .await
        .into_http()
        .map(Json)
}

pub async fn recent_customers(
    Extension(state): Extension<HttpState>,
    Authenticated(_actor): Authenticated,
) -> HttpResult<Json<Vec<CustomerDto>>> {
    state
        .services
        .customer_queries
        .recent_customers()
        .await
        .into_http()
        .map(Json)
}

pub async fn get_customer(
    Extension(state): Extension<HttpState>,
    Authenticated(_actor): Authenticated,
    Path(id): Path<Uuid>,
) -> HttpResult<Json<CustomerDto>> {
    state
        .services
        .customer_queries
        .get_customer(id)
        .await
        .into_http()
        .map(Json)
}

pub async fn update_customer(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Path(id): Path<Uuid>,
    Json(payload): Json<CustomerPayload>,
) -> HttpResult<Json<CustomerDto>> {
    state
        .services
        .customer_commands
        .update_customer(
            &actor,
            UpdateCustomerCommand {
                customer_id: id,
                full_name: payload.full_name,
                email: payload.email,
                phone: payload.phone,
                address: payload.address,
                description: payload.description,
            },
        )
        .await
        .into_http()
        .map(Json)
}

pub async fn delete_customer(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Path(id): Path<Uuid>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .customer_commands
        .delete_customer(&actor, id)
        .await
        .into_http()?;
    Ok(Json(serde_json::json!({ "status": "deleted" })))
}

pub async fn restore_customer(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Path(id): Path<Uuid>,
) -> HttpResult<Json<CustomerDto>> {
    state
        .services
        .customer_commands
        .restore_customer(&actor, id)
        .await
        .into_http()
        .map(Json)
}
