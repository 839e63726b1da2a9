// src/domain/customer/mod.rs
pub mod entity;
pub mod repository;

pub use entity::{Customer, CustomerId, CustomerUpdate, NewCustomer};
pub use repository::CustomerRepository;
