// src/presentation/http/controllers/mod.rs
pub mod audit;
pub mod auth;
pub mod customers;
pub mod notes;
pub mod users;
