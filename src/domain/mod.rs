pub mod activity;
pub mod customer;
pub mod errors;
pub mod note;
pub mod user;
