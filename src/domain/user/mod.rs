// src/domain/user/mod.rs
pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{NewUser, User, UserUpdate};
pub use repository::{UserListFilter, UserRepository};
pub use value_objects::{Email, PasswordHash, Role, UserId, Username};
