// tests/support/builders.rs
use chrono::{DateTime, TimeZone, Utc};
use crm_core::application::dto::AuthenticatedUser;
use crm_core::domain::customer::{Customer, CustomerId};
use crm_core::domain::user::{Email, PasswordHash, Role, User, UserId, Username};
use uuid::Uuid;

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

pub fn make_user(username: &str, email: &str, role: Role, is_active: bool) -> User {
    let now = fixed_now();
    User {
        id: UserId::generate(),
        username: Username::new(username).unwrap(),
        email: Email::new(email).unwrap(),
        password_hash: PasswordHash::new("plain$secret123".to_string()).unwrap(),
        full_name: Some(username.to_string()),
        role,
        is_active,
        last_login: None,
        created_at: now,
        updated_at: now,
    }
}

pub fn admin_user() -> User {
    make_user("admin", "admin@crm.com", Role::Admin, true)
}

pub fn staff_user() -> User {
    make_user("staff", "staff@crm.com", Role::Staff, true)
}

pub fn authenticated(user: &User) -> AuthenticatedUser {
    AuthenticatedUser::from(user)
}

pub fn make_customer(full_name: &str, email: &str) -> Customer {
    let now = fixed_now();
    Customer {
        id: CustomerId(Uuid::new_v4()),
        full_name: full_name.to_string(),
        email: Email::new(email).unwrap(),
        phone: None,
        address: None,
        description: None,
        created_by: None,
        created_at: now,
        updated_at: now,
        deleted_at: None,
    }
}
