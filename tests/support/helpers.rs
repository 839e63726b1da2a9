// tests/support/helpers.rs
use std::sync::Arc;

use axum::Router;
use chrono::Duration;
use crm_core::application::ports::security::{TokenIssuer, TokenKind};
use crm_core::application::services::ApplicationServices;
use crm_core::domain::user::User;
use crm_core::infrastructure::security::token::JwtTokenIssuer;
use crm_core::presentation::http::{routes::build_router, state::HttpState};

use super::builders::{admin_user, fixed_now, staff_user};
use super::mocks::{
    FixedClock, InMemoryActivityLogRepo, InMemoryCustomerRepo, InMemoryNoteRepo, InMemoryUserRepo,
    PlaintextHasher,
};

pub const TEST_JWT_SECRET: &str = "e2e-test-secret-e2e-test-secret-e2e";

pub struct TestApp {
    pub router: Router,
    pub issuer: Arc<JwtTokenIssuer>,
    pub admin: User,
    pub staff: User,
}

impl TestApp {
    pub fn bearer(&self, user: &User) -> String {
        let issued = self.issuer.issue(user.id, TokenKind::Access).unwrap();
        format!("Bearer {}", issued.token)
    }
}

/// Full router over in-memory repositories, pre-seeded with one admin and one
/// staff user whose password is "secret123" under the plaintext test hasher.
pub fn make_test_app() -> TestApp {
    let admin = admin_user();
    let staff = staff_user();

    let user_repo = Arc::new(InMemoryUserRepo::with_users([admin.clone(), staff.clone()]));
    let customer_repo = Arc::new(InMemoryCustomerRepo::default());
    let note_repo = Arc::new(InMemoryNoteRepo::default());
    let activity_repo = Arc::new(InMemoryActivityLogRepo::with_usernames([
        (admin.id, "admin".to_string()),
        (staff.id, "staff".to_string()),
    ]));

    let issuer = Arc::new(JwtTokenIssuer::new(
        TEST_JWT_SECRET,
        Duration::seconds(3600),
        Duration::seconds(86_400),
    ));

    let services = Arc::new(ApplicationServices::new(
        user_repo,
        customer_repo,
        note_repo,
        activity_repo,
        Arc::new(PlaintextHasher),
        issuer.clone(),
        Arc::new(FixedClock(fixed_now())),
    ));

    let router = build_router(
        HttpState { services },
        &["http://localhost:3000".to_string()],
    );

    TestApp {
        router,
        issuer,
        admin,
        staff,
    }
}
