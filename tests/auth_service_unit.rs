mod support;

use std::sync::Arc;

use chrono::Duration;
use crm_core::application::commands::{AuthService, AuthenticateCommand};
use crm_core::application::error::ApplicationError;
use crm_core::application::ports::security::TokenIssuer;
use crm_core::domain::user::UserId;
use crm_core::infrastructure::security::token::JwtTokenIssuer;
use support::{InMemoryUserRepo, PlaintextHasher, admin_user, make_user, staff_user};
use uuid::Uuid;

const TEST_SECRET: &str = "unit-test-secret-unit-test-secret";

fn service(repo: Arc<InMemoryUserRepo>) -> (AuthService, Arc<JwtTokenIssuer>) {
    let issuer = Arc::new(JwtTokenIssuer::new(
        TEST_SECRET,
        Duration::seconds(3600),
        Duration::seconds(86_400),
    ));
    let service = AuthService::new(repo, Arc::new(PlaintextHasher), issuer.clone());
    (service, issuer)
}

#[tokio::test]
async fn valid_credentials_yield_two_distinct_verifiable_tokens() {
    let user = staff_user();
    let user_id = user.id;
    let repo = Arc::new(InMemoryUserRepo::with_users([user]));
    let (service, issuer) = service(repo);

    let tokens = service
        .authenticate(AuthenticateCommand {
            email: "staff@crm.com".into(),
            password: "secret123".into(),
        })
        .await
        .unwrap();

    assert_eq!(tokens.user_id, Uuid::from(user_id));
    assert_ne!(tokens.access_token, tokens.refresh_token);

    let access = issuer.verify(&tokens.access_token).unwrap();
    let refresh = issuer.verify(&tokens.refresh_token).unwrap();
    assert_eq!(access.subject, user_id);
    assert_eq!(refresh.subject, user_id);
    assert!(refresh.expires_at > access.expires_at);
    // Each token carries its own id even for the same subject.
    assert_ne!(access.token_id, refresh.token_id);
}

#[tokio::test]
async fn blank_credentials_are_rejected_before_lookup() {
    let repo = Arc::new(InMemoryUserRepo::default());
    let (service, _) = service(repo);

    let err = service
        .authenticate(AuthenticateCommand {
            email: "   ".into(),
            password: "secret123".into(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Validation(_)));

    let err = service
        .authenticate(AuthenticateCommand {
            email: "staff@crm.com".into(),
            password: "".into(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Validation(_)));
}

#[tokio::test]
async fn unknown_email_reports_not_found() {
    let repo = Arc::new(InMemoryUserRepo::default());
    let (service, _) = service(repo);

    let err = service
        .authenticate(AuthenticateCommand {
            email: "nobody@crm.com".into(),
            password: "secret123".into(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));
}

#[tokio::test]
async fn inactive_user_is_indistinguishable_from_missing() {
    let user = make_user("dormant", "dormant@crm.com", Default::default(), false);
    let repo = Arc::new(InMemoryUserRepo::with_users([user]));
    let (service, _) = service(repo);

    let err = service
        .authenticate(AuthenticateCommand {
            email: "dormant@crm.com".into(),
            password: "secret123".into(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));
}

#[tokio::test]
async fn wrong_password_is_unauthorized() {
    let repo = Arc::new(InMemoryUserRepo::with_users([staff_user()]));
    let (service, _) = service(repo);

    let err = service
        .authenticate(AuthenticateCommand {
            email: "staff@crm.com".into(),
            password: "not-the-password".into(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Unauthorized(_)));
}

#[tokio::test]
async fn detail_hides_inactive_and_missing_users() {
    let admin = admin_user();
    let admin_id = admin.id;
    let inactive = make_user("dormant", "dormant@crm.com", Default::default(), false);
    let inactive_id = inactive.id;
    let repo = Arc::new(InMemoryUserRepo::with_users([admin, inactive]));
    let (service, _) = service(repo);

    let dto = service.get_detail(Uuid::from(admin_id)).await.unwrap();
    assert_eq!(dto.username, "admin");

    let err = service
        .get_detail(Uuid::from(inactive_id))
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));

    let err = service.get_detail(Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));
}

#[tokio::test]
async fn token_subject_survives_round_trip_through_issuer() {
    let issuer = JwtTokenIssuer::new(
        TEST_SECRET,
        Duration::seconds(60),
        Duration::seconds(120),
    );
    let subject = UserId::generate();
    let issued = issuer
        .issue(subject, crm_core::application::ports::security::TokenKind::Access)
        .unwrap();
    assert!(issuer.is_valid(&issued.token, subject));
    assert!(!issuer.is_valid("not-a-token", subject));
}
