mod support;

use std::sync::Arc;

use chrono::Duration;
use crm_core::application::error::ApplicationError;
use crm_core::application::queries::{ActivityQueryService, SearchActivityLogsQuery};
use crm_core::domain::activity::{
    ActivityAction, ActivityLogFilter, ActivityLogRepository, ActivityType, NewActivityLog,
};
use crm_core::domain::user::UserId;
use support::{InMemoryActivityLogRepo, admin_user, authenticated, fixed_now, staff_user};

async fn seeded_repo(user_id: UserId, username: &str) -> Arc<InMemoryActivityLogRepo> {
    let repo = Arc::new(InMemoryActivityLogRepo::with_usernames([(
        user_id,
        username.to_string(),
    )]));

    let base = fixed_now();
    for (offset, action) in [
        (0, ActivityAction::Create),
        (1, ActivityAction::Update),
        (2, ActivityAction::Call),
        (3, ActivityAction::Login),
    ] {
        repo.insert(NewActivityLog::new(
            user_id,
            None,
            action,
            Some(format!("entry {offset}")),
            base + Duration::minutes(offset),
        ))
        .await
        .unwrap();
    }
    repo
}

#[tokio::test]
async fn search_requires_admin() {
    let staff = staff_user();
    let repo = Arc::new(InMemoryActivityLogRepo::default());
    let service = ActivityQueryService::new(repo);

    let err = service
        .search(&authenticated(&staff), SearchActivityLogsQuery::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(_)));
}

#[tokio::test]
async fn search_filters_by_type_and_returns_newest_first() {
    let admin = admin_user();
    let repo = seeded_repo(admin.id, "admin").await;
    let service = ActivityQueryService::new(repo);

    let page = service
        .search(
            &authenticated(&admin),
            SearchActivityLogsQuery {
                filter: ActivityLogFilter {
                    activity_type: Some(ActivityType::Log),
                    ..Default::default()
                },
                page: 0,
                size: 10,
            },
        )
        .await
        .unwrap();

    assert_eq!(page.total_items, 3);
    assert_eq!(page.items.len(), 3);
    // Login was recorded last so it comes back first.
    assert_eq!(page.items[0].action, ActivityAction::Login);
    assert!(page.items.iter().all(|i| i.activity_type == ActivityType::Log));
    assert_eq!(page.items[0].username.as_deref(), Some("admin"));
}

#[tokio::test]
async fn search_pages_and_counts_totals() {
    let admin = admin_user();
    let repo = seeded_repo(admin.id, "admin").await;
    let service = ActivityQueryService::new(repo);

    let page = service
        .search(
            &authenticated(&admin),
            SearchActivityLogsQuery {
                filter: ActivityLogFilter::default(),
                page: 1,
                size: 3,
            },
        )
        .await
        .unwrap();

    assert_eq!(page.total_items, 4);
    assert_eq!(page.total_pages, 2);
    assert_eq!(page.items.len(), 1);
}

#[tokio::test]
async fn export_requires_admin() {
    let staff = staff_user();
    let service = ActivityQueryService::new(Arc::new(InMemoryActivityLogRepo::default()));

    let err = service
        .export_csv(&authenticated(&staff), ActivityLogFilter::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(_)));
}

#[tokio::test]
async fn export_renders_header_and_flattens_newlines() {
    let admin = admin_user();
    let repo = Arc::new(InMemoryActivityLogRepo::with_usernames([(
        admin.id,
        "admin".to_string(),
    )]));
    repo.insert(NewActivityLog::new(
        admin.id,
        None,
        ActivityAction::Create,
        Some("line one\r\nline two".to_string()),
        fixed_now(),
    ))
    .await
    .unwrap();

    let service = ActivityQueryService::new(repo);
    let csv = service
        .export_csv(&authenticated(&admin), ActivityLogFilter::default())
        .await
        .unwrap();

    let mut lines = csv.lines();
    assert_eq!(
        lines.next(),
        Some("id,user_id,username,action,description,created_at")
    );
    let row = lines.next().unwrap();
    assert!(row.contains("CREATE"));
    assert!(row.contains("line one  line two"));
    assert!(row.contains("admin"));
    assert!(lines.next().is_none());
}

#[tokio::test]
async fn export_leaves_username_blank_for_unknown_users() {
    let admin = admin_user();
    let repo = Arc::new(InMemoryActivityLogRepo::default());
    repo.insert(NewActivityLog::new(
        admin.id,
        None,
        ActivityAction::Update,
        Some("orphaned".to_string()),
        fixed_now(),
    ))
    .await
    .unwrap();

    let service = ActivityQueryService::new(repo);
    let csv = service
        .export_csv(&authenticated(&admin), ActivityLogFilter::default())
        .await
        .unwrap();

    let row = csv.lines().nth(1).unwrap();
    // id,user_id,username,... with the username column empty.
    assert!(row.contains(",,UPDATE,"));
}
